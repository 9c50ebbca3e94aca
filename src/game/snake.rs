//! Snake body

use serde::Serialize;

use super::position::Position;

/// The snake's body, head first.
///
/// A body is a value: every tick builds a new one with [`Snake::slither`]
/// instead of moving segments in place. It always holds at least one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A one-cell snake at `head`
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments; `None` if `segments` is empty
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { body: segments })
        }
    }

    /// Get the snake's head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get all segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check whether any segment occupies `pos`
    pub fn occupies(&self, pos: &Position) -> bool {
        self.body.contains(pos)
    }

    /// New body with `new_head` in front and at most `target_length - 1`
    /// of the current segments behind it.
    ///
    /// Growth and sliding are the same operation: while the body is shorter
    /// than the target nothing falls off the tail.
    pub fn slither(&self, new_head: Position, target_length: usize) -> Snake {
        let keep = target_length.saturating_sub(1);
        let mut body = Vec::with_capacity(keep.min(self.body.len()) + 1);
        body.push(new_head);
        body.extend(self.body.iter().take(keep).copied());

        Snake { body }
    }
}
