//! Text commands from input handlers and JSON output for observers

use crate::game::{Direction, Snapshot};

/// A command read from an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Named direction change ("up", "left", "north", ...)
    Turn(Direction),
    /// Raw `dx,dy` vector, validated by the engine
    Vector(i32, i32),
    /// Stop the game
    Quit,
}

impl Command {
    /// Parse a command from a string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        // Check for direction commands
        if let Some(dir) = Direction::from_str(s) {
            return Some(Command::Turn(dir));
        }

        if s.eq_ignore_ascii_case("quit") || s.eq_ignore_ascii_case("q") {
            return Some(Command::Quit);
        }

        let (dx, dy) = s.split_once(',')?;
        let dx = dx.trim().parse().ok()?;
        let dy = dy.trim().parse().ok()?;
        Some(Command::Vector(dx, dy))
    }
}

impl Snapshot {
    /// Serialize snapshot to a single-line JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
