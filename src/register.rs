//! Shared cell holding the snake's current direction

use std::sync::{Mutex, PoisonError};

use crate::game::Direction;

/// The current movement direction, written by input handlers and read by
/// the tick loop.
///
/// Writes are plain assignments under a lock: once [`set`](Self::set)
/// returns, every later [`get`](Self::get) observes the value or a newer one.
#[derive(Debug, Default)]
pub struct DirectionRegister {
    current: Mutex<Direction>,
}

impl DirectionRegister {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// Replace the stored direction and return the previous one
    pub fn set(&self, direction: Direction) -> Direction {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, direction)
    }

    /// Read the stored direction
    pub fn get(&self) -> Direction {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_east() {
        let register = DirectionRegister::default();
        assert_eq!(register.get(), Direction::East);
    }

    #[test]
    fn test_last_write_wins() {
        let register = DirectionRegister::new(Direction::North);
        assert_eq!(register.set(Direction::West), Direction::North);
        assert_eq!(register.set(Direction::South), Direction::West);
        assert_eq!(register.get(), Direction::South);
        // Idempotent reads
        assert_eq!(register.get(), register.get());
    }

    #[test]
    fn test_reversal_is_accepted() {
        let register = DirectionRegister::new(Direction::East);
        register.set(Direction::West);
        assert_eq!(register.get(), Direction::West);
    }

    #[test]
    fn test_concurrent_writes_yield_a_submitted_value() {
        for _ in 0..100 {
            let register = Arc::new(DirectionRegister::new(Direction::East));

            let writers: Vec<_> = [Direction::North, Direction::South]
                .into_iter()
                .map(|dir| {
                    let register = register.clone();
                    thread::spawn(move || {
                        register.set(dir);
                    })
                })
                .collect();

            for writer in writers {
                writer.join().unwrap();
            }

            let value = register.get();
            assert!(value == Direction::North || value == Direction::South);
        }
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let register = Arc::new(DirectionRegister::new(Direction::East));

        let poisoner = register.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.current.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        register.set(Direction::North);
        assert_eq!(register.get(), Direction::North);
    }
}
