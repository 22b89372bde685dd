//! Scoped speculative changes to a position.

use std::ops::{Deref, DerefMut};

use super::Position;

/// A guard over a position that undoes, on drop, every record pushed since it
/// was opened. Probes apply moves through it and read the result; the
/// position is back to its prior state on every exit path.
pub struct Trial<'a> {
    position: &'a mut Position,
    depth: usize,
}

impl Position {
    /// Open a trial. Anything applied through the returned guard is rolled back
    /// when the guard goes out of scope.
    pub fn trial(&mut self) -> Trial<'_> {
        let depth = self.history.len();
        Trial {
            position: self,
            depth,
        }
    }
}

impl Deref for Trial<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        while self.position.history.len() > self.depth {
            self.position.undo_move();
        }
    }
}
