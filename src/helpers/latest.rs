//! Latest-value cell
//!
//! A shared cell that is written on every prop change and read by long-lived
//! handlers. Handlers hold a clone and always observe the most recent value,
//! so they never need to be rebuilt when the value flickers.

use std::cell::Cell;
use std::rc::Rc;

/// Shared, always-current copy of a small value
#[derive(Debug, Default)]
pub struct Latest<T: Copy> {
    cell: Rc<Cell<T>>,
}

impl<T: Copy> Latest<T> {
    /// Create a new cell holding `value`
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    /// Read the current value
    pub fn get(&self) -> T {
        self.cell.get()
    }

    /// Replace the current value
    pub fn set(&self, value: T) {
        self.cell.set(value);
    }
}

impl<T: Copy> Clone for Latest<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_observe_writes() {
        let owner = Latest::new(false);
        let reader = owner.clone();
        assert!(!reader.get());

        owner.set(true);
        assert!(reader.get());
    }
}
