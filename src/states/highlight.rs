//! Keyboard highlight over the visible rows

/// Highlighted row index within the rows currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    index: Option<usize>,
}

impl Highlight {
    /// Current index
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Move down one row, wrapping to the first
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.index = match (self.index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(ix), len) => Some((ix + 1) % len),
        };
        self.index
    }

    /// Move up one row, wrapping to the last
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        self.index = match (self.index, len) {
            (_, 0) => None,
            (None, len) | (Some(0), len) => Some(len - 1),
            (Some(ix), _) => Some(ix - 1),
        };
        self.index
    }

    /// Keep the index valid after the row count changed
    pub fn clamp(&mut self, len: usize) {
        if let Some(ix) = self.index {
            self.index = (len > 0).then(|| ix.min(len - 1));
        }
    }

    /// Clear the highlight
    pub fn reset(&mut self) {
        self.index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_directions() {
        let mut highlight = Highlight::default();
        assert_eq!(highlight.next(3), Some(0));
        assert_eq!(highlight.next(3), Some(1));
        assert_eq!(highlight.next(3), Some(2));
        assert_eq!(highlight.next(3), Some(0));
        assert_eq!(highlight.prev(3), Some(2));

        highlight.reset();
        assert_eq!(highlight.prev(3), Some(2));
    }

    #[test]
    fn test_empty_list_has_no_highlight() {
        let mut highlight = Highlight::default();
        assert_eq!(highlight.next(0), None);
        assert_eq!(highlight.prev(0), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut highlight = Highlight::default();
        highlight.next(10);
        highlight.prev(10);
        assert_eq!(highlight.index(), Some(9));
        highlight.clamp(4);
        assert_eq!(highlight.index(), Some(3));
        highlight.clamp(0);
        assert_eq!(highlight.index(), None);
    }
}
