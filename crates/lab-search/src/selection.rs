/// Which card of one rendered list is expanded, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        self.0
    }

    /// Select `index`, or clear the selection if it is already selected.
    /// Returns the new selection.
    pub const fn toggle(&mut self, index: usize) -> Option<usize> {
        self.0 = match self.0 {
            Some(current) if current == index => None,
            _ => Some(index),
        };
        self.0
    }

    pub const fn clear(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn same_index_twice_clears() {
        let mut s = Selection::default();
        assert_eq!(s.toggle(2), Some(2));
        assert_eq!(s.toggle(2), None);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(3, 0)]
    #[case(1, 4)]
    fn other_index_replaces(#[case] first: usize, #[case] second: usize) {
        let mut s = Selection::default();
        s.toggle(first);
        assert_eq!(s.toggle(second), Some(second));
        assert_eq!(s.index(), Some(second));
    }
}
