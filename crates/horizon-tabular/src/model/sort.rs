//! Sort order and sort state.

use std::cmp::Ordering;

/// A comparator for one column, as stored in a row type's comparator table.
pub type RowComparator<R> = fn(&R, &R) -> Ordering;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison result.
    ///
    /// Descending negates the result rather than re-deriving it, so for a
    /// strict comparator the descending order is exactly the reverse of the
    /// ascending one.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// The most recently applied sort of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
    /// The column rows are ordered by.
    pub column: usize,
    /// The direction.
    pub order: SortOrder,
}

impl SortState {
    /// Creates a sort state.
    pub fn new(column: usize, order: SortOrder) -> Self {
        Self { column, order }
    }

    /// Returns the order a header request for `column` should use.
    ///
    /// Requesting the active column again flips the direction; any other
    /// column starts ascending.
    pub fn next_order_for(current: Option<SortState>, column: usize) -> SortOrder {
        match current {
            Some(state) if state.column == column => state.order.toggled(),
            _ => SortOrder::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_apply_negates() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_next_order_for() {
        assert_eq!(SortState::next_order_for(None, 2), SortOrder::Ascending);

        let state = SortState::new(2, SortOrder::Ascending);
        assert_eq!(SortState::next_order_for(Some(state), 2), SortOrder::Descending);
        assert_eq!(SortState::next_order_for(Some(state), 1), SortOrder::Ascending);

        let state = SortState::new(2, SortOrder::Descending);
        assert_eq!(SortState::next_order_for(Some(state), 2), SortOrder::Ascending);
    }
}
