//! Insert-only set of visited cell values.

use indexmap::IndexSet;
use knight_core::CellValue;

/// Values the walk has already landed on, in landing order.
///
/// Keyed by value rather than by cell: that is what makes the rule
/// "lowest unvisited number". Values are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet {
    values: IndexSet<CellValue>,
}

impl VisitedSet {
    /// A set holding only the start square's value.
    pub fn with_origin(origin: CellValue) -> Self {
        let mut values = IndexSet::new();
        values.insert(origin);
        Self { values }
    }

    /// Record `value`. Returns `false` if it was already present.
    pub fn insert(&mut self, value: CellValue) -> bool {
        self.values.insert(value)
    }

    /// Whether `value` has been visited.
    #[inline]
    pub fn contains(&self, value: CellValue) -> bool {
        self.values.contains(&value)
    }

    /// Number of distinct values visited, the origin included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been visited. Never true for a walk's set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in the order they were visited, origin first.
    pub fn iter(&self) -> impl Iterator<Item = CellValue> + '_ {
        self.values.iter().copied()
    }
}
