// ============================================================================
// Comparator Interface
// Defines the contract for fallible ordering strategies
// ============================================================================

use crate::numeric::CompareResult;
use std::cmp::Ordering;

/// Strategy interface for comparators over loosely typed items.
/// Implementations: NumberComparator
pub trait Comparator: Send + Sync {
    /// Item type being ordered
    type Item;

    /// Order two items
    ///
    /// # Returns
    /// The ordering of `a` relative to `b`, or an error if either item is
    /// not something this comparator can order
    fn compare(&self, a: &Self::Item, b: &Self::Item) -> CompareResult<Ordering>;

    /// Get the comparator name for logging
    fn name(&self) -> &str;
}
