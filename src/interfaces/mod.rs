// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod comparator;

pub use comparator::Comparator;
