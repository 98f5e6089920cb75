// ============================================================================
// Engine Module
// Contains the comparator implementations and their factory
// ============================================================================

mod number_comparator;

pub mod factory;

pub use factory::{create_for_context, create_from_config};
pub use number_comparator::NumberComparator;
