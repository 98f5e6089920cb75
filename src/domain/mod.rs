// ============================================================================
// Domain Models Module
// Contains the comparable values, context markers and configuration
// ============================================================================

pub mod config;
pub mod context;
pub mod value;

pub use config::ComparatorConfig;
pub use context::{ComparatorContext, CONTEXT_ABSOLUTE};
pub use value::{Number, Value};
