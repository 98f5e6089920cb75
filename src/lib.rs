// ============================================================================
// Number Comparator Library
// Ordering of mixed integral/fractional numbers with an absolute-value mode
// ============================================================================

//! # Number Comparator
//!
//! Orders numeric values that may be absent, 64-bit integers, or fractional
//! values (floats and decimals), optionally comparing their absolute values.
//!
//! ## Features
//!
//! - **Absent values first**: `Value::Null` sorts before every number
//! - **Integral and fractional paths**: `i64` pairs compare exactly, mixed
//!   pairs compare as `f64`
//! - **Absolute mode** switchable at runtime, or selected via `CONTEXT_ABSOLUTE`
//! - **Explicit errors** for non-numeric operands instead of panics
//! - **Total order** including NaN, placed by `NanPolicy`
//!
//! ## Example
//!
//! ```rust
//! use number_comparator::prelude::*;
//! use std::cmp::Ordering;
//!
//! let comparator = NumberComparator::new();
//! assert_eq!(comparator.compare(&Value::Long(-5), &Value::Long(3)), Ok(Ordering::Less));
//! assert_eq!(comparator.compare(&Value::Long(2), &Value::Double(2.5)), Ok(Ordering::Less));
//! assert_eq!(comparator.compare(&Value::Null, &Value::Long(5)), Ok(Ordering::Less));
//!
//! comparator.set_absolute(true);
//! assert_eq!(comparator.compare(&Value::Long(-5), &Value::Long(3)), Ok(Ordering::Greater));
//!
//! let err = comparator.compare(&"text".into(), &Value::Long(5)).unwrap_err();
//! assert_eq!(err.operands(), InvalidOperands::First { found: "String" });
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ComparatorConfig, ComparatorContext, Number, Value, CONTEXT_ABSOLUTE};
    pub use crate::engine::{create_for_context, create_from_config, NumberComparator};
    pub use crate::interfaces::Comparator;
    pub use crate::numeric::{CompareError, CompareResult, InvalidOperands, NanPolicy};
}
