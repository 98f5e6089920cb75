// ============================================================================
// Numeric Module
// Comparison arithmetic and error types for the number comparators
// ============================================================================
//
// This module provides:
// - Ordering primitives for the integral (i64) and fractional (f64) paths
// - NanPolicy: placement of NaN in the otherwise total order
// - CompareError: rejection of non-numeric operands
//
// Design principles:
// - All fallible operations return Result (no panics)
// - Integral values widen to f64 on mixed comparisons (precision loss above 2^53)

mod errors;
mod ordering;

pub use errors::{CompareError, CompareResult, InvalidOperands};
pub use ordering::{
    compare_fractional, compare_integral, ordering_to_int, strip_sign_fractional,
    strip_sign_integral, NanPolicy,
};
