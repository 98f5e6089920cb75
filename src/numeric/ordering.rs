// ============================================================================
// Ordering Primitives
// Integral and fractional comparison paths shared by the comparators
// ============================================================================

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where NaN sorts relative to every other number.
///
/// NaN always compares equal to NaN, so the resulting order stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NanPolicy {
    /// NaN is greater than every non-NaN number
    #[default]
    Last,
    /// NaN is less than every non-NaN number
    First,
}

impl NanPolicy {
    /// Ordering of a NaN operand against a non-NaN number.
    #[inline]
    const fn nan_vs_number(self) -> Ordering {
        match self {
            NanPolicy::Last => Ordering::Greater,
            NanPolicy::First => Ordering::Less,
        }
    }
}

/// Compare two integral values as signed 64-bit integers.
#[inline]
pub fn compare_integral(a: i64, b: i64) -> Ordering {
    a.cmp(&b)
}

/// Compare two doubles.
///
/// `0.0` and `-0.0` are equal. NaN placement follows `nan`.
#[inline]
pub fn compare_fractional(a: f64, b: f64, nan: NanPolicy) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => nan.nan_vs_number(),
        (false, true) => nan.nan_vs_number().reverse(),
        (false, false) => {
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        },
    }
}

/// Strip the sign of an integral value.
///
/// `i64::MIN` has no positive counterpart and wraps to itself.
#[inline]
pub const fn strip_sign_integral(value: i64) -> i64 {
    if value < 0 {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Strip the sign of a fractional value. `-0.0` and NaN are returned unchanged.
#[inline]
pub fn strip_sign_fractional(value: f64) -> f64 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

/// Encode an ordering as -1, 0 or 1.
#[inline]
pub const fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
