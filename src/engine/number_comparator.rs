// ============================================================================
// Number Comparator
// Orders mixed integral/fractional numbers, optionally by absolute value
// ============================================================================

use crate::domain::value::Repr;
use crate::domain::{ComparatorConfig, ComparatorContext, Number, Value};
use crate::interfaces::Comparator;
use crate::numeric::{
    compare_fractional, compare_integral, ordering_to_int, strip_sign_fractional,
    strip_sign_integral, CompareError, CompareResult, InvalidOperands, NanPolicy,
};
use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicBool};
use std::sync::OnceLock;

/// Shared default comparator, built on first use and never torn down.
static INSTANCE: OnceLock<NumberComparator> = OnceLock::new();

/// Comparator for numbers with an optional absolute-value mode.
///
/// Absent (`Value::Null`) sorts before everything. `Long` operands are compared
/// as `i64`; every other number, and any `Long` facing one, is compared as
/// `f64`. Widening a `Long` beyond 2^53 can round, so two values that differ
/// may compare equal on the mixed path.
///
/// # Mode changes
/// The mode flag is read once per comparison. Changing it while another thread
/// is sorting with the same comparator changes the order mid-sort: callers must
/// synchronize mode changes themselves, or keep one comparator per mode.
#[derive(Debug)]
pub struct NumberComparator {
    /// Compare absolute values instead of signed values
    absolute: AtomicBool,

    /// Where NaN sorts
    nan_policy: NanPolicy,

    /// Context this comparator was created for
    context: Option<ComparatorContext>,
}

impl NumberComparator {
    /// Create a signed comparator with NaN sorting last
    pub fn new() -> Self {
        Self::with_config(ComparatorConfig::default())
    }

    /// Create a comparator from configuration (not validated here)
    pub fn with_config(config: ComparatorConfig) -> Self {
        Self {
            absolute: AtomicBool::new(config.absolute),
            nan_policy: config.nan_policy,
            context: config.context,
        }
    }

    /// The process-wide default comparator.
    ///
    /// Its mode is shared by every caller in the process.
    pub fn instance() -> &'static NumberComparator {
        INSTANCE.get_or_init(NumberComparator::new)
    }

    // ========================================================================
    // Mode
    // ========================================================================

    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.absolute.load(atomic::Ordering::Relaxed)
    }

    pub fn set_absolute(&self, absolute: bool) {
        let previous = self.absolute.swap(absolute, atomic::Ordering::Relaxed);
        if previous != absolute {
            tracing::debug!("Number comparator absolute mode: {} -> {}", previous, absolute);
        }
    }

    pub fn nan_policy(&self) -> NanPolicy {
        self.nan_policy
    }

    pub fn context(&self) -> Option<&ComparatorContext> {
        self.context.as_ref()
    }

    /// Snapshot of the current settings
    pub fn config(&self) -> ComparatorConfig {
        ComparatorConfig {
            absolute: self.is_absolute(),
            nan_policy: self.nan_policy,
            context: self.context.clone(),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare two values.
    ///
    /// # Errors
    /// Returns `InvalidArgument` naming the offending side(s) when a present
    /// operand is not a number. Absent operands are never rejected.
    pub fn compare(&self, a: &Value, b: &Value) -> CompareResult<Ordering> {
        match (a.is_null(), b.is_null()) {
            (true, true) => return Ok(Ordering::Equal),
            (true, false) => return Ok(Ordering::Less),
            (false, true) => return Ok(Ordering::Greater),
            (false, false) => {},
        }

        let invalid = match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => return Ok(self.order(x, y)),
            (None, Some(_)) => InvalidOperands::First {
                found: a.type_name(),
            },
            (Some(_), None) => InvalidOperands::Second {
                found: b.type_name(),
            },
            (None, None) => InvalidOperands::Both {
                first: a.type_name(),
                second: b.type_name(),
            },
        };

        tracing::debug!("Number comparator rejected operands: {}", invalid);
        Err(CompareError::InvalidArgument(invalid))
    }

    /// Compare two values, encoding the result as -1, 0 or 1.
    pub fn compare_to_int(&self, a: &Value, b: &Value) -> CompareResult<i32> {
        self.compare(a, b).map(ordering_to_int)
    }

    /// Compare two typed numbers. `None` is the absent value.
    pub fn compare_numbers(&self, a: Option<Number>, b: Option<Number>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => self.order(x, y),
        }
    }

    fn order(&self, a: Number, b: Number) -> Ordering {
        let (mut a, mut b) = (a.repr(), b.repr());

        // Sign is stripped before the integral/fractional path is chosen
        if self.is_absolute() {
            a = strip_sign(a);
            b = strip_sign(b);
        }

        match (a, b) {
            (Repr::Integral(x), Repr::Integral(y)) => compare_integral(x, y),
            (Repr::Integral(x), Repr::Fractional(y)) => {
                compare_fractional(x as f64, y, self.nan_policy)
            },
            (Repr::Fractional(x), Repr::Integral(y)) => {
                compare_fractional(x, y as f64, self.nan_policy)
            },
            (Repr::Fractional(x), Repr::Fractional(y)) => {
                compare_fractional(x, y, self.nan_policy)
            },
        }
    }
}

#[inline]
fn strip_sign(repr: Repr) -> Repr {
    match repr {
        Repr::Integral(v) => Repr::Integral(strip_sign_integral(v)),
        Repr::Fractional(v) => Repr::Fractional(strip_sign_fractional(v)),
    }
}

impl Default for NumberComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator for NumberComparator {
    type Item = Value;

    fn compare(&self, a: &Value, b: &Value) -> CompareResult<Ordering> {
        NumberComparator::compare(self, a, b)
    }

    fn name(&self) -> &str {
        "NumberComparator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn cmp(comparator: &NumberComparator, a: impl Into<Value>, b: impl Into<Value>) -> i32 {
        comparator.compare_to_int(&a.into(), &b.into()).unwrap()
    }

    #[test]
    fn test_absent_ordering() {
        let c = NumberComparator::new();
        assert_eq!(cmp(&c, Value::Null, Value::Null), 0);
        assert_eq!(cmp(&c, Value::Null, 5i64), -1);
        assert_eq!(cmp(&c, 5i64, Value::Null), 1);
        assert_eq!(cmp(&c, None::<f64>, f64::NAN), -1);
    }

    #[test]
    fn test_absent_checked_before_type() {
        let c = NumberComparator::new();
        assert_eq!(cmp(&c, Value::Null, "text"), -1);
        assert_eq!(cmp(&c, true, Value::Null), 1);
    }

    #[test]
    fn test_signed_and_absolute() {
        let c = NumberComparator::new();
        assert!(!c.is_absolute());
        assert_eq!(cmp(&c, -5i64, 3i64), -1);

        c.set_absolute(true);
        assert!(c.is_absolute());
        assert_eq!(cmp(&c, -5i64, 3i64), 1);
        assert_eq!(cmp(&c, -3i64, 3i64), 0);
        assert_eq!(cmp(&c, -2.5f64, 2i64), 1);
        assert_eq!(cmp(&c, 2i64, -2.0f64), 0);

        c.set_absolute(false);
        assert_eq!(cmp(&c, -2.5f64, 2i64), -1);
    }

    #[test]
    fn test_mixed_representation() {
        let c = NumberComparator::new();
        assert_eq!(cmp(&c, 2i64, 2.5f64), -1);
        assert_eq!(cmp(&c, 2i64, 2.0f64), 0);
        assert_eq!(cmp(&c, 2.5f64, 2i64), 1);
        assert_eq!(cmp(&c, 3i32, 3i64), 0);
        assert_eq!(cmp(&c, 1.5f32, 1.25f64), 1);
        assert_eq!(cmp(&c, Decimal::new(-125, 2), -1i8), -1);
        assert_eq!(cmp(&c, 7i16, Decimal::new(7, 0)), 0);
    }

    #[test]
    fn test_wide_long_loses_precision_against_double() {
        let c = NumberComparator::new();
        let wide = (1i64 << 53) + 1;

        // Integral path keeps every bit
        assert_eq!(cmp(&c, wide, 1i64 << 53), 1);
        // Mixed path widens to f64 and rounds
        assert_eq!(cmp(&c, wide, (1u64 << 53) as f64), 0);
    }

    #[test]
    fn test_min_long_in_absolute_mode() {
        let c = NumberComparator::with_config(ComparatorConfig::absolute());
        assert_eq!(cmp(&c, i64::MIN, 0i64), -1);
        assert_eq!(cmp(&c, i64::MAX, i64::MIN + 1), 0);
    }

    #[test]
    fn test_signed_zero() {
        let c = NumberComparator::new();
        assert_eq!(cmp(&c, -0.0f64, 0.0f64), 0);
        assert_eq!(cmp(&c, -0.0f64, 0i64), 0);
    }

    #[test]
    fn test_nan_policy() {
        let last = NumberComparator::new();
        assert_eq!(cmp(&last, f64::NAN, f64::INFINITY), 1);
        assert_eq!(cmp(&last, i64::MAX, f64::NAN), -1);
        assert_eq!(cmp(&last, f64::NAN, f32::NAN), 0);

        let first =
            NumberComparator::with_config(ComparatorConfig::signed().with_nan_policy(NanPolicy::First));
        assert_eq!(cmp(&first, f64::NAN, f64::NEG_INFINITY), -1);
        assert_eq!(cmp(&first, i64::MIN, f64::NAN), 1);
        first.set_absolute(true);
        assert_eq!(cmp(&first, f64::NAN, 0i64), -1);
    }

    #[test]
    fn test_invalid_first() {
        let c = NumberComparator::new();
        let err = c.compare(&"text".into(), &5i64.into()).unwrap_err();
        assert_eq!(
            err,
            CompareError::InvalidArgument(InvalidOperands::First { found: "String" })
        );
        assert_eq!(
            err.to_string(),
            "invalid argument: the first argument was not a number but String"
        );
    }

    #[test]
    fn test_invalid_second() {
        let c = NumberComparator::new();
        let err = c.compare(&5i64.into(), &"text".into()).unwrap_err();
        assert_eq!(
            err.operands(),
            InvalidOperands::Second { found: "String" }
        );
    }

    #[test]
    fn test_invalid_both() {
        let c = NumberComparator::new();
        let err = c.compare(&"a".into(), &'b'.into()).unwrap_err();
        assert_eq!(
            err.operands(),
            InvalidOperands::Both {
                first: "String",
                second: "char",
            }
        );
    }

    #[test]
    fn test_compare_numbers() {
        let c = NumberComparator::new();
        assert_eq!(c.compare_numbers(None, None), Ordering::Equal);
        assert_eq!(c.compare_numbers(None, Some(Number::Long(1))), Ordering::Less);
        assert_eq!(
            c.compare_numbers(Some(Number::Double(-1.0)), Some(Number::Long(0))),
            Ordering::Less
        );
        c.set_absolute(true);
        assert_eq!(
            c.compare_numbers(Some(Number::Double(-1.0)), Some(Number::Long(0))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_with_comparator() {
        let c = NumberComparator::new();
        let mut values: Vec<Value> = vec![
            3i64.into(),
            Value::Null,
            (-7.5f64).into(),
            f64::NAN.into(),
            2i32.into(),
        ];
        values.sort_by(|a, b| c.compare(a, b).unwrap());

        assert!(values[0].is_null());
        assert_eq!(values[1], Value::Double(-7.5));
        assert_eq!(values[2], Value::Int(2));
        assert_eq!(values[3], Value::Long(3));
        assert!(matches!(values[4], Value::Double(v) if v.is_nan()));

        c.set_absolute(true);
        values.sort_by(|a, b| c.compare(a, b).unwrap());
        assert_eq!(values[1], Value::Int(2));
        assert_eq!(values[2], Value::Long(3));
        assert_eq!(values[3], Value::Double(-7.5));
    }

    #[test]
    fn test_config_snapshot() {
        let c = NumberComparator::with_config(ComparatorConfig::absolute());
        assert_eq!(c.config(), ComparatorConfig::absolute());
        assert_eq!(c.context().map(|ctx| ctx.name()), Some("AbsoluteValue"));

        c.set_absolute(false);
        assert!(!c.config().absolute);
    }

    #[test]
    fn test_trait_object() {
        let c: Box<dyn Comparator<Item = Value>> = Box::new(NumberComparator::new());
        assert_eq!(c.name(), "NumberComparator");
        assert_eq!(
            c.compare(&Value::Long(1), &Value::Long(2)).unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_shared_instance() {
        let a = NumberComparator::instance();
        let b = NumberComparator::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.nan_policy(), NanPolicy::Last);
    }

    #[test]
    fn test_shared_across_threads() {
        let c = NumberComparator::new();
        std::thread::scope(|s| {
            for i in 0..4i64 {
                let c = &c;
                s.spawn(move || {
                    assert_eq!(c.compare_to_int(&i.into(), &(i as f64 + 0.5).into()), Ok(-1));
                });
            }
        });
    }
}
