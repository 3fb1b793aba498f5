//! Number predicates
//!
//! Every argument must be a [`Value::Number`]; anything else makes the
//! predicate false.

use super::combinators::Predicate;
use crate::value::Value;

/// True if `value` is a number, including `NaN` and the infinities.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// True if `value` is a finite number with no fractional part.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_integer;
/// use valcheck::Value;
///
/// assert!(is_integer(&Value::from(5)));
/// assert!(is_integer(&Value::from(-0.0)));
/// assert!(!is_integer(&Value::from(5.000001)));
/// assert!(!is_integer(&Value::from(f64::INFINITY)));
/// ```
pub fn is_integer(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.is_finite() && n.fract() == 0.0)
}

/// True if `value` is a finite number with a fractional part.
pub fn is_float(value: &Value) -> bool {
    value
        .as_number()
        .is_some_and(|n| n.is_finite() && n.fract() != 0.0)
}

/// True if `value` is an even integer.
pub fn is_even(value: &Value) -> bool {
    is_integer(value) && value.as_number().is_some_and(|n| n % 2.0 == 0.0)
}

/// True if `value` is an odd integer.
pub fn is_odd(value: &Value) -> bool {
    is_integer(value) && value.as_number().is_some_and(|n| n % 2.0 != 0.0)
}

fn numbers<const N: usize>(values: [&Value; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value.as_number()?;
    }
    Some(out)
}

/// True if `min < n < max`.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_between;
/// use valcheck::Value;
///
/// let (zero, two, three) = (Value::from(0), Value::from(2), Value::from(3));
/// assert!(!is_between(&two, &zero, &two));
/// assert!(is_between(&two, &zero, &three));
/// ```
pub fn is_between(n: &Value, min: &Value, max: &Value) -> bool {
    numbers([n, min, max]).is_some_and(|[n, min, max]| min < n && n < max)
}

/// True if `min <= n <= max`.
pub fn is_between_inclusive(n: &Value, min: &Value, max: &Value) -> bool {
    numbers([n, min, max]).is_some_and(|[n, min, max]| min <= n && n <= max)
}

/// True if `compare < to`.
pub fn is_less_than(compare: &Value, to: &Value) -> bool {
    numbers([compare, to]).is_some_and(|[a, b]| a < b)
}

/// True if `compare <= to`.
pub fn is_less_than_or_equal(compare: &Value, to: &Value) -> bool {
    numbers([compare, to]).is_some_and(|[a, b]| a <= b)
}

/// True if `compare > to`.
pub fn is_greater_than(compare: &Value, to: &Value) -> bool {
    numbers([compare, to]).is_some_and(|[a, b]| a > b)
}

/// True if `compare >= to`.
pub fn is_greater_than_or_equal(compare: &Value, to: &Value) -> bool {
    numbers([compare, to]).is_some_and(|[a, b]| a >= b)
}

/// True if `value` is negative infinity.
pub fn is_negative_infinity(value: &Value) -> bool {
    value.as_number() == Some(f64::NEG_INFINITY)
}

/// True if `value` is positive infinity.
pub fn is_infinity(value: &Value) -> bool {
    value.as_number() == Some(f64::INFINITY)
}

/// True if `value` is a finite number. Never coerces.
pub fn is_finite(value: &Value) -> bool {
    value.as_number().is_some_and(f64::is_finite)
}

/// True if `value` is `NaN`. Never coerces.
pub fn is_nan(value: &Value) -> bool {
    value.as_number().is_some_and(f64::is_nan)
}

/// Predicate: the value lies in a numeric interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Between {
    min: f64,
    max: f64,
    inclusive: bool,
}

impl Predicate<Value> for Between {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        let (min, max) = (Value::Number(self.min), Value::Number(self.max));
        if self.inclusive {
            is_between_inclusive(value, &min, &max)
        } else {
            is_between(value, &min, &max)
        }
    }
}

/// Create a predicate for the open interval `(min, max)`.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::Value;
///
/// let p = between(1.0, 10.0);
/// assert!(p.check(&Value::from(5)));
/// assert!(!p.check(&Value::from(10)));
/// assert!(!p.check(&Value::from("5")));
/// ```
pub fn between(min: f64, max: f64) -> Between {
    Between {
        min,
        max,
        inclusive: false,
    }
}

/// Create a predicate for the closed interval `[min, max]`.
pub fn between_inclusive(min: f64, max: f64) -> Between {
    Between {
        min,
        max,
        inclusive: true,
    }
}
