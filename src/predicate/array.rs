//! Array and sequence predicates

use super::combinators::Predicate;
use crate::kind::{classify, Kind};
use crate::value::{Builtin, Value};

/// True if `value` is an array.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// True if `value` is an array with no elements.
pub fn is_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(<[Value]>::is_empty)
}

/// True if `value` is an array with at least one element.
pub fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// True if `array` is a non-empty array whose every element classifies as
/// `kind`. An empty array satisfies no kind.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_array_of_kind;
/// use valcheck::{Kind, Value};
///
/// assert!(is_array_of_kind(&Value::from(vec!["hello", "world"]), Kind::String));
/// assert!(!is_array_of_kind(&Value::from(vec![1, 2]), Kind::String));
/// assert!(!is_array_of_kind(&Value::Array(vec![]), Kind::String));
/// ```
pub fn is_array_of_kind(array: &Value, kind: Kind) -> bool {
    array
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(|v| classify(v) == kind))
}

/// Like [`is_array_of_kind`] with the kind given by name. Unknown names yield
/// `false`.
pub fn is_array_of_kind_name(array: &Value, kind: &str) -> bool {
    kind.parse::<Kind>()
        .is_ok_and(|kind| is_array_of_kind(array, kind))
}

/// True if `value` can be iterated in sequence: text, arrays, maps and sets.
pub fn is_iterable(value: &Value) -> bool {
    match value {
        Value::String(_) | Value::Array(_) => true,
        Value::Object(obj) => matches!(obj.builtin(), Builtin::Map(_) | Builtin::Set(_)),
        _ => false,
    }
}

/// True if `index` is an integer and `0 <= index < length` of the array or
/// text `target`. Text length is in UTF-16 code units.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::has_index;
/// use valcheck::Value;
///
/// assert!(has_index(&Value::from("hello"), &Value::from(4)));
/// assert!(!has_index(&Value::from("hello"), &Value::from(5)));
/// assert!(!has_index(&Value::from(vec![1, 2, 3]), &Value::from("1")));
/// ```
pub fn has_index(target: &Value, index: &Value) -> bool {
    if !super::is_integer(index) {
        return false;
    }
    let len = match target {
        Value::Array(items) => items.len(),
        Value::String(s) => s.encode_utf16().count(),
        _ => return false,
    };
    index
        .as_number()
        .is_some_and(|i| i >= 0.0 && i < len as f64)
}

/// Predicate: the value classifies as the given kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfKind(pub Kind);

impl Predicate<Value> for OfKind {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        classify(value) == self.0
    }
}

/// Create a predicate that checks a value's kind.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::{Kind, Value};
///
/// assert!(of_kind(Kind::Null).check(&Value::Null));
/// assert!(!of_kind(Kind::Object).check(&Value::Null));
/// ```
pub fn of_kind(kind: Kind) -> OfKind {
    OfKind(kind)
}

/// Predicate: the value is a non-empty array of a single kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayOf(pub Kind);

impl Predicate<Value> for ArrayOf {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        is_array_of_kind(value, self.0)
    }
}

/// Create a predicate that checks for a non-empty array of `kind`.
pub fn array_of(kind: Kind) -> ArrayOf {
    ArrayOf(kind)
}
