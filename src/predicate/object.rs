//! Object predicates
//!
//! A *plain object* here is any [`Value::Object`]: `null` and arrays are
//! excluded, but dates, maps, sets, regular expressions, errors, promises and
//! class instances all count. Emptiness and length are measured over own
//! enumerable keys.

use super::combinators::Predicate;
use crate::value::{Object, Value};

/// True if `value` is a non-null, non-array object.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_plain_object;
/// use valcheck::value::{Object, Value};
///
/// assert!(is_plain_object(&Value::from(Object::plain())));
/// assert!(!is_plain_object(&Value::Array(vec![])));
/// assert!(!is_plain_object(&Value::Null));
/// ```
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Alias of [`is_plain_object`].
pub fn is_object(value: &Value) -> bool {
    is_plain_object(value)
}

/// True if `value` is an object or an array.
pub fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// True if `value` is a plain object with no own enumerable keys.
pub fn is_empty_object(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.own_keys().next().is_none())
}

/// True if `value` is a plain object with at least one own enumerable key.
///
/// Not the complement of [`is_empty_object`]: both are false for anything
/// that is not a plain object.
pub fn is_non_empty_object(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.own_keys().next().is_some())
}

/// True if `name` is text naming an own property of the plain object
/// `object`. Inherited fields never count; non-enumerable own fields do.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::{has_property, owns_property};
/// use valcheck::value::{Class, Object, Value};
///
/// let parent = Class::builder("Parent").field("a", Value::Undefined).build();
/// let child = Class::builder("Child").extends(&parent).field("b", Value::Undefined).build();
/// let instance = Value::from(Object::instance(&child).build());
///
/// assert!(!owns_property(&instance, &Value::from("a")));
/// assert!(has_property(&instance, &Value::from("a")));
/// assert!(owns_property(&instance, &Value::from("b")));
/// ```
pub fn owns_property(object: &Value, name: &Value) -> bool {
    match (object.as_object(), name.as_str()) {
        (Some(obj), Some(name)) => obj.owns(name),
        _ => false,
    }
}

/// True if `names` is a non-empty array of text and every name is an own
/// property of the plain object `object`.
pub fn owns_all_properties(object: &Value, names: &Value) -> bool {
    all_names(object, names, Object::owns)
}

/// True if `name` is text in the enumerable key set of the plain object
/// `object`, own or inherited.
pub fn has_property(object: &Value, name: &Value) -> bool {
    match (object.as_object(), name.as_str()) {
        (Some(obj), Some(name)) => exposes(obj, name),
        _ => false,
    }
}

/// True if `names` is a non-empty array of text and every name is in the
/// enumerable key set of the plain object `object`.
pub fn has_all_properties(object: &Value, names: &Value) -> bool {
    all_names(object, names, exposes)
}

/// True if `length` is an integer equal to the UTF-16 length of text, the
/// element count of an array, or the own enumerable key count of a plain
/// object.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::has_length;
/// use valcheck::Value;
///
/// assert!(has_length(&Value::from("hello"), &Value::from(5)));
/// assert!(has_length(&Value::Array(vec![]), &Value::from(0)));
/// assert!(!has_length(&Value::from("test"), &Value::from(f64::NAN)));
/// ```
pub fn has_length(target: &Value, length: &Value) -> bool {
    if !super::is_integer(length) {
        return false;
    }
    let count = match target {
        Value::String(s) => s.encode_utf16().count(),
        Value::Array(items) => items.len(),
        Value::Object(obj) => obj.own_keys().count(),
        _ => return false,
    };
    length.as_number() == Some(count as f64)
}

fn exposes(obj: &Object, name: &str) -> bool {
    obj.enumerable_keys().any(|key| key == name)
}

fn all_names(object: &Value, names: &Value, test: impl Fn(&Object, &str) -> bool) -> bool {
    let (Some(obj), Some(names)) = (object.as_object(), names.as_array()) else {
        return false;
    };
    !names.is_empty()
        && names
            .iter()
            .all(|name| name.as_str().is_some_and(|name| test(obj, name)))
}

/// Predicate: the value is a plain object owning the property `name`.
#[derive(Clone, Debug)]
pub struct Owns(Value);

impl Predicate<Value> for Owns {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        owns_property(value, &self.0)
    }
}

/// Create a predicate that checks for an own property.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::value::{Object, Value};
///
/// let record = owns("id").and(owns("name"));
/// let row = Value::from(Object::builder().property("id", 1).property("name", "x").build());
/// assert!(record.check(&row));
/// ```
pub fn owns(name: impl Into<String>) -> Owns {
    Owns(Value::String(name.into()))
}

/// Predicate: the value is a plain object exposing the property `name`.
#[derive(Clone, Debug)]
pub struct Has(Value);

impl Predicate<Value> for Has {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        has_property(value, &self.0)
    }
}

/// Create a predicate that checks for an own or inherited enumerable property.
pub fn has(name: impl Into<String>) -> Has {
    Has(Value::String(name.into()))
}

/// Predicate: the value has exactly the given length.
#[derive(Clone, Debug)]
pub struct Length(Value);

impl Predicate<Value> for Length {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        has_length(value, &self.0)
    }
}

/// Create a predicate that checks text, array or object length.
pub fn length(n: usize) -> Length {
    Length(Value::from(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Class, Function, Promise};
    use std::time::SystemTime;

    fn record(entries: &[(&str, i32)]) -> Value {
        Value::from(
            entries
                .iter()
                .fold(Object::builder(), |b, (k, v)| b.property(*k, *v))
                .build(),
        )
    }

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn test_plain_object_includes_builtins() {
        assert!(is_plain_object(&Value::from(Object::date(SystemTime::now()))));
        assert!(is_plain_object(&Value::from(Object::map(vec![]))));
        assert!(is_plain_object(&Value::from(Promise::pending())));
        assert!(!is_plain_object(&Value::from(Function::arrow())));
        assert!(!is_plain_object(&text("text")));
        assert!(!is_plain_object(&Value::from(123)));
    }

    #[test]
    fn test_object_like() {
        assert!(is_object_like(&record(&[])));
        assert!(is_object_like(&Value::Array(vec![])));
        assert!(is_object_like(&Value::from(Object::set(vec![]))));
        assert!(!is_object_like(&Value::from(Function::arrow())));
        assert!(!is_object_like(&Value::Null));
        assert!(!is_object_like(&Value::Undefined));
    }

    #[test]
    fn test_empty_and_non_empty_object() {
        assert!(is_empty_object(&record(&[])));
        assert!(!is_non_empty_object(&record(&[])));
        assert!(is_non_empty_object(&record(&[("key", 1)])));
        assert!(!is_empty_object(&record(&[("key", 1)])));

        for not_object in [Value::Null, Value::Array(vec![]), text("string"), Value::from(1)] {
            assert!(!is_empty_object(&not_object));
            assert!(!is_non_empty_object(&not_object));
        }
    }

    #[test]
    fn test_hidden_keys_do_not_count_towards_emptiness() {
        let v = Value::from(Object::builder().hidden("h", 1).build());
        assert!(is_empty_object(&v));
        assert!(has_length(&v, &Value::from(0)));
        assert!(owns_property(&v, &text("h")));
        assert!(!has_property(&v, &text("h")));
    }

    #[test]
    fn test_owns_property() {
        let obj = record(&[("key", 1)]);
        assert!(owns_property(&obj, &text("key")));
        assert!(!owns_property(&obj, &text("missing")));
        assert!(!owns_property(&obj, &Value::from(123)));
        assert!(!owns_property(&Value::Null, &text("key")));
        assert!(!owns_property(&record(&[]), &text("")));
    }

    #[test]
    fn test_owns_all_properties() {
        let obj = record(&[("key1", 1), ("key2", 2)]);
        assert!(owns_all_properties(&obj, &Value::from(vec!["key1", "key2"])));
        assert!(!owns_all_properties(&record(&[("key1", 1)]), &Value::from(vec!["key1", "key2"])));
        assert!(!owns_all_properties(&Value::Null, &Value::from(vec!["key1"])));
        assert!(!owns_all_properties(&record(&[]), &Value::Array(vec![])));
        assert!(!owns_all_properties(&obj, &text("key1")));
        assert!(!owns_all_properties(
            &obj,
            &Value::Array(vec![text("key1"), Value::from(2)])
        ));
    }

    #[test]
    fn test_inherited_fields() {
        let parent = Class::builder("Parent")
            .field("parentProp", Value::Undefined)
            .build();
        let child = Class::builder("Child")
            .extends(&parent)
            .field("childProp", Value::Undefined)
            .build();
        let instance = Value::from(Object::instance(&child).build());

        assert!(!owns_property(&instance, &text("parentProp")));
        assert!(has_property(&instance, &text("parentProp")));
        assert!(owns_property(&instance, &text("childProp")));
        assert!(has_property(&instance, &text("childProp")));
        assert!(has_all_properties(
            &instance,
            &Value::from(vec!["parentProp", "childProp"])
        ));
        assert!(!owns_all_properties(
            &instance,
            &Value::from(vec!["parentProp", "childProp"])
        ));
        assert!(has_length(&instance, &Value::from(1)));
    }

    #[test]
    fn test_has_property_failures() {
        let obj = record(&[("key", 1)]);
        assert!(!has_property(&record(&[]), &Value::from(123)));
        assert!(!has_property(&obj, &text("missing")));
        assert!(!has_property(&Value::Null, &text("key")));
        assert!(!has_property(&record(&[]), &text("")));
        assert!(!has_all_properties(&record(&[]), &Value::Array(vec![])));
        assert!(!has_all_properties(&Value::Null, &Value::from(vec!["key"])));
    }

    #[test]
    fn test_has_length() {
        assert!(!has_length(&record(&[("key1", 1), ("key2", 2)]), &Value::from(1)));
        assert!(!has_length(&text("test"), &Value::from(f64::NAN)));
        assert!(!has_length(&Value::Array(vec![]), &Value::from(1.5)));
        assert!(!has_length(&record(&[]), &Value::from(2.5)));
        assert!(has_length(&Value::Array(vec![]), &Value::from(0)));
        assert!(has_length(&Value::from(vec![1, 2, 3]), &Value::from(3)));
        assert!(has_length(&record(&[("age", 24)]), &Value::from(1)));
        assert!(has_length(&text("hello"), &Value::from(5)));
        assert!(!has_length(&text("hello"), &Value::from(4)));
        assert!(!has_length(&text("hello"), &Value::from(-5)));
        assert!(!has_length(&Value::from(5), &Value::from(5)));
        assert!(!has_length(&text("hello"), &text("5")));
    }

    #[test]
    fn test_text_length_counts_utf16_units() {
        assert!(has_length(&text("héllo"), &Value::from(5)));
        assert!(has_length(&text("😀"), &Value::from(2)));
        assert!(!has_length(&text("😀"), &Value::from(1)));
    }

    #[test]
    fn test_parameterised_predicates() {
        use crate::predicate::PredicateExt;

        let row = record(&[("id", 1), ("name", 2)]);
        assert!(owns("id").and(has("name")).check(&row));
        assert!(!owns("missing").check(&row));
        assert!(length(2).check(&row));
        assert!(length(3).check(&Value::from("abc")));
    }
}
