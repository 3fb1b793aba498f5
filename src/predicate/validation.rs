//! Lifting predicates into `Result`
//!
//! Checks answer yes or no; these helpers turn that answer into a
//! `Result` so a check can sit in a `?` chain.

use super::combinators::Predicate;

/// Validate a value using a predicate.
///
/// Returns `Ok(value)` if the predicate is satisfied, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::Value;
///
/// let result = validate(Value::from("hello"), is_non_empty_text, "blank");
/// assert_eq!(result, Ok(Value::from("hello")));
///
/// let result = validate(Value::from("  "), is_non_empty_text, "blank");
/// assert_eq!(result, Err("blank"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Validate a value with an error factory.
///
/// Like [`validate`], but the closure sees the rejected value when building
/// the error. It is not called on success.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::{kind_of, Value};
///
/// let result = validate_with(Value::from(3.5), is_integer, |v| {
///     format!("expected an integer, got a {}", kind_of(v))
/// });
/// assert_eq!(result, Err("expected an integer, got a number".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
