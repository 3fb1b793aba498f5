//! Built-in object predicates: promises, dates, maps, sets, regular
//! expressions and errors

use std::future::Future;

use futures::future::{self, Either};

use super::combinators::Predicate;
use crate::value::{Builtin, Class, ErrorData, Object, Promise, Value};

fn builtin(value: &Value) -> Option<&Builtin> {
    value.as_object().map(Object::builtin)
}

/// True if `value` is a promise.
pub fn is_promise(value: &Value) -> bool {
    value.as_promise().is_some()
}

/// Resolve to true if `value` is a promise that has not settled yet.
///
/// The promise is raced against an already-settled sentinel, polling the
/// promise first: a promise that is already fulfilled or rejected wins and
/// yields `false`; otherwise the sentinel wins and yields `true`. Non-promises
/// resolve to `false` on first poll. Never blocks, never cancels the promise.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_pending;
/// use valcheck::value::{Promise, Value};
///
/// # tokio_test::block_on(async {
/// assert!(is_pending(&Value::from(Promise::pending())).await);
/// assert!(!is_pending(&Value::from(Promise::resolve("done"))).await);
/// assert!(!is_pending(&Value::from("x")).await);
/// # });
/// ```
pub fn is_pending(value: &Value) -> impl Future<Output = bool> + Send + 'static {
    let settled = value.as_promise().map(Promise::settled);
    async move {
        let Some(settled) = settled else {
            return false;
        };
        let pending = match future::select(settled, future::ready(())).await {
            Either::Left(_) => false,
            Either::Right(_) => true,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(pending, "promise settlement probed");
        pending
    }
}

/// True if `value` is a date.
pub fn is_date(value: &Value) -> bool {
    matches!(builtin(value), Some(Builtin::Date(_)))
}

/// True if `value` is a map.
pub fn is_map(value: &Value) -> bool {
    matches!(builtin(value), Some(Builtin::Map(_)))
}

/// True if `value` is a set.
pub fn is_set(value: &Value) -> bool {
    matches!(builtin(value), Some(Builtin::Set(_)))
}

/// True if `value` is a regular expression.
pub fn is_regexp(value: &Value) -> bool {
    matches!(builtin(value), Some(Builtin::RegExp(_)))
}

/// True if `regex` is a regular expression, `flag` is text, and the regex's
/// flag string contains `flag`.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::has_flag;
/// use valcheck::value::{RegExp, Value};
///
/// let re = Value::from(RegExp::new("abc", "i").unwrap());
/// assert!(has_flag(&re, &Value::from("i")));
/// assert!(!has_flag(&re, &Value::from("g")));
/// assert!(!has_flag(&Value::from("invalid regex"), &Value::from("i")));
/// ```
pub fn has_flag(regex: &Value, flag: &Value) -> bool {
    match (builtin(regex), flag.as_str()) {
        (Some(Builtin::RegExp(re)), Some(flag)) => re.flags().contains(flag),
        _ => false,
    }
}

fn error_data(value: &Value) -> Option<&ErrorData> {
    match builtin(value)? {
        Builtin::Error(data) => Some(data),
        _ => None,
    }
}

/// True if `value` is an error. With `error_type`, true only if `value` is an
/// instance of that class constructor (or a descendant).
///
/// `Some(&Value::Undefined)` counts as no type given; any other non-class
/// type yields `false`.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_error;
/// use valcheck::value::{Class, Object, Value};
///
/// let custom = Class::builder("CustomError").extends(&Class::error()).build();
/// let err = Value::from(Object::instance(&custom).build());
///
/// assert!(is_error(&err, None));
/// assert!(is_error(&err, Some(&Value::from(&custom))));
/// assert!(!is_error(&Value::from(Object::error("plain")), Some(&Value::from(&custom))));
/// ```
pub fn is_error(value: &Value, error_type: Option<&Value>) -> bool {
    match error_type {
        None | Some(Value::Undefined) => error_data(value).is_some(),
        Some(error_type) => super::is_child_of(value, error_type),
    }
}

/// True if `error` is an error whose message is non-empty text. Whitespace
/// is not trimmed.
pub fn has_message(error: &Value) -> bool {
    error_data(error)
        .and_then(|data| data.message.as_str())
        .is_some_and(|message| !message.is_empty())
}

/// True if `error` is an error whose name is non-empty text.
pub fn has_name(error: &Value) -> bool {
    error_data(error)
        .and_then(|data| data.name.as_str())
        .is_some_and(|name| !name.is_empty())
}

/// Predicate: the value is a regular expression carrying a flag.
#[derive(Clone, Debug)]
pub struct Flag(Value);

impl Predicate<Value> for Flag {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        has_flag(value, &self.0)
    }
}

/// Create a predicate that checks for a regular-expression flag.
pub fn flag(flag: impl Into<String>) -> Flag {
    Flag(Value::String(flag.into()))
}

/// Predicate: the value is an error instance of a class.
#[derive(Clone, Debug)]
pub struct ErrorOf(Value);

impl Predicate<Value> for ErrorOf {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        is_error(value, Some(&self.0))
    }
}

/// Create a predicate that checks for an error of `class`.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::value::{Class, Object, Value};
///
/// let timeout = Class::builder("TimeoutError").extends(&Class::error()).build();
/// let err = Value::from(Object::error_builder(&timeout, "took too long").build());
/// assert!(error_of(&timeout).and(has_message).check(&err));
/// ```
pub fn error_of(class: &Class) -> ErrorOf {
    ErrorOf(Value::from(class))
}
