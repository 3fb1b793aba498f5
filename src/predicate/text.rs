//! Text, boolean, nullish and symbol predicates

use crate::value::Value;

/// Encoding names accepted by [`is_encoding`].
pub const ENCODINGS: [&str; 11] = [
    "ascii",
    "utf8",
    "utf-8",
    "utf16le",
    "ucs2",
    "ucs-2",
    "base64",
    "base64url",
    "latin1",
    "binary",
    "hex",
];

/// True if `value` is text.
pub fn is_text(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Alias of [`is_text`].
pub fn is_string(value: &Value) -> bool {
    is_text(value)
}

// Host whitespace and line terminators. NEL (U+0085) is not among them.
fn is_host_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn trimmed(s: &str) -> &str {
    s.trim_matches(is_host_whitespace)
}

/// True if `value` is text that is empty after trimming whitespace.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_empty_text;
/// use valcheck::Value;
///
/// assert!(is_empty_text(&Value::from("")));
/// assert!(is_empty_text(&Value::from("   ")));
/// assert!(!is_empty_text(&Value::from(" Hello ")));
/// assert!(!is_empty_text(&Value::Null));
/// ```
pub fn is_empty_text(value: &Value) -> bool {
    value.as_str().is_some_and(|s| trimmed(s).is_empty())
}

/// True if `value` is text that is non-empty after trimming whitespace.
pub fn is_non_empty_text(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !trimmed(s).is_empty())
}

/// True if `value` is a symbol.
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// True if `value` is a boolean.
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

/// True if `value` is truthy under host rules. See [`Value::is_truthy`].
pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// True if `value` is falsy under host rules.
pub fn is_falsy(value: &Value) -> bool {
    !value.is_truthy()
}

/// True if `value` is null.
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// True if `value` is undefined.
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// True if `value` is anything but undefined. Null counts as defined.
pub fn is_defined(value: &Value) -> bool {
    !is_undefined(value)
}

/// True if `value` is neither undefined nor null.
pub fn is_defined_strict(value: &Value) -> bool {
    !matches!(value, Value::Undefined | Value::Null)
}

/// True if `value` is text naming a recognised encoding, compared exactly.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_encoding;
/// use valcheck::Value;
///
/// assert!(is_encoding(&Value::from("utf8")));
/// assert!(!is_encoding(&Value::from("UTF8")));
/// assert!(!is_encoding(&Value::from("")));
/// ```
pub fn is_encoding(value: &Value) -> bool {
    value.as_str().is_some_and(|s| ENCODINGS.contains(&s))
}
