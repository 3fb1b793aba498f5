//! Value classification
//!
//! Every [`Value`] belongs to exactly one [`Kind`]. The classification refines
//! the host's raw type tag by carving `null` and arrays out of `object`.
//!
//! # Example
//!
//! ```rust
//! use valcheck::{classify, Kind, Value};
//!
//! assert_eq!(classify(&Value::Null), Kind::Null);
//! assert_eq!(classify(&Value::from(vec![1, 2])), Kind::Array);
//! assert_eq!("array".parse::<Kind>(), Ok(Kind::Array));
//! assert_eq!(Kind::Bigint.to_string(), "bigint");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::value::Value;

/// The ten mutually exclusive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// Text.
    String,
    /// Double-precision numbers, including `NaN` and infinities.
    Number,
    /// Arbitrary-precision integers.
    Bigint,
    /// `true` / `false`.
    Boolean,
    /// Symbols.
    Symbol,
    /// The absent value.
    Undefined,
    /// Non-null, non-array objects (including dates, maps, errors, promises).
    Object,
    /// Callables, including class constructors.
    Function,
    /// The null value.
    Null,
    /// Arrays.
    Array,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 10] = [
        Kind::String,
        Kind::Number,
        Kind::Bigint,
        Kind::Boolean,
        Kind::Symbol,
        Kind::Undefined,
        Kind::Object,
        Kind::Function,
        Kind::Null,
        Kind::Array,
    ];

    /// The lowercase textual identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Bigint => "bigint",
            Kind::Boolean => "boolean",
            Kind::Symbol => "symbol",
            Kind::Undefined => "undefined",
            Kind::Object => "object",
            Kind::Function => "function",
            Kind::Null => "null",
            Kind::Array => "array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    input: String,
}

impl ParseKindError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized value kind '{}'", self.input)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for Kind {
    type Err = ParseKindError;

    /// Exact, case-sensitive match against the lowercase identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError {
                input: s.to_string(),
            })
    }
}

/// Classify a value. Total: every value maps to exactly one kind.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
        Value::String(_) => Kind::String,
        Value::Number(_) => Kind::Number,
        Value::BigInt(_) => Kind::Bigint,
        Value::Boolean(_) => Kind::Boolean,
        Value::Symbol(_) => Kind::Symbol,
        Value::Undefined => Kind::Undefined,
        Value::Function(_) => Kind::Function,
    }
}

/// Alias of [`classify`].
pub fn kind_of(value: &Value) -> Kind {
    classify(value)
}

/// True if `value` classifies as `kind`.
pub fn is_of_kind(value: &Value, kind: Kind) -> bool {
    classify(value) == kind
}

/// True if `value` classifies as the kind named `kind`.
///
/// An unrecognised name yields `false`.
///
/// # Example
///
/// ```rust
/// use valcheck::{is_of_kind_name, Value};
///
/// assert!(is_of_kind_name(&Value::Null, "null"));
/// assert!(!is_of_kind_name(&Value::Null, "object"));
/// assert!(!is_of_kind_name(&Value::Null, "nothing"));
/// ```
pub fn is_of_kind_name(value: &Value, kind: &str) -> bool {
    match kind.parse::<Kind>() {
        Ok(kind) => is_of_kind(value, kind),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "is_of_kind_name given an unknown kind");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Function, Object, Promise, Symbol};
    use num_bigint::BigInt;

    #[test]
    fn test_classify_refines_object() {
        assert_eq!(classify(&Value::Null), Kind::Null);
        assert_eq!(classify(&Value::Array(vec![])), Kind::Array);
        assert_eq!(classify(&Value::from(Object::plain())), Kind::Object);
        assert_eq!(classify(&Value::from(Promise::pending())), Kind::Object);
    }

    #[test]
    fn test_classify_primitives() {
        assert_eq!(classify(&Value::from("hello")), Kind::String);
        assert_eq!(classify(&Value::from(123)), Kind::Number);
        assert_eq!(classify(&Value::from(f64::NAN)), Kind::Number);
        assert_eq!(classify(&Value::from(BigInt::from(1))), Kind::Bigint);
        assert_eq!(classify(&Value::from(true)), Kind::Boolean);
        assert_eq!(classify(&Value::from(Symbol::new("s"))), Kind::Symbol);
        assert_eq!(classify(&Value::Undefined), Kind::Undefined);
        assert_eq!(classify(&Value::from(Function::arrow())), Kind::Function);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_parse_is_case_sensitive() {
        let err = "Array".parse::<Kind>().unwrap_err();
        assert_eq!(err.input(), "Array");
        assert_eq!(err.to_string(), "unrecognized value kind 'Array'");
    }

    #[test]
    fn test_is_of_kind() {
        assert!(is_of_kind(&Value::from("string"), Kind::String));
        assert!(is_of_kind(&Value::from(4), Kind::Number));
        assert!(is_of_kind(&Value::Array(vec![]), Kind::Array));
        assert!(!is_of_kind(&Value::from(4), Kind::String));
    }

    #[test]
    fn test_is_of_kind_name_rejects_unknown() {
        assert!(is_of_kind_name(&Value::from(4), "number"));
        assert!(!is_of_kind_name(&Value::from(4), "invalidType"));
        assert!(!is_of_kind_name(&Value::from(4), ""));
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_unknown_kind_name_is_logged() {
        assert!(!is_of_kind_name(&Value::Null, "nothing"));
        assert!(logs_contain("unknown kind"));
        assert!(logs_contain("nothing"));
    }
}
