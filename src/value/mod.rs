//! Dynamic values
//!
//! [`Value`] is the closed set of host values every predicate in this crate
//! accepts. Primitives are stored inline; objects, functions, classes and
//! promises are shared handles that compare by identity.
//!
//! # Example
//!
//! ```rust
//! use valcheck::value::{Object, Value};
//!
//! let v = Value::from(vec![1, 2, 3]);
//! assert!(v.is_truthy());
//!
//! let user = Value::from(Object::builder().property("name", "Ada").build());
//! assert!(user.as_object().is_some());
//! ```

mod class;
#[cfg(feature = "serde")]
mod json;
mod object;
mod promise;
mod regexp;
mod symbol;

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

pub use class::{Class, ClassBuilder, Function, FunctionKind};
pub use object::{Builtin, ErrorData, Object, ObjectBuilder, Property};
pub use promise::{Promise, Resolver, Settlement};
pub use regexp::{RegExp, RegExpError};
pub use symbol::Symbol;

/// Any value a predicate may be asked about.
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A double-precision number, including `NaN` and the infinities.
    Number(f64),
    /// An arbitrary-precision integer.
    BigInt(BigInt),
    /// Text.
    String(String),
    /// A unique symbol.
    Symbol(Symbol),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// An object record (plain, builtin or class instance).
    Object(Object),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Host truthiness.
    ///
    /// `false`, `0`, `-0`, `NaN`, `0n`, `""`, `null` and `undefined` are
    /// falsy; everything else, including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// The text, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The object, if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The function, if this is a function.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// The class, if this is a class constructor.
    pub fn as_class(&self) -> Option<&Class> {
        self.as_function().and_then(Function::as_class)
    }

    /// The promise, if this is a promise object.
    pub fn as_promise(&self) -> Option<&Promise> {
        match self.as_object()?.builtin() {
            Builtin::Promise(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::BigInt(n) => write!(f, "BigInt({}n)", n),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(s) => fmt::Debug::fmt(s, f),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(obj) => fmt::Debug::fmt(obj, f),
            Value::Function(func) => f
                .debug_struct("Function")
                .field("name", &func.name())
                .field("kind", func.kind())
                .finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<&Class> for Value {
    fn from(class: &Class) -> Self {
        Value::Function(Function::class(class))
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Value::from(&class)
    }
}

impl From<Promise> for Value {
    fn from(p: Promise) -> Self {
        Value::Object(Object::promise(p))
    }
}

impl From<RegExp> for Value {
    fn from(re: RegExp) -> Self {
        Value::Object(Object::regexp(re))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        for falsy in [
            Value::Undefined,
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            Value::from(BigInt::from(0)),
            Value::from(""),
        ] {
            assert!(!falsy.is_truthy(), "{:?} should be falsy", falsy);
        }

        for truthy in [
            Value::from("0"),
            Value::from(-1),
            Value::from(f64::INFINITY),
            Value::from(BigInt::from(-3)),
            Value::Array(vec![]),
            Value::from(Object::plain()),
            Value::from(Function::arrow()),
            Value::from(Symbol::anonymous()),
        ] {
            assert!(truthy.is_truthy(), "{:?} should be truthy", truthy);
        }
    }

    #[test]
    fn test_option_maps_none_to_undefined() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_class_value_is_a_class_constructor() {
        let class = Class::builder("Thing").build();
        let v = Value::from(&class);
        assert_eq!(v.as_class(), Some(&class));
        assert!(Value::from(Function::arrow()).as_class().is_none());
    }

    #[test]
    fn test_promise_value_is_an_object() {
        let v = Value::from(Promise::pending());
        assert!(v.as_object().is_some());
        assert!(v.as_promise().is_some());
        assert!(Value::from(Object::plain()).as_promise().is_none());
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    }
}
