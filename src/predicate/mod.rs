//! Value predicates
//!
//! Every check in this module is a plain function from `&Value` to `bool`.
//! None of them panic or return errors: a value of the wrong shape simply
//! yields `false`. The one exception to the synchronous shape is
//! [`is_pending`], which must observe a promise and therefore returns a
//! future.
//!
//! Because each check is a `fn(&Value) -> bool`, it is also a
//! [`Predicate<Value>`] and composes with [`PredicateExt`], [`all_of`],
//! [`any_of`] and [`none_of`]. Checks that need an argument have a
//! predicate constructor next to them (`between`, `has`, `of_kind`, ...).
//!
//! # Example
//!
//! ```rust
//! use valcheck::predicate::*;
//! use valcheck::value::Object;
//! use valcheck::{Kind, Value};
//!
//! let tags = Value::from(vec!["a", "b"]);
//! assert!(is_non_empty_array(&tags));
//! assert!(array_of(Kind::String).check(&tags));
//!
//! let user = Value::from(Object::builder().property("name", "Ada").build());
//! let named = is_plain_object.and(has("name"));
//! assert!(named.check(&user));
//! ```
//!
//! # Lifting into `Result`
//!
//! ```rust
//! use valcheck::predicate::*;
//! use valcheck::Value;
//!
//! let port = validate(Value::from(8080), is_integer.and(between(0.0, 65536.0)), "bad port");
//! assert_eq!(port, Ok(Value::from(8080)));
//! ```

mod array;
mod builtin;
mod combinators;
mod function;
mod notation;
mod number;
mod object;
mod text;
mod validation;

pub mod prelude;

// Core trait
pub use combinators::{Predicate, PredicateExt};

// Logical combinators
pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};

// Number predicates
pub use number::{
    between, between_inclusive, is_between, is_between_inclusive, is_even, is_finite, is_float,
    is_greater_than, is_greater_than_or_equal, is_infinity, is_integer, is_less_than,
    is_less_than_or_equal, is_nan, is_negative_infinity, is_number, is_odd, Between,
};

// Text, boolean and nullish predicates
pub use text::{
    is_boolean, is_defined, is_defined_strict, is_empty_text, is_encoding, is_falsy, is_non_empty_text,
    is_null, is_string, is_symbol, is_text, is_truthy, is_undefined, ENCODINGS,
};

// Object predicates
pub use object::{
    has, has_all_properties, has_length, has_property, is_empty_object, is_non_empty_object,
    is_object, is_object_like, is_plain_object, length, owns, owns_all_properties, owns_property,
    Has, Length, Owns,
};

// Array predicates
pub use array::{
    array_of, has_index, is_array, is_array_of_kind, is_array_of_kind_name, is_empty_array,
    is_iterable, is_non_empty_array, of_kind, ArrayOf, OfKind,
};

// Function predicates
pub use function::{are_defined, are_functions, is_async_function, is_child_of, is_class, is_function};

// Builtin object predicates
pub use builtin::{
    error_of, flag, has_flag, has_message, has_name, is_date, is_error, is_map, is_pending,
    is_promise, is_regexp, is_set, ErrorOf, Flag,
};

// Lexical grammars
pub use notation::{
    is_bracket_notation, is_dot_notation, is_float_literal, is_integer_literal, is_notation,
    is_number_literal, is_prop_name, is_text_literal, Grammar,
};

// Result integration
pub use validation::{validate, validate_with};
