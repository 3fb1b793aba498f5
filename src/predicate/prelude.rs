//! Predicate prelude for convenient imports
//!
//! Re-exports the trait, the combinators and the checks most code reaches
//! for first. Grammar and builtin-object checks stay in [`crate::predicate`].
//!
//! # Example
//!
//! ```rust
//! use valcheck::predicate::prelude::*;
//! use valcheck::Value;
//!
//! let small = is_integer.and(between_inclusive(0.0, 9.0));
//! assert!(small.check(&Value::from(9)));
//! assert!(!small.check(&Value::from(10)));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, none_of, And, Not, Or};

// Parameterized predicates
pub use super::array::{array_of, of_kind};
pub use super::number::{between, between_inclusive};
pub use super::object::{has, length, owns};

// Common checks
pub use super::array::{is_array, is_empty_array, is_non_empty_array};
pub use super::number::{is_float, is_integer, is_number};
pub use super::object::{is_empty_object, is_non_empty_object, is_plain_object};
pub use super::text::{
    is_boolean, is_defined, is_defined_strict, is_empty_text, is_non_empty_text, is_null, is_text,
    is_undefined,
};

// Result integration
pub use super::validation::{validate, validate_with};
