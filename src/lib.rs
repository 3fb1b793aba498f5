//! # valcheck
//!
//! Runtime inspection of dynamically typed values.
//!
//! Answers questions like "is this a non-empty array of strings?", "does this
//! object own the property `id`?" or "is this text valid dot notation?" over a
//! closed [`Value`] model of host values: primitives, arrays, objects with own
//! and inherited properties, functions, classes, errors and promises.
//!
//! Every predicate takes `&Value` and returns `bool`. A value of the wrong
//! shape never errors or panics; the predicate just says no.
//!
//! ## Quick Example
//!
//! ```rust
//! use valcheck::predicate::*;
//! use valcheck::value::{Class, Object};
//! use valcheck::{kind_of, Kind, Value};
//!
//! let base = Class::builder("Base").field("id", 0).build();
//! let user = Class::builder("User").extends(&base).field("name", "").build();
//! let ada = Value::from(Object::instance(&user).build());
//!
//! assert_eq!(kind_of(&ada), Kind::Object);
//! assert!(owns_property(&ada, &Value::from("name")));
//! assert!(!owns_property(&ada, &Value::from("id")));
//! assert!(has_property(&ada, &Value::from("id")));
//! assert!(is_child_of(&ada, &Value::from(&base)));
//!
//! assert!(is_notation(&Value::from("users[0].name")));
//! assert!(is_between(&Value::from(5), &Value::from(1), &Value::from(10)));
//! ```
//!
//! ## Composition
//!
//! ```rust
//! use valcheck::prelude::*;
//!
//! let id = is_integer.and(between_inclusive(1.0, f64::MAX));
//! assert!(id.check(&Value::from(7)));
//! assert!(!id.check(&Value::from(0)));
//! ```
//!
//! ## Features
//!
//! - `async`: [`Promise::spawn`](value::Promise) on the tokio runtime
//! - `tracing`: debug events for rejected inputs and promise probes
//! - `serde`: (de)serialize [`Kind`], convert `serde_json::Value` into [`Value`]
//! - `proptest`: value strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod kind;
pub mod predicate;
pub mod testing;
pub mod value;

// Re-exports
pub use kind::{classify, is_of_kind, is_of_kind_name, kind_of, Kind, ParseKindError};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::kind::{kind_of, Kind};
    pub use crate::predicate::prelude::*;
    pub use crate::value::{Class, Object, Value};
}
