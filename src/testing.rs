//! Testing utilities for code built on valcheck
//!
//! Assertion macros that report the offending value on failure, and, with the
//! `proptest` feature, strategies producing arbitrary [`Value`]s.
//!
//! # Example
//!
//! ```rust
//! use valcheck::predicate::*;
//! use valcheck::{assert_holds, assert_kind, assert_rejects, Kind, Value};
//!
//! assert_holds!(is_integer, Value::from(3));
//! assert_rejects!(is_integer, Value::from(3.5));
//! assert_holds!(between(0.0, 1.0), Value::from(0.5));
//! assert_kind!(Value::Null, Kind::Null);
//! ```

#[cfg(feature = "proptest")]
use crate::kind::Kind;
#[cfg(feature = "proptest")]
use crate::value::Value;

/// Assert that a predicate holds for a value.
///
/// Panics with the value's debug form otherwise.
#[macro_export]
macro_rules! assert_holds {
    ($predicate:expr, $value:expr) => {
        match &$value {
            value => {
                if !$crate::predicate::Predicate::check(&$predicate, value) {
                    panic!(
                        "Expected `{}` to hold, but it rejected {:?}",
                        stringify!($predicate),
                        value
                    );
                }
            }
        }
    };
}

/// Assert that a predicate rejects a value.
///
/// Panics with the value's debug form otherwise.
#[macro_export]
macro_rules! assert_rejects {
    ($predicate:expr, $value:expr) => {
        match &$value {
            value => {
                if $crate::predicate::Predicate::check(&$predicate, value) {
                    panic!(
                        "Expected `{}` to reject, but it accepted {:?}",
                        stringify!($predicate),
                        value
                    );
                }
            }
        }
    };
}

/// Assert that a value classifies as the given kind.
#[macro_export]
macro_rules! assert_kind {
    ($value:expr, $kind:expr) => {
        match (&$value, $kind) {
            (value, expected) => {
                let actual = $crate::kind_of(value);
                if actual != expected {
                    panic!(
                        "Expected kind {}, got {} for {:?}",
                        expected, actual, value
                    );
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Kind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(Kind::ALL.to_vec()).boxed()
    }
}

/// Strategy for values without nested structure.
#[cfg(feature = "proptest")]
pub fn arb_primitive() -> BoxedStrategy<Value> {
    use crate::value::Symbol;
    use num_bigint::BigInt;

    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        proptest::num::f64::ANY.prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::from(BigInt::from(n))),
        any::<String>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(|d| Value::from(Symbol::new(d))),
    ]
    .boxed()
}

/// Strategy for callables: plain, arrow, async, generator and class forms.
#[cfg(feature = "proptest")]
pub fn arb_function() -> BoxedStrategy<Value> {
    use crate::value::{Class, Function, FunctionKind};

    (0..7u8, "[A-Za-z]{1,6}")
        .prop_map(|(form, name)| {
            let kind = match form {
                0 => FunctionKind::Function,
                1 => FunctionKind::Arrow,
                2 => FunctionKind::Async,
                3 => FunctionKind::AsyncArrow,
                4 => FunctionKind::Generator,
                5 => FunctionKind::AsyncGenerator,
                _ => return Value::from(Class::builder(name).build()),
            };
            Value::from(Function::new(name, kind))
        })
        .boxed()
}

/// Strategy for arbitrary values, nesting arrays and plain objects up to a
/// few levels deep.
///
/// # Example
///
/// ```rust
/// use proptest::prelude::*;
/// use valcheck::testing::arb_value;
/// use valcheck::{kind_of, Kind};
///
/// proptest!(|(value in arb_value())| {
///     prop_assert!(Kind::ALL.contains(&kind_of(&value)));
/// });
/// ```
#[cfg(feature = "proptest")]
pub fn arb_value() -> BoxedStrategy<Value> {
    use crate::value::Object;

    let leaf = prop_oneof![4 => arb_primitive(), 1 => arb_function()];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z_$][a-z0-9]{0,4}", inner), 0..4).prop_map(|members| {
                Value::from(
                    members
                        .into_iter()
                        .fold(Object::builder(), |b, (k, v)| b.property(k, v))
                        .build(),
                )
            }),
        ]
    })
    .boxed()
}
