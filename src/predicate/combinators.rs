//! Predicate trait and logical combinators
//!
//! Every free-function check in this crate has the shape `fn(&Value) -> bool`
//! and is therefore a [`Predicate<Value>`] through the blanket closure impl.
//! Combine them with [`PredicateExt`] or the array combinators below.

/// A composable boolean check over values of type T.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::Value;
///
/// let even_integer = is_integer.and(is_even);
/// assert!(even_integer.check(&Value::from(4)));
/// assert!(!even_integer.check(&Value::from(4.5)));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// True if `value` satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-chaining combinators for any [`Predicate`].
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::Value;
///
/// let blank_or_missing = is_empty_text.or(is_undefined);
/// assert!(blank_or_missing.check(&Value::from("  ")));
/// assert!(blank_or_missing.check(&Value::Undefined));
/// assert!(!blank_or_missing.check(&Value::from("x")));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate holds.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// True when this predicate does not hold.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Both predicates must hold.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Either predicate must hold.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// Inverts a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Every predicate in a fixed-size array must hold.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Combine same-typed predicates with AND.
///
/// Plain functions of differing names have distinct types; coerce them to
/// `fn(&Value) -> bool` to put them in one array.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::Value;
///
/// let checks: [fn(&Value) -> bool; 2] = [is_finite, is_odd];
/// assert!(all_of(checks).check(&Value::from(3)));
/// assert!(!all_of(checks).check(&Value::from(2)));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// At least one predicate in a fixed-size array must hold.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Combine same-typed predicates with OR.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::{Kind, Value};
///
/// let scalar = any_of([of_kind(Kind::String), of_kind(Kind::Number), of_kind(Kind::Boolean)]);
/// assert!(scalar.check(&Value::from(true)));
/// assert!(!scalar.check(&Value::Null));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// No predicate in a fixed-size array may hold.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Combine same-typed predicates with NOR.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::*;
/// use valcheck::{Kind, Value};
///
/// let present = none_of([of_kind(Kind::Null), of_kind(Kind::Undefined)]);
/// assert!(present.check(&Value::from(0)));
/// assert!(!present.check(&Value::Null));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
