//! Promise values
//!
//! A [`Promise`] is a shared handle to a deferred computation that settles
//! once, either fulfilled with a value or rejected with a reason. Every clone
//! observes the same settlement.

use std::fmt;
use std::future::Future;

use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt, Shared};

use super::Value;

/// Outcome of a settled promise: `Ok` when fulfilled, `Err` when rejected.
pub type Settlement = Result<Value, Value>;

/// A shared, clonable deferred result.
///
/// # Example
///
/// ```rust
/// use valcheck::value::{Promise, Value};
///
/// # tokio_test::block_on(async {
/// let p = Promise::resolve("done");
/// assert_eq!(p.settled().await, Ok(Value::from("done")));
/// # });
/// ```
#[derive(Clone)]
pub struct Promise(Shared<BoxFuture<'static, Settlement>>);

impl Promise {
    /// Wrap any future that produces a settlement.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Settlement> + Send + 'static,
    {
        Self(future.boxed().shared())
    }

    /// An already-fulfilled promise.
    pub fn resolve(value: impl Into<Value>) -> Self {
        Self::from_future(future::ready(Ok(value.into())))
    }

    /// An already-rejected promise.
    pub fn reject(reason: impl Into<Value>) -> Self {
        Self::from_future(future::ready(Err(reason.into())))
    }

    /// A promise that never settles.
    pub fn pending() -> Self {
        Self::from_future(future::pending())
    }

    /// A promise settled later through the returned [`Resolver`].
    ///
    /// Dropping the resolver without settling leaves the promise pending
    /// forever.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valcheck::value::{Promise, Value};
    ///
    /// # tokio_test::block_on(async {
    /// let (promise, resolver) = Promise::deferred();
    /// resolver.reject("nope").unwrap();
    /// assert_eq!(promise.settled().await, Err(Value::from("nope")));
    /// # });
    /// ```
    pub fn deferred() -> (Self, Resolver) {
        let (tx, rx) = oneshot::channel();
        let promise = Self::from_future(async move {
            match rx.await {
                Ok(settlement) => settlement,
                Err(oneshot::Canceled) => future::pending().await,
            }
        });
        (promise, Resolver(tx))
    }

    /// Run `future` as a tokio task; the promise settles when the task ends.
    ///
    /// A task that panics or is cancelled rejects the promise with an error
    /// object describing the failure.
    #[cfg(feature = "async")]
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Settlement> + Send + 'static,
    {
        let handle = tokio::spawn(future);
        // A finished task must read as settled even once the caller's coop
        // budget is spent.
        Self::from_future(async move {
            match tokio::task::unconstrained(handle).await {
                Ok(settlement) => settlement,
                Err(join_err) => Err(Value::from(super::Object::error(join_err.to_string()))),
            }
        })
    }

    /// A future resolving to this promise's settlement.
    pub fn settled(&self) -> Shared<BoxFuture<'static, Settlement>> {
        self.0.clone()
    }

    /// The settlement, if some clone has already observed it.
    ///
    /// `None` does not imply the promise is pending: an unpolled but ready
    /// promise also reports `None`. Use [`crate::predicate::is_pending`] to
    /// probe.
    pub fn peek(&self) -> Option<&Settlement> {
        self.0.peek()
    }
}

impl PartialEq for Promise {
    fn eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl fmt::Debug for Promise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.peek() {
            Some(Ok(value)) => f.debug_tuple("Promise::Fulfilled").field(value).finish(),
            Some(Err(reason)) => f.debug_tuple("Promise::Rejected").field(reason).finish(),
            None => write!(f, "Promise(<unobserved>)"),
        }
    }
}

/// Settles the promise returned alongside it by [`Promise::deferred`].
#[derive(Debug)]
pub struct Resolver(oneshot::Sender<Settlement>);

impl Resolver {
    /// Fulfil the promise. Hands the value back if every promise clone is gone.
    pub fn resolve(self, value: impl Into<Value>) -> Result<(), Value> {
        self.settle(Ok(value.into()))
    }

    /// Reject the promise. Hands the reason back if every promise clone is gone.
    pub fn reject(self, reason: impl Into<Value>) -> Result<(), Value> {
        self.settle(Err(reason.into()))
    }

    fn settle(self, settlement: Settlement) -> Result<(), Value> {
        self.0.send(settlement).map_err(|unsent| match unsent {
            Ok(value) | Err(value) => value,
        })
    }
}
