//! Multicast chains of handlers.
//!
//! A [`Chain`] is either [`Chain::Absent`] (no handlers) or
//! [`Chain::Present`] with a non-empty [`Multicast`]. There is no
//! present-but-empty state: removing the final handler collapses the chain
//! back to `Absent`, and invoking an absent chain is an error.
//!
//! # State Machine
//!
//! ```text
//!             append                append
//!   Absent ─────────► Present(1) ─────────► Present(n + 1)
//!     ▲                   │
//!     └───────────────────┘
//!        remove(match)
//! ```
//!
//! - Removing a handler that is not present leaves the chain unchanged.
//! - With duplicates, removal takes the most recently appended occurrence.
//! - Invocation never changes the chain.

mod multicast;


pub use multicast::Multicast;

use tracing::{debug, trace};

use crate::{Handler, InvokeError};

/// An ordered, possibly absent, composition of handlers sharing one signature.
///
/// Handlers are called in the order they were appended, each receiving the
/// same `&A`. The chain returns only the last handler's result from
/// [`invoke`](Chain::invoke); use [`invoke_all`](Chain::invoke_all) to keep
/// every result.
///
/// # Example
///
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use strand_core::{Chain, Handler, InvokeError};
///
/// let value = Rc::new(Cell::new(1));
///
/// let increment = Handler::new({
///     let value = Rc::clone(&value);
///     move |_: &()| value.set(value.get() + 1)
/// });
/// let decrement = Handler::new({
///     let value = Rc::clone(&value);
///     move |_: &()| value.set(value.get() - 1)
/// });
///
/// let chain = Chain::new()
///     .append(increment.clone())
///     .append(increment.clone())
///     .append(decrement.clone());
///
/// chain.invoke(&()).unwrap();
/// assert_eq!(value.get(), 2);
///
/// let chain = chain.remove(&increment).remove(&decrement);
/// assert!(chain.is_present());
///
/// let chain = chain.remove(&increment);
/// assert_eq!(chain.invoke(&()), Err(InvokeError::NullInvocation));
/// ```
pub enum Chain<A, R = ()> {
    /// No handlers.
    Absent,

    /// One or more handlers.
    Present(Multicast<A, R>),
}

impl<A, R> Chain<A, R> {
    /// Creates an absent chain.
    #[must_use]
    pub const fn new() -> Self {
        Self::Absent
    }

    /// Appends a handler in place.
    pub fn push(&mut self, handler: Handler<A, R>) {
        match self {
            Self::Absent => *self = Self::Present(Multicast::new(handler)),
            Self::Present(multicast) => multicast.push(handler),
        }
        trace!(len = self.len(), "handler appended");
    }

    /// Returns this chain with `handler` appended.
    ///
    /// Appending to an absent chain creates a one-handler chain.
    #[must_use]
    pub fn append(mut self, handler: Handler<A, R>) -> Self {
        self.push(handler);
        self
    }

    /// Returns this chain followed by every handler of `other`, in order.
    ///
    /// Combining with an absent chain on either side returns the other chain.
    #[must_use]
    pub fn combine(mut self, other: Self) -> Self {
        if let Self::Present(multicast) = other {
            self.extend(multicast.into_vec());
        }
        self
    }

    /// Returns this chain with the last occurrence of `handler` removed.
    ///
    /// If `handler` is not present the chain is returned unchanged. Removing
    /// the only handler returns [`Chain::Absent`].
    #[must_use]
    pub fn remove(self, handler: &Handler<A, R>) -> Self {
        let Self::Present(multicast) = self else {
            return Self::Absent;
        };

        let before = multicast.len();
        let chain = multicast.remove(handler);
        if chain.len() < before {
            trace!(len = chain.len(), "handler removed");
        }
        chain
    }

    /// Returns this chain with the last contiguous run of `other`'s handlers
    /// removed.
    ///
    /// If `other` is absent or its handlers never appear as a contiguous run,
    /// the chain is returned unchanged.
    #[must_use]
    pub fn remove_chain(self, other: &Self) -> Self {
        match (self, other) {
            (Self::Present(multicast), Self::Present(run)) => {
                let run: Vec<_> = run.handlers().cloned().collect();
                let before = multicast.len();
                let chain = multicast.remove_run(&run);
                if chain.len() < before {
                    trace!(len = chain.len(), "chain removed");
                }
                chain
            }
            (chain, _) => chain,
        }
    }

    /// Calls every handler in order and returns the last handler's result.
    ///
    /// A panicking handler unwinds through `invoke`; the handlers after it are
    /// not called.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::NullInvocation`] if the chain is absent.
    pub fn invoke(&self, args: &A) -> Result<R, InvokeError> {
        self.require()
            .map(|multicast| multicast.invoke(args))
            .ok_or(InvokeError::NullInvocation)
    }

    /// Calls every handler if the chain is present.
    ///
    /// Returns `None` without side effects when the chain is absent.
    pub fn invoke_if_present(&self, args: &A) -> Option<R> {
        self.as_multicast().map(|multicast| {
            trace!(len = multicast.len(), "invoking chain");
            multicast.invoke(args)
        })
    }

    /// Calls every handler in order and collects all of their results.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::NullInvocation`] if the chain is absent.
    pub fn invoke_all(&self, args: &A) -> Result<Vec<R>, InvokeError> {
        self.require()
            .map(|multicast| multicast.invoke_all(args))
            .ok_or(InvokeError::NullInvocation)
    }

    /// Returns the number of handlers, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_multicast().map_or(0, Multicast::len)
    }

    /// Returns `true` if the chain has no handlers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_absent()
    }

    /// Returns `true` if the chain has no handlers.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the chain has at least one handler.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Returns `true` if `handler` appears at least once.
    #[must_use]
    pub fn contains(&self, handler: &Handler<A, R>) -> bool {
        self.as_multicast()
            .is_some_and(|multicast| multicast.contains(handler))
    }

    /// Iterates over the handlers in invocation order.
    ///
    /// The iterator is empty for an absent chain.
    pub fn handlers(&self) -> impl Iterator<Item = &Handler<A, R>> {
        self.as_multicast().into_iter().flat_map(Multicast::handlers)
    }

    /// Returns the underlying multicast, if present.
    #[must_use]
    pub fn as_multicast(&self) -> Option<&Multicast<A, R>> {
        match self {
            Self::Absent => None,
            Self::Present(multicast) => Some(multicast),
        }
    }

    /// Returns the multicast to invoke, logging absent invocations.
    fn require(&self) -> Option<&Multicast<A, R>> {
        match self {
            Self::Absent => {
                debug!("invoked a chain with no handlers");
                None
            }
            Self::Present(multicast) => {
                trace!(len = multicast.len(), "invoking chain");
                Some(multicast)
            }
        }
    }
}

impl<A, T, E> Chain<A, Result<T, E>> {
    /// Calls handlers in order until one fails.
    ///
    /// Returns the last handler's `Ok` value when every handler succeeds.
    ///
    /// # Errors
    ///
    /// - [`InvokeError::NullInvocation`] if the chain is absent.
    /// - [`InvokeError::Handler`] with the first handler error, unchanged.
    ///   Handlers after the failing one are not called.
    pub fn try_invoke(&self, args: &A) -> Result<T, InvokeError<E>> {
        let Some(multicast) = self.require() else {
            return Err(InvokeError::NullInvocation);
        };
        multicast.try_invoke(args).map_err(InvokeError::Handler)
    }
}

impl<A, R> Default for Chain<A, R> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<A, R> Clone for Chain<A, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Absent => Self::Absent,
            Self::Present(multicast) => Self::Present(multicast.clone()),
        }
    }
}

impl<A, R> PartialEq for Chain<A, R> {
    fn eq(&self, other: &Self) -> bool {
        self.as_multicast() == other.as_multicast()
    }
}

impl<A, R> Eq for Chain<A, R> {}

impl<A, R> std::fmt::Debug for Chain<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Present(multicast) => f.debug_tuple("Present").field(multicast).finish(),
        }
    }
}

impl<A, R> From<Handler<A, R>> for Chain<A, R> {
    fn from(handler: Handler<A, R>) -> Self {
        Self::Present(Multicast::new(handler))
    }
}

impl<A, R> From<Multicast<A, R>> for Chain<A, R> {
    fn from(multicast: Multicast<A, R>) -> Self {
        Self::Present(multicast)
    }
}

impl<A, R> Extend<Handler<A, R>> for Chain<A, R> {
    fn extend<I: IntoIterator<Item = Handler<A, R>>>(&mut self, handlers: I) {
        for handler in handlers {
            self.push(handler);
        }
    }
}

impl<A, R> FromIterator<Handler<A, R>> for Chain<A, R> {
    /// Collects handlers into a chain; no handlers yields [`Chain::Absent`].
    fn from_iter<I: IntoIterator<Item = Handler<A, R>>>(handlers: I) -> Self {
        let mut chain = Self::Absent;
        chain.extend(handlers);
        chain
    }
}
