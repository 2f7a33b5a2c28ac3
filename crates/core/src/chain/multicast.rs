use std::{iter, mem};

use crate::Handler;

use super::Chain;

/// A non-empty, ordered list of handlers invoked as one unit.
///
/// A `Multicast` always holds at least one handler, so invoking it cannot
/// fail for lack of handlers. Removing the final handler yields
/// [`Chain::Absent`] rather than an empty `Multicast`.
///
/// The same handler may appear more than once; each occurrence is called
/// separately and removed separately.
pub struct Multicast<A, R = ()> {
    /// Every handler before `last`, in insertion order.
    init: Vec<Handler<A, R>>,

    /// The most recently appended handler, whose result `invoke` returns.
    last: Handler<A, R>,
}

impl<A, R> Multicast<A, R> {
    /// Creates a multicast holding a single handler.
    #[must_use]
    pub fn new(handler: Handler<A, R>) -> Self {
        Self {
            init: Vec::new(),
            last: handler,
        }
    }

    /// Appends a handler in place.
    pub fn push(&mut self, handler: Handler<A, R>) {
        let previous = mem::replace(&mut self.last, handler);
        self.init.push(previous);
    }

    /// Returns this multicast with `handler` appended.
    #[must_use]
    pub fn append(mut self, handler: Handler<A, R>) -> Self {
        self.push(handler);
        self
    }

    /// Removes the last occurrence of `handler`.
    ///
    /// Returns [`Chain::Absent`] if that was the only handler and leaves the
    /// handlers unchanged if `handler` is not present.
    pub fn remove(mut self, handler: &Handler<A, R>) -> Chain<A, R> {
        if self.last == *handler {
            return match self.init.pop() {
                Some(previous) => {
                    self.last = previous;
                    Chain::Present(self)
                }
                None => Chain::Absent,
            };
        }

        if let Some(index) = self.init.iter().rposition(|h| h == handler) {
            self.init.remove(index);
        }
        Chain::Present(self)
    }

    /// Removes the last contiguous run of handlers equal to `run`.
    ///
    /// Leaves the handlers unchanged if `run` is empty or never appears as a
    /// contiguous run.
    pub fn remove_run(self, run: &[Handler<A, R>]) -> Chain<A, R> {
        let mut handlers = self.into_vec();

        if run.is_empty() || run.len() > handlers.len() {
            return handlers.into_iter().collect();
        }

        if let Some(start) = handlers.windows(run.len()).rposition(|window| window == run) {
            handlers.drain(start..start + run.len());
        }
        handlers.into_iter().collect()
    }

    /// Calls every handler in order and returns the last handler's result.
    ///
    /// Results of the earlier handlers are dropped.
    pub fn invoke(&self, args: &A) -> R {
        for handler in &self.init {
            handler.call(args);
        }
        self.last.call(args)
    }

    /// Calls every handler in order and collects all results.
    pub fn invoke_all(&self, args: &A) -> Vec<R> {
        self.handlers().map(|handler| handler.call(args)).collect()
    }

    /// Returns the number of handlers, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.init.len() + 1
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first handler to be called.
    #[must_use]
    pub fn first(&self) -> &Handler<A, R> {
        self.init.first().unwrap_or(&self.last)
    }

    /// Returns the last handler to be called.
    #[must_use]
    pub fn last(&self) -> &Handler<A, R> {
        &self.last
    }

    /// Returns `true` if `handler` appears at least once.
    #[must_use]
    pub fn contains(&self, handler: &Handler<A, R>) -> bool {
        self.handlers().any(|h| h == handler)
    }

    /// Iterates over the handlers in invocation order.
    pub fn handlers(&self) -> impl Iterator<Item = &Handler<A, R>> {
        self.init.iter().chain(iter::once(&self.last))
    }

    /// Consumes the multicast, returning its handlers in invocation order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Handler<A, R>> {
        let mut handlers = self.init;
        handlers.push(self.last);
        handlers
    }
}

impl<A, T, E> Multicast<A, Result<T, E>> {
    /// Calls handlers in order until one fails.
    ///
    /// Returns the last handler's result when every handler succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first handler error. Handlers after the failing one are not
    /// called.
    pub fn try_invoke(&self, args: &A) -> Result<T, E> {
        for handler in &self.init {
            handler.call(args)?;
        }
        self.last.call(args)
    }
}

impl<A, R> Clone for Multicast<A, R> {
    fn clone(&self) -> Self {
        Self {
            init: self.init.clone(),
            last: self.last.clone(),
        }
    }
}

impl<A, R> PartialEq for Multicast<A, R> {
    fn eq(&self, other: &Self) -> bool {
        self.last == other.last && self.init == other.init
    }
}

impl<A, R> Eq for Multicast<A, R> {}

impl<A, R> std::fmt::Debug for Multicast<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.handlers()).finish()
    }
}

impl<A, R> From<Handler<A, R>> for Multicast<A, R> {
    fn from(handler: Handler<A, R>) -> Self {
        Self::new(handler)
    }
}
