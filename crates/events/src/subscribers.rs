use strand_core::Handler;

use crate::{Accessors, Event, Plain, SubscribeError};

/// A borrowed view of an [`Event`] that can only manage subscriptions.
///
/// Owners return this from accessor methods so callers can subscribe and
/// unsubscribe without being able to publish.
pub struct Subscribers<'a, A, X = Plain> {
    event: &'a mut Event<A, X>,
}

impl<'a, A, X: Accessors<A>> Subscribers<'a, A, X> {
    pub(crate) fn new(event: &'a mut Event<A, X>) -> Self {
        Self { event }
    }

    /// Adds `handler` to the event's subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`SubscribeError::Full`] if adding `handler` would exceed the
    /// event's subscriber limit.
    pub fn subscribe(&mut self, handler: Handler<A>) -> Result<(), SubscribeError> {
        self.event.subscribe(handler)
    }

    /// Removes one subscription of `handler`, returning `true` if one was
    /// removed.
    pub fn unsubscribe(&mut self, handler: &Handler<A>) -> bool {
        self.event.unsubscribe(handler)
    }

    /// Returns the number of subscriptions, counting duplicates.
    #[must_use]
    pub fn count(&self) -> usize {
        self.event.subscriber_count()
    }

    /// Returns `true` if `handler` is subscribed at least once.
    #[must_use]
    pub fn contains(&self, handler: &Handler<A>) -> bool {
        self.event.is_subscribed(handler)
    }
}
