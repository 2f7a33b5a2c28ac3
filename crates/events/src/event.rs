use std::mem;

use strand_core::{Chain, Handler, InvokeError};
use tracing::{debug, trace, warn};

use crate::{Accessors, Config, Plain, SubscribeError, Subscribers};

/// A multicast notification owned by one component.
///
/// An event holds an absent-or-present [`Chain`] of `Handler<A>`. Anyone with
/// a [`Subscribers`] view may subscribe and unsubscribe; publishing needs the
/// `Event` itself. Keep the event in a private field and hand out
/// [`Event::subscribers`] to restrict publishing to the owner.
///
/// # Example
///
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use strand_core::Handler;
/// use strand_events::{Event, Subscribers};
///
/// #[derive(Default)]
/// struct Button {
///     clicked: Event<u32>,
///     clicks: u32,
/// }
///
/// impl Button {
///     fn on_click(&mut self) -> Subscribers<'_, u32> {
///         self.clicked.subscribers()
///     }
///
///     fn click(&mut self) {
///         self.clicks += 1;
///         self.clicked.publish_if_present(&self.clicks);
///     }
/// }
///
/// let seen = Rc::new(Cell::new(0));
/// let mut button = Button::default();
///
/// button
///     .on_click()
///     .subscribe(Handler::new({
///         let seen = Rc::clone(&seen);
///         move |clicks: &u32| seen.set(*clicks)
///     }))
///     .unwrap();
///
/// button.click();
/// button.click();
/// assert_eq!(seen.get(), 2);
/// ```
pub struct Event<A, X = Plain> {
    chain: Chain<A>,
    config: Config,
    accessors: X,
}

impl<A> Event<A> {
    /// Creates an event with the default config and no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an event with `config` and no subscribers.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self::with_accessors(config, Plain)
    }
}

impl<A, X: Accessors<A>> Event<A, X> {
    /// Creates an event that routes subscriptions through `accessors`.
    #[must_use]
    pub fn with_accessors(config: Config, accessors: X) -> Self {
        Self {
            chain: Chain::Absent,
            config,
            accessors,
        }
    }

    /// Adds `handler` to the subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`SubscribeError::Full`] if adding `handler` would take the
    /// subscribers past the configured limit. The subscribers are unchanged in
    /// that case. A subscription the accessors ignore never counts against the
    /// limit.
    pub fn subscribe(&mut self, handler: Handler<A>) -> Result<(), SubscribeError> {
        let previous = self.chain.clone();
        let chain = mem::take(&mut self.chain);
        self.chain = self.accessors.add(chain, handler);

        let len = self.chain.len();
        if let Some(limit) = self.config.max_subscribers().filter(|&limit| len > limit) {
            self.chain = previous;
            warn!(event = self.config.name(), limit, "subscription rejected");
            return Err(SubscribeError::Full { limit });
        }

        debug!(
            event = self.config.name(),
            subscribers = self.chain.len(),
            "subscribed"
        );
        Ok(())
    }

    /// Removes one subscription of `handler`.
    ///
    /// Returns `true` if a subscription was removed. Unsubscribing a handler
    /// that is not subscribed does nothing and returns `false`.
    pub fn unsubscribe(&mut self, handler: &Handler<A>) -> bool {
        let before = self.chain.len();
        let chain = mem::take(&mut self.chain);
        self.chain = self.accessors.remove(chain, handler);

        let removed = self.chain.len() < before;
        if removed {
            debug!(
                event = self.config.name(),
                subscribers = self.chain.len(),
                "unsubscribed"
            );
        } else {
            trace!(event = self.config.name(), "unsubscribe had no match");
        }
        removed
    }

    /// Returns a view that can subscribe and unsubscribe but not publish.
    pub fn subscribers(&mut self) -> Subscribers<'_, A, X> {
        Subscribers::new(self)
    }

    /// Calls every subscriber in subscription order with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::NullInvocation`] if there are no subscribers.
    pub fn publish(&self, args: &A) -> Result<(), InvokeError> {
        trace!(
            event = self.config.name(),
            subscribers = self.chain.len(),
            "publishing"
        );
        self.chain.invoke(args)
    }

    /// Calls every subscriber if there are any.
    ///
    /// Returns `true` if subscribers were called.
    pub fn publish_if_present(&self, args: &A) -> bool {
        trace!(
            event = self.config.name(),
            subscribers = self.chain.len(),
            "publishing"
        );
        self.chain.invoke_if_present(args).is_some()
    }

    /// Returns the number of subscriptions, counting duplicates.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if at least one handler is subscribed.
    #[must_use]
    pub fn has_subscribers(&self) -> bool {
        self.chain.is_present()
    }

    /// Returns `true` if `handler` is subscribed at least once.
    #[must_use]
    pub fn is_subscribed(&self, handler: &Handler<A>) -> bool {
        self.chain.contains(handler)
    }

    /// Returns the event's config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current subscriber chain.
    #[must_use]
    pub fn chain(&self) -> &Chain<A> {
        &self.chain
    }
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, X: std::fmt::Debug> std::fmt::Debug for Event<A, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.config.name())
            .field("subscribers", &self.chain.len())
            .field("accessors", &self.accessors)
            .finish()
    }
}
