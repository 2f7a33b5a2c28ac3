//! Custom add and remove behavior for events.
//!
//! An [`Event`](crate::Event) routes every subscribe and unsubscribe through
//! its [`Accessors`]. The default, [`Plain`], appends and removes exactly as
//! [`Chain`] does. [`Unique`] ignores a handler that is already subscribed.

use strand_core::{Chain, Handler};

/// Decides how subscriptions are added to and removed from an event's chain.
///
/// Both methods receive the current chain by value and return the new one.
/// Implementations may reorder, filter, or inspect handlers, but the
/// returned chain is what the event publishes to.
pub trait Accessors<A> {
    /// Adds `handler` to `chain`.
    fn add(&mut self, chain: Chain<A>, handler: Handler<A>) -> Chain<A> {
        chain.append(handler)
    }

    /// Removes `handler` from `chain`.
    fn remove(&mut self, chain: Chain<A>, handler: &Handler<A>) -> Chain<A> {
        chain.remove(handler)
    }
}

/// Append and remove with plain chain semantics, duplicates included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl<A> Accessors<A> for Plain {}

/// Subscribe each handler at most once.
///
/// Subscribing a handler that is already present leaves the chain unchanged,
/// so a single unsubscribe always removes it completely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unique;

impl<A> Accessors<A> for Unique {
    fn add(&mut self, chain: Chain<A>, handler: Handler<A>) -> Chain<A> {
        if chain.contains(&handler) {
            chain
        } else {
            chain.append(handler)
        }
    }
}
