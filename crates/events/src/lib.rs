//! Owner-published events built on Strand multicast chains.
//!
//! An [`Event`] wraps a [`Chain`](strand_core::Chain) of handlers with the
//! usual publish/subscribe split:
//!
//! - [`Subscribers`] — a borrowed view that can subscribe and unsubscribe,
//!   handed out by the owning component
//! - [`Event::publish`] — calls every subscriber, failing with
//!   [`InvokeError::NullInvocation`](strand_core::InvokeError) when there are
//!   none; [`Event::publish_if_present`] is the non-failing form
//! - [`Accessors`] — custom add/remove behavior ([`Plain`], [`Unique`])
//! - [`Config`] — a log label and an optional subscriber limit
//!
//! # Logging
//!
//! Subscription changes are logged at `debug` level and rejected
//! subscriptions at `warn` level through `tracing`, with the event name from
//! its [`Config`] in the `event` field.

mod accessors;
mod config;
mod error;
mod event;
mod subscribers;

#[cfg(test)]
mod tests;

pub use accessors::{Accessors, Plain, Unique};
pub use config::{Config, ConfigError};
pub use error::SubscribeError;
pub use event::Event;
pub use subscribers::Subscribers;
