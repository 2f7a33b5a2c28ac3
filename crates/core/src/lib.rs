//! Typed callable references and multicast chains.
//!
//! This crate defines the building blocks that events and other
//! publish/subscribe layers build on:
//!
//! - [`Handler`] — a typed reference to a function, a bound method, or a
//!   closure, comparable by the code (and receiver) it refers to
//! - [`Chain`] — an absent-or-present, ordered composition of handlers
//!   invoked as one unit
//! - [`Multicast`] — the non-empty handler list inside a present chain
//! - [`InvokeError`] — invoking an absent chain, or a handler's own failure
//!
//! Everything here is single-threaded: handlers are reference counted with
//! [`Rc`](std::rc::Rc) and are neither `Send` nor `Sync`.

mod chain;
mod error;
mod handler;

pub use chain::{Chain, Multicast};
pub use error::InvokeError;
pub use handler::{Handler, Kind};
