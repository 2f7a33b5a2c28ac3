use thiserror::Error;

/// Errors that can occur when subscribing to an [`Event`](crate::Event).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeError {
    /// The event already holds its configured maximum of subscriptions.
    #[error("subscriber limit of {limit} reached")]
    Full {
        /// The configured maximum.
        limit: usize,
    },
}
