use std::convert::Infallible;

use thiserror::Error;

/// Errors that can occur when invoking a [`Chain`](crate::Chain).
///
/// Chains of infallible handlers only ever produce
/// [`InvokeError::NullInvocation`]. Chains whose handlers return `Result`
/// surface the first handler error through
/// [`Chain::try_invoke`](crate::Chain::try_invoke) as
/// [`InvokeError::Handler`], unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvokeError<E = Infallible> {
    /// The chain was absent: nothing has been appended, or every handler has
    /// since been removed.
    #[error("invoked a chain with no handlers")]
    NullInvocation,

    /// A handler returned an error and the remaining handlers were skipped.
    #[error("handler failed")]
    Handler(#[source] E),
}

impl<E> InvokeError<E> {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use strand_core::InvokeError;
    ///
    /// let err: InvokeError = InvokeError::NullInvocation;
    /// assert_eq!(err.as_label(), "null_invocation");
    /// ```
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::NullInvocation => "null_invocation",
            Self::Handler(_) => "handler_failed",
        }
    }

    /// Returns the handler error, if that is what this is.
    #[must_use]
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            Self::NullInvocation => None,
            Self::Handler(error) => Some(error),
        }
    }
}
