//! Error types for pull cursors.

use std::any::Any;
use std::fmt;
use std::io;

/// Errors reported by [`Cursor::try_next`](super::Cursor::try_next).
///
/// [`Iterator::next`] on a cursor raises the same conditions as panics
/// instead.
///
/// # Examples
///
/// ```rust
/// use lazyseq::pull::PullError;
///
/// let error = PullError::ProducerPanicked {
///     message: "boom".to_string(),
/// };
/// assert_eq!(format!("{error}"), "pull cursor: producer panicked: boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullError {
    /// The producer thread backing the cursor could not be started.
    Spawn {
        /// The kind of the underlying I/O error.
        kind: io::ErrorKind,
        /// The rendered underlying I/O error.
        message: String,
    },
    /// The producer panicked while it was being resumed.
    ProducerPanicked {
        /// The panic message, when the payload was a string.
        message: String,
    },
}

impl PullError {
    pub(crate) fn spawn(error: &io::Error) -> Self {
        Self::Spawn {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub(crate) fn panicked(payload: &(dyn Any + Send)) -> Self {
        Self::ProducerPanicked {
            message: panic_message(payload),
        }
    }
}

impl fmt::Display for PullError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { message, .. } => {
                write!(formatter, "pull cursor: failed to spawn producer thread: {message}")
            }
            Self::ProducerPanicked { message } => {
                write!(formatter, "pull cursor: producer panicked: {message}")
            }
        }
    }
}

impl std::error::Error for PullError {}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
