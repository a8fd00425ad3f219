use thiserror::Error;

/// Raised when at most one element was expected but several were found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MultipleElementError {
    message: String,
}

impl MultipleElementError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors from positional access into [`Tuple2`](crate::Tuple2) and
/// [`Tuple3`](crate::Tuple3).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TupleError {
    #[error("{op}: index {index} is out of bounds for arity {arity}")]
    IndexOutOfBounds {
        op: &'static str,
        index: usize,
        arity: usize,
    },

    #[error("{op}: slot {index} does not hold a value of type {expected}")]
    TypeMismatch {
        op: &'static str,
        index: usize,
        expected: &'static str,
    },
}
