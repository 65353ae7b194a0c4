//! Error types for the query core.

use crate::path::PathError;

/// Errors raised while building a query.
///
/// All of them are raised synchronously, before a request is handed to a
/// transport. Snapshot navigation never produces one of these: a missing
/// branch is represented as an absent snapshot.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The target path breaks the store's structural rules.
    #[error("invalid path: {0}")]
    InvalidPath(#[from] PathError),

    /// A filter was constructed with a value it cannot carry.
    #[error("invalid filter value: {message}")]
    InvalidFilterValue { message: String },

    /// Two modifiers would render the same query parameter.
    #[error("conflicting query modifier: '{parameter}' is already set")]
    ConflictingModifier { parameter: &'static str },
}

impl Error {
    pub(crate) fn invalid_filter_value(message: impl Into<String>) -> Self {
        Error::InvalidFilterValue {
            message: message.into(),
        }
    }
}
