//! Error types for `multigraph`.
//!
//! Only precondition violations are errors. Expected outcomes such as inserting
//! an edge that already exists are reported through `bool` return values.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in graph operations.
///
/// Error codes follow the pattern `MG-XXX` for easy debugging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node required by the operation is not stored in the graph (MG-001).
    #[error("[MG-001] Cannot call {operation} when node {node} does not exist in the graph")]
    MissingNode {
        /// Name of the graph operation that was called.
        operation: &'static str,
        /// `Debug` rendering of the absent node value.
        node: String,
    },

    /// Configuration error (MG-002), raised by [`Graph::try_with_config`](crate::Graph::try_with_config).
    #[error("[MG-002] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Builds a [`Error::MissingNode`] for `operation` naming `node`.
    pub(crate) fn missing_node<Q: std::fmt::Debug + ?Sized>(
        operation: &'static str,
        node: &Q,
    ) -> Self {
        Self::MissingNode {
            operation,
            node: format!("{node:?}"),
        }
    }

    /// Returns the error code (e.g., "MG-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingNode { .. } => "MG-001",
            Self::Config(_) => "MG-002",
        }
    }

    /// Returns true if this error reports an absent node.
    #[must_use]
    pub const fn is_missing_node(&self) -> bool {
        matches!(self, Self::MissingNode { .. })
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
