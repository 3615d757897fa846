//! Error types for the algo crate.

use thiserror::Error;

/// Errors reported by controlled traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// Raw action code outside the known [`ForeachAction`](crate::ForeachAction) values.
    #[error("unknown foreach action code: {0}")]
    UnknownAction(i64),

    /// A visitor returned a signal that does not convert to a
    /// [`ForeachAction`](crate::ForeachAction).
    #[error("visitor returned an invalid action at step {step}")]
    InvalidAction { step: usize },
}

/// Result type for algo operations.
pub type Result<T> = std::result::Result<T, AlgoError>;
