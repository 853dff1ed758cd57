//! Domain-level error types.

use thiserror::Error;

/// Errors surfaced by a post model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Raised by an operation that has no concrete implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NotImplementedError {
    pub message: String,
}

impl NotImplementedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NotImplementedError {
    fn default() -> Self {
        Self::new("Not implemented")
    }
}

/// Errors a controller operation returns instead of writing a response.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    NotImplemented(#[from] NotImplementedError),

    #[error("Missing route parameter: {0}")]
    MissingParam(&'static str),
}
