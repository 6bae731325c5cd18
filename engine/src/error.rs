//! Engine error handling
//!
//! Two layers: [`ProviderError`] for upstream collaborator failures, which
//! never cross the orchestration boundary (they resolve to error-map entries
//! or typed nulls), and [`EngineError`] for the few conditions that terminate
//! a request or fail engine setup.

use thiserror::Error;

/// Errors that terminate a request or fail engine setup
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requested subject does not exist; presentation layers map this to
    /// a 404-equivalent
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed upstream fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider reported its own failure message
    #[error("{0}")]
    Upstream(String),

    /// The provider had nothing to report and no message of its own
    #[error("no data available")]
    NoData,
}

impl ProviderError {
    /// The provider's own message, or the caller's generic fallback
    pub fn message_or(&self, generic: &str) -> String {
        match self {
            ProviderError::Upstream(msg) => msg.clone(),
            ProviderError::NoData => generic.to_string(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
