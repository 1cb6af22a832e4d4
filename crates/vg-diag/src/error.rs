//! Diagnostic pipeline error types.

use thiserror::Error;

/// Errors that can occur while obtaining or persisting diagnostic data.
///
/// The pipeline itself never propagates these — transport failures are
/// recovered by the fetch orchestrator, state failures are logged and
/// swallowed. Channels and the state store surface them internally.
#[derive(Debug, Error)]
pub enum DiagError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("channel timed out after {0}s")]
    Timeout(u64),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

/// Convenience alias for diagnostic results.
pub type DiagResult<T> = Result<T, DiagError>;
