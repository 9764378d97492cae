//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and JSON errors, and provides semantic variants for
//! option validation and pipeline execution failures.
use std::process::ExitCode;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid option key: {key}. Keys must be dot-separated identifiers")]
    InvalidOptionKey { key: String },

    #[error("Pipeline exited with status {status}")]
    PipelineExit { status: i32 },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    /// Process exit code for this error. A pipeline failure propagates the
    /// pipeline's own status; everything else exits 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::PipelineExit { status } => {
                ExitCode::from(u8::try_from(*status).unwrap_or(1))
            }
            _ => ExitCode::FAILURE,
        }
    }
}
