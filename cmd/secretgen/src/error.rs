use pkg_types::NormalizeError;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail. None of them are retried; the run stops at the
/// first one and the process exits non-zero.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("you have to specify the raw secret file name using flag -f")]
    MissingInputFlag,

    #[error("failed to read raw secret file {}", path.display())]
    InputReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse raw secret file {}", path.display())]
    InputParseFailure {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("failed to serialize secret manifest")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write secret manifest to {}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("`{command}` failed: {reason}")]
    ApplyCommandFailure { command: String, reason: String },
}
