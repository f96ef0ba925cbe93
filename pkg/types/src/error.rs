use thiserror::Error;

/// Reasons a raw secret cannot be turned into a manifest.
///
/// Both are terminal: the input must be fixed and the run repeated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("secret name is missing: set metadata.name in the input or pass -n <name>")]
    MissingName,
    #[error("secret data is empty: the input needs a non-empty \"data\" object")]
    EmptyPayload,
}
