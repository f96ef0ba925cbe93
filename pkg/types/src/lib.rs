//! Shared types for secretgen: the secret manifest model and the config file.

pub mod config;
pub mod error;
pub mod secret;

pub use error::NormalizeError;
pub use secret::{RawSecret, SecretManifest, normalize, serialize};
