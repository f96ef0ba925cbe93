//! Hands the generated manifest to the cluster tool.

use pkg_constants::apply::{APPLY_FILE_FLAG, APPLY_SUBCOMMAND};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

use crate::error::GenError;

/// Run `<kubectl> apply -f <path>` with the tool's output going straight to
/// our stdout/stderr. A spawn error or non-zero exit is fatal.
pub fn apply_manifest(kubectl: &str, path: &Path) -> Result<(), GenError> {
    let command = format!(
        "{} {} {} {:?}",
        kubectl,
        APPLY_SUBCOMMAND,
        APPLY_FILE_FLAG,
        path.display().to_string()
    );
    println!("{}", command);
    info!("Applying secret manifest with {}", kubectl);

    let status = Command::new(kubectl)
        .arg(APPLY_SUBCOMMAND)
        .arg(APPLY_FILE_FLAG)
        .arg(path)
        .stdin(Stdio::null())
        .status()
        .map_err(|e| GenError::ApplyCommandFailure {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(GenError::ApplyCommandFailure {
            command,
            reason: status.to_string(),
        });
    }
    Ok(())
}
