use chrono::{DateTime, Utc};
use pkg_constants::apply::DEFAULT_KUBECTL;
use pkg_constants::paths::DEFAULT_OUTPUT_DIR;
use pkg_types::config::GeneratorConfigFile;
use std::path::{Path, PathBuf};

use crate::Cli;
use crate::error::GenError;
use crate::output::generated_path;

/// Everything one run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub input: PathBuf,
    pub name_override: Option<String>,
    pub output: PathBuf,
    /// Output name was generated; remove the file when the run ends.
    pub ephemeral: bool,
    pub apply: bool,
    pub kubectl: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The `-f` value as a path. Checked before anything else is loaded.
pub fn input_path(file: Option<&str>) -> Result<PathBuf, GenError> {
    file.filter(|f| !f.is_empty())
        .map(PathBuf::from)
        .ok_or(GenError::MissingInputFlag)
}

impl GenConfig {
    /// Merge: CLI args > config file > defaults
    pub fn resolve(
        input: PathBuf,
        cli: Cli,
        file_cfg: GeneratorConfigFile,
        now: DateTime<Utc>,
    ) -> Self {
        let (output, ephemeral) = match non_empty(cli.output) {
            Some(path) => (PathBuf::from(path), false),
            None => {
                let dir = file_cfg
                    .output_dir
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
                (generated_path(Path::new(&dir), now), true)
            }
        };

        let kubectl = cli
            .kubectl
            .or(file_cfg.kubectl)
            .unwrap_or_else(|| DEFAULT_KUBECTL.to_string());

        Self {
            input,
            name_override: non_empty(cli.name),
            output,
            ephemeral,
            apply: cli.apply,
            kubectl,
        }
    }
}
