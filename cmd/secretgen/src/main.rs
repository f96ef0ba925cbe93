mod apply;
mod config;
mod error;
mod output;

use clap::Parser;
use pkg_constants::paths::DEFAULT_CONFIG;
use pkg_types::config::{GeneratorConfigFile, load_config_file};
use pkg_types::{RawSecret, normalize, serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::GenConfig;
use crate::error::GenError;
use crate::output::OutputGuard;

#[derive(Parser, Debug)]
#[command(
    name = "secretgen",
    version,
    about = "Generate a Kubernetes Secret manifest from a raw JSON secret file"
)]
pub struct Cli {
    /// Raw secret JSON file (plain-text values)
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Secret name, used when the raw file has no metadata.name
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Output manifest path. Without it a `<unix-seconds>-secret.json` file is
    /// generated and removed when the run ends
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Apply the generated manifest with kubectl
    #[arg(short = 'a', long = "apply")]
    pub apply: bool,

    /// Cluster tool used to apply the manifest
    #[arg(long)]
    pub kubectl: Option<String>,

    /// Path to YAML config file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// parse -> normalize -> serialize -> write -> apply -> cleanup
fn run(config: &GenConfig) -> Result<(), GenError> {
    let raw_bytes =
        std::fs::read(&config.input).map_err(|source| GenError::InputReadFailure {
            path: config.input.clone(),
            source,
        })?;
    let raw = RawSecret::from_json(&raw_bytes).map_err(|source| GenError::InputParseFailure {
        path: config.input.clone(),
        source,
    })?;

    let manifest = normalize(raw, config.name_override.as_deref())?;
    info!(
        "Secret {} ({}, {} keys)",
        manifest.metadata.name,
        manifest.secret_type,
        manifest.data.len()
    );
    debug!("Keys: {:?}", manifest.data.keys().collect::<Vec<_>>());

    let bytes = serialize(&manifest).map_err(GenError::Serialize)?;
    output::write_atomic(&config.output, &bytes)?;
    let _guard = OutputGuard::new(&config.output, config.ephemeral);
    info!("Manifest written to {}", config.output.display());

    if config.apply {
        apply::apply_manifest(&config.kubectl, &config.output)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = config::input_path(cli.file.as_deref())?;

    // Load config file (returns defaults if file not found)
    let file_cfg: GeneratorConfigFile = load_config_file(&cli.config)?;
    debug!("Config file: {}", cli.config.display());

    let config = GenConfig::resolve(input, cli, file_cfg, chrono::Utc::now());
    run(&config)?;

    Ok(())
}
