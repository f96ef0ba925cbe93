//! Filesystem path constants.

/// Default config file path.
pub const DEFAULT_CONFIG: &str = "/etc/secretgen/config.yaml";

/// Default directory for generated (time-based) output files.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Suffix appended to the timestamp of a generated output name.
/// Full name = `<unix-seconds>` + `GENERATED_NAME_SUFFIX` + `GENERATED_NAME_EXT`.
pub const GENERATED_NAME_SUFFIX: &str = "-secret";

/// Extension of a generated output name.
pub const GENERATED_NAME_EXT: &str = ".json";
