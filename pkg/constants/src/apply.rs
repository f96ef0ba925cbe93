//! Cluster tool constants.

/// Default cluster-management binary used to apply manifests.
pub const DEFAULT_KUBECTL: &str = "kubectl";

/// Subcommand passed to the cluster tool.
pub const APPLY_SUBCOMMAND: &str = "apply";

/// Flag preceding the manifest path.
pub const APPLY_FILE_FLAG: &str = "-f";
