//! Secret manifest defaults.

/// Kind written into every generated manifest, regardless of input.
pub const SECRET_KIND: &str = "Secret";

/// Secret type used when the input does not name one.
pub const DEFAULT_SECRET_TYPE: &str = "Opaque";

/// API version used when the input does not name one.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Indentation used for the pretty-printed manifest.
pub const MANIFEST_INDENT: &[u8] = b"    ";
