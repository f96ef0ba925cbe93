//! Secret manifests: the raw input shape, the normalized manifest, and the
//! transformation between them.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pkg_constants::manifest::{
    DEFAULT_API_VERSION, DEFAULT_SECRET_TYPE, MANIFEST_INDENT, SECRET_KIND,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::NormalizeError;

// --- Raw input ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Secret as written by hand: plain-text values, any metadata may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSecret {
    #[serde(default)]
    pub api_version: Option<String>,
    /// Ignored; the manifest kind is always `Secret`.
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default, rename = "type")]
    pub secret_type: Option<String>,
    #[serde(default)]
    pub metadata: Option<RawMetadata>,
    #[serde(default)]
    pub data: Option<BTreeMap<String, String>>,
}

impl RawSecret {
    /// Parse a raw secret from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

// --- Normalized manifest ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecretMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Deployable secret manifest. Field order here is the serialized order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretManifest {
    pub api_version: String,
    pub kind: String,
    #[serde(rename = "type")]
    pub secret_type: String,
    pub metadata: SecretMetadata,
    /// Base64-encoded values, keyed by name (sorted for stable output).
    pub data: BTreeMap<String, String>,
}

/// Empty strings count as absent, matching how the input is usually written.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Fill defaults, check mandatory fields and base64-encode every data value.
///
/// `name_override` supplies the name only when the input has none. The data
/// check runs first, so an empty payload is reported even if the name is
/// missing too. Values are encoded exactly once per call; feeding an already
/// normalized manifest back in encodes them again.
pub fn normalize(
    raw: RawSecret,
    name_override: Option<&str>,
) -> Result<SecretManifest, NormalizeError> {
    let data = match raw.data {
        Some(data) if !data.is_empty() => data,
        _ => return Err(NormalizeError::EmptyPayload),
    };

    let metadata = raw.metadata.unwrap_or_default();
    let name = present(metadata.name)
        .or_else(|| name_override.filter(|n| !n.is_empty()).map(str::to_string))
        .ok_or(NormalizeError::MissingName)?;

    let data = data
        .into_iter()
        .map(|(key, value)| {
            let encoded = STANDARD.encode(value.as_bytes());
            (key, encoded)
        })
        .collect();

    Ok(SecretManifest {
        api_version: present(raw.api_version).unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        kind: SECRET_KIND.to_string(),
        secret_type: present(raw.secret_type).unwrap_or_else(|| DEFAULT_SECRET_TYPE.to_string()),
        metadata: SecretMetadata {
            name,
            namespace: present(metadata.namespace),
        },
        data,
    })
}

/// Render a manifest as 4-space indented JSON with a trailing newline.
pub fn serialize(manifest: &SecretManifest) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(MANIFEST_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

// ─── Tests ─────────────────────────────────────────────────────
