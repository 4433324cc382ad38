use std::path::Path;

use crate::error::DocError;
use crate::registry::types::NetworkRegistry;

/// Parse a `network-config.json` registry file into a [`NetworkRegistry`].
///
/// # Errors
///
/// Returns [`DocError::Io`] if the file cannot be read,
/// or [`DocError::Json`] if the JSON is malformed.
pub fn parse_registry(path: &Path) -> Result<NetworkRegistry, DocError> {
    let content = std::fs::read_to_string(path)?;
    parse_registry_str(&content)
}

/// Parse a registry from a JSON string.
pub fn parse_registry_str(json: &str) -> Result<NetworkRegistry, DocError> {
    let registry: NetworkRegistry = serde_json::from_str(json)?;
    Ok(registry)
}
