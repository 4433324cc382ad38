//! The assembly manifest — the intermediate artifact between table
//! generation and document compilation.
//!
//! Lists the final build target plus the ordered files to splice:
//! every contract fragment (most recently generated first) ahead of
//! the top-level template.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DocError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Path of the final assembled document.
    pub build: PathBuf,
    /// Files to concatenate, in order. Fragments precede the template.
    pub files: Vec<PathBuf>,
}

impl Manifest {
    /// Build a manifest from fragments already in include order, with
    /// the top-level template appended last.
    pub fn new(build: PathBuf, fragments: Vec<PathBuf>, template: PathBuf) -> Self {
        let mut files = fragments;
        files.push(template);
        Self { build, files }
    }
}

/// Write the manifest as pretty-printed JSON. Returns the number of
/// bytes written.
///
/// # Errors
///
/// Returns [`DocError::Io`] if the write fails.
pub fn save_manifest(manifest: &Manifest, path: &Path) -> Result<usize, DocError> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, &json)?;
    Ok(json.len())
}

/// Read a manifest back from disk.
pub fn load_manifest(path: &Path) -> Result<Manifest, DocError> {
    let content = std::fs::read_to_string(path)?;
    let manifest: Manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}
