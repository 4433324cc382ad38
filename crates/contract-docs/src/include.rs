//! Manifest-driven markdown assembly.
//!
//! Concatenates the manifest's files in order, replacing each
//! `#include "path"` directive with the referenced file's contents.
//! Include paths resolve against a base directory, so the manifest can
//! carry repo-relative paths.

use std::path::Path;

use crate::error::DocError;
use crate::manifest::Manifest;

/// Nested includes beyond this depth are treated as a cycle.
const MAX_INCLUDE_DEPTH: usize = 16;

/// Resolve every `#include "path"` directive in `content`.
///
/// Directives must occupy their own line. Included files are resolved
/// recursively against the same `base_dir`.
///
/// # Errors
///
/// Returns [`DocError::MissingInclude`] if a target does not exist and
/// [`DocError::IncludeCycle`] if nesting exceeds the depth limit.
pub fn resolve_includes(content: &str, base_dir: &Path) -> Result<String, DocError> {
    resolve_at_depth(content, base_dir, 0)
}

fn resolve_at_depth(content: &str, base_dir: &Path, depth: usize) -> Result<String, DocError> {
    let mut out = String::with_capacity(content.len());

    for line in content.lines() {
        match parse_include(line) {
            Some(relative) => {
                let target = base_dir.join(relative);
                if depth >= MAX_INCLUDE_DEPTH {
                    return Err(DocError::IncludeCycle { path: target });
                }
                if !target.is_file() {
                    return Err(DocError::MissingInclude { path: target });
                }
                let included = std::fs::read_to_string(&target)?;
                out.push_str(&resolve_at_depth(&included, base_dir, depth + 1)?);
            }
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    Ok(out)
}

/// Read, resolve, and concatenate the manifest's files in order, then
/// write the result to the manifest's build target. Returns the
/// assembled document.
///
/// # Errors
///
/// Any missing file, unresolvable include, or failed write aborts the
/// compilation.
pub fn compile(manifest: &Manifest, base_dir: &Path) -> Result<String, DocError> {
    let mut out = String::new();

    for file in &manifest.files {
        let path = base_dir.join(file);
        let content = std::fs::read_to_string(&path)?;
        out.push_str(&resolve_includes(&content, base_dir)?);
    }

    let build = base_dir.join(&manifest.build);
    if let Some(parent) = build.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&build, &out)?;

    Ok(out)
}

/// Match a `#include "path"` directive line. Returns the quoted path.
fn parse_include(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("#include")?.trim_start();
    let rest = rest.strip_prefix('"')?;
    let path = rest.strip_suffix('"')?;
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}
