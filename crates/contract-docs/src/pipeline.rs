//! End-to-end generation — registry to final document on disk.
//!
//! Renders one fragment per contract, writes the assembly manifest,
//! and compiles the final document. Straight-line and sequential; any
//! failure aborts the run.

use std::path::{Path, PathBuf};

use crate::error::DocError;
use crate::include::compile;
use crate::manifest::{save_manifest, Manifest};
use crate::registry::NetworkRegistry;
use crate::table_gen::contract_table;

/// Where the pipeline reads templates and writes artifacts. All paths
/// are relative to `base_dir` unless absolute.
#[derive(Debug, Clone)]
pub struct PipelinePaths {
    /// Directory receiving per-contract fragments.
    pub fragments_dir: PathBuf,
    /// Where the assembly manifest is written.
    pub manifest_path: PathBuf,
    /// The top-level template, spliced after all fragments.
    pub template_path: PathBuf,
    /// The final assembled document.
    pub build_path: PathBuf,
    /// Root against which relative paths (and `#include` targets) resolve.
    pub base_dir: PathBuf,
}

impl PipelinePaths {
    /// Conventional layout under a project root.
    pub fn with_base(base: &Path) -> Self {
        Self {
            fragments_dir: PathBuf::from("templates/contracts"),
            manifest_path: PathBuf::from("templates/markdown/cns-smart-contracts-markdown.json"),
            template_path: PathBuf::from("templates/cns-smart-contracts-template.md"),
            build_path: PathBuf::from("docs/cns-smart-contracts.md"),
            base_dir: base.to_path_buf(),
        }
    }
}

/// Manifest of files written by one pipeline run.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub files: Vec<GeneratedFile>,
}

/// A single file written by the pipeline.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the base directory.
    pub relative_path: PathBuf,
    /// Absolute path where the file was written.
    pub absolute_path: PathBuf,
    /// What kind of artifact this is.
    pub kind: ArtifactKind,
    /// Number of bytes written.
    pub bytes: usize,
}

/// The kind of generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Fragment,
    Manifest,
    Document,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fragment => write!(f, "fragment"),
            Self::Manifest => write!(f, "manifest"),
            Self::Document => write!(f, "document"),
        }
    }
}

/// Run the full pipeline: fragments, manifest, document.
///
/// Fragments are written in contract enumeration order but *prepended*
/// to the include list, so the most recently generated fragment is
/// spliced first and every fragment precedes the template.
///
/// # Errors
///
/// Propagates the first row-collection, include, or I/O failure.
pub fn generate_docs(
    registry: &NetworkRegistry,
    paths: &PipelinePaths,
) -> Result<GeneratedFiles, DocError> {
    let fragments_dir = paths.base_dir.join(&paths.fragments_dir);
    std::fs::create_dir_all(&fragments_dir)?;

    let mut files = Vec::new();
    let mut include_list: Vec<PathBuf> = Vec::new();

    for name in registry.contract_names() {
        let fragment = contract_table(registry, &name)?;
        let relative = paths.fragments_dir.join(format!("{name}.md"));
        let absolute = fragments_dir.join(format!("{name}.md"));
        std::fs::write(&absolute, &fragment)?;

        include_list.insert(0, relative.clone());
        files.push(GeneratedFile {
            relative_path: relative,
            absolute_path: absolute,
            kind: ArtifactKind::Fragment,
            bytes: fragment.len(),
        });
    }

    let manifest = Manifest::new(
        paths.build_path.clone(),
        include_list,
        paths.template_path.clone(),
    );
    let manifest_abs = paths.base_dir.join(&paths.manifest_path);
    if let Some(parent) = manifest_abs.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let manifest_bytes = save_manifest(&manifest, &manifest_abs)?;
    files.push(GeneratedFile {
        relative_path: paths.manifest_path.clone(),
        absolute_path: manifest_abs,
        kind: ArtifactKind::Manifest,
        bytes: manifest_bytes,
    });

    let document = compile(&manifest, &paths.base_dir)?;
    files.push(GeneratedFile {
        relative_path: paths.build_path.clone(),
        absolute_path: paths.base_dir.join(&paths.build_path),
        kind: ArtifactKind::Document,
        bytes: document.len(),
    });

    Ok(GeneratedFiles { files })
}
