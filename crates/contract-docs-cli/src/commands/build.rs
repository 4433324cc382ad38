use std::path::Path;

use contract_docs::error::Severity;
use contract_docs::pipeline::{generate_docs, PipelinePaths};
use contract_docs::registry::{parse_registry, validate_registry};

pub fn run(
    registry_path: &Path,
    base: &Path,
    fragments: Option<&Path>,
    template: Option<&Path>,
    manifest: Option<&Path>,
    doc: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = parse_registry(registry_path)?;

    let violations = validate_registry(&registry);
    for v in &violations {
        eprintln!("{v}");
    }
    let errors = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    if errors > 0 {
        return Err(format!("Registry has {errors} validation error(s)").into());
    }

    let mut paths = PipelinePaths::with_base(base);
    if let Some(p) = fragments {
        paths.fragments_dir = p.to_path_buf();
    }
    if let Some(p) = template {
        paths.template_path = p.to_path_buf();
    }
    if let Some(p) = manifest {
        paths.manifest_path = p.to_path_buf();
    }
    if let Some(p) = doc {
        paths.build_path = p.to_path_buf();
    }

    println!("Rendering [{}]", paths.build_path.display());
    println!("From template [{}]", paths.template_path.display());

    let result = generate_docs(&registry, &paths)?;

    println!("Generated {} file(s):", result.files.len());
    for f in &result.files {
        println!("  [{}] {} ({} bytes)", f.kind, f.relative_path.display(), f.bytes);
    }
    println!("Done");

    Ok(())
}
