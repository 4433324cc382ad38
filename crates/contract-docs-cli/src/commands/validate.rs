use std::path::Path;

use contract_docs::error::Severity;
use contract_docs::registry::{parse_registry, validate_registry};

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let registry = parse_registry(path)?;
    let violations = validate_registry(&registry);

    let errors: Vec<_> = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .collect();
    let warnings: Vec<_> = violations
        .iter()
        .filter(|v| v.severity == Severity::Warning)
        .collect();

    for v in &violations {
        println!("{v}");
    }

    println!("\n{} error(s), {} warning(s)", errors.len(), warnings.len());

    if errors.is_empty() {
        println!("Registry is valid.");
        Ok(())
    } else {
        Err(format!("Registry has {} validation error(s)", errors.len()).into())
    }
}
