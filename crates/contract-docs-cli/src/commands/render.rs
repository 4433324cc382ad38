use std::path::Path;

use contract_docs::registry::parse_registry;
use contract_docs::table_gen::contract_table;

pub fn run(
    registry_path: &Path,
    output_dir: &Path,
    only: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = parse_registry(registry_path)?;

    let names = match only {
        Some(name) => vec![name.to_string()],
        None => registry.contract_names(),
    };

    std::fs::create_dir_all(output_dir)?;

    for name in &names {
        let fragment = contract_table(&registry, name)?;
        let path = output_dir.join(format!("{name}.md"));
        std::fs::write(&path, &fragment)?;
        println!("Contract table saved: {}", path.display());
    }

    println!("Rendered {} contract table(s)", names.len());
    Ok(())
}
