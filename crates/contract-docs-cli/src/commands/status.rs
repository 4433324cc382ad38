use std::path::Path;

use contract_docs::registry::{network_name, parse_registry};

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let registry = parse_registry(path)?;
    let names = registry.contract_names();

    println!("Networks: {}", registry.networks.len());
    for id in registry.networks.keys() {
        match network_name(id) {
            Some(name) => println!("  {id}: {name}"),
            None => println!("  {id}: (no display name)"),
        }
    }

    println!("Contracts: {}", names.len());
    for name in &names {
        let mut deployments = 0;
        let mut legacy = 0;
        for id in registry.networks.keys() {
            if let Some(contract) = registry.contract(id, name) {
                deployments += 1;
                legacy += contract.legacy_addresses.len();
            }
        }
        println!("  {name}: {deployments} network(s), {legacy} legacy address(es)");
    }

    Ok(())
}
