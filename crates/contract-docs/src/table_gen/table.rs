use std::fmt::Write;

use crate::error::DocError;
use crate::registry::{network_name, NetworkRegistry};
use crate::table_gen::strip_blank_lines;

/// One table row: a contract's addresses on a single network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub network: String,
    pub address: String,
    pub legacy_addresses: Vec<String>,
}

/// Rows for one contract plus the table-wide legacy-column flag.
#[derive(Debug, Clone)]
pub struct TableData {
    pub rows: Vec<Row>,
    /// True iff any row has a non-empty legacy list. When set, every
    /// row renders a legacy cell, including rows whose own list is empty.
    pub has_legacy_addresses: bool,
}

/// Collect rows for `contract_name`, iterating networks in registry
/// order and skipping networks where the contract is absent.
///
/// # Errors
///
/// Returns [`DocError::UnknownNetwork`] if a network carrying the
/// contract has no display name, or [`DocError::MissingContract`] if no
/// network defines the contract at all.
pub fn collect_rows(
    registry: &NetworkRegistry,
    contract_name: &str,
) -> Result<TableData, DocError> {
    let mut rows = Vec::new();
    let mut has_legacy_addresses = false;

    for (id, network) in &registry.networks {
        let Some(contract) = network.contracts.get(contract_name) else {
            continue;
        };
        let name = network_name(id).ok_or_else(|| DocError::UnknownNetwork {
            id: id.clone(),
        })?;
        has_legacy_addresses = has_legacy_addresses || !contract.legacy_addresses.is_empty();

        rows.push(Row {
            network: name.to_string(),
            address: contract.address.clone(),
            legacy_addresses: contract.legacy_addresses.clone(),
        });
    }

    if rows.is_empty() {
        return Err(DocError::MissingContract {
            name: contract_name.to_string(),
        });
    }

    Ok(TableData {
        rows,
        has_legacy_addresses,
    })
}

/// Render a [`TableData`] as a markdown pipe table.
pub fn render_table(data: &TableData) -> String {
    let mut out = String::new();

    if data.has_legacy_addresses {
        let _ = writeln!(out, "| Network | Contract address | Legacy addresses |");
        let _ = writeln!(out, "|---------|------------------|------------------|");
        for row in &data.rows {
            let _ = writeln!(
                out,
                "| {} | `{}` | {} |",
                row.network,
                row.address,
                format_legacy(&row.legacy_addresses)
            );
        }
    } else {
        let _ = writeln!(out, "| Network | Contract address |");
        let _ = writeln!(out, "|---------|------------------|");
        for row in &data.rows {
            let _ = writeln!(out, "| {} | `{}` |", row.network, row.address);
        }
    }

    out
}

/// Render the complete fragment for one contract: heading plus table,
/// with blank lines stripped so the table parses. This is the content
/// written to `<contract>.md`.
pub fn contract_table(
    registry: &NetworkRegistry,
    contract_name: &str,
) -> Result<String, DocError> {
    let data = collect_rows(registry, contract_name)?;
    let mut out = String::new();
    let _ = writeln!(out, "## `{contract_name}`");
    out.push_str(&render_table(&data));
    Ok(strip_blank_lines(&out))
}

fn format_legacy(addresses: &[String]) -> String {
    addresses
        .iter()
        .map(|a| format!("`{a}`"))
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::parse_registry_str;

    fn two_network_registry() -> NetworkRegistry {
        parse_registry_str(
            r#"{
                "networks": {
                    "1": {
                        "contracts": {
                            "Registry": {"address": "0xAAA", "legacyAddresses": []}
                        }
                    },
                    "4": {
                        "contracts": {
                            "Registry": {"address": "0xBBB", "legacyAddresses": ["0xCCC"]}
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn rows_follow_registry_order() {
        let registry = two_network_registry();
        let data = collect_rows(&registry, "Registry").unwrap();
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0].network, "Mainnet");
        assert_eq!(data.rows[0].address, "0xAAA");
        assert_eq!(data.rows[1].network, "Rinkeby");
        assert_eq!(data.rows[1].address, "0xBBB");
    }

    #[test]
    fn absent_networks_are_skipped() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {"contracts": {"Registry": {"address": "0xAAA"}}},
                    "4": {"contracts": {"Resolver": {"address": "0xBBB"}}}
                }
            }"#,
        )
        .unwrap();
        let data = collect_rows(&registry, "Registry").unwrap();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0].network, "Mainnet");
    }

    #[test]
    fn legacy_flag_set_when_any_network_has_legacy() {
        let registry = two_network_registry();
        let data = collect_rows(&registry, "Registry").unwrap();
        assert!(data.has_legacy_addresses);
    }

    #[test]
    fn legacy_flag_unset_when_no_network_has_legacy() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {"contracts": {"Registry": {"address": "0xAAA"}}}
                }
            }"#,
        )
        .unwrap();
        let data = collect_rows(&registry, "Registry").unwrap();
        assert!(!data.has_legacy_addresses);
    }

    #[test]
    fn unknown_network_is_an_error() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "99": {"contracts": {"Registry": {"address": "0xAAA"}}}
                }
            }"#,
        )
        .unwrap();
        let result = collect_rows(&registry, "Registry");
        assert!(matches!(
            result,
            Err(DocError::UnknownNetwork { id }) if id == "99"
        ));
    }

    #[test]
    fn unknown_network_without_the_contract_does_not_error() {
        // The unknown network never contributes a row, so the fragment
        // for this contract is unaffected by it.
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {"contracts": {"Registry": {"address": "0xAAA"}}},
                    "99": {"contracts": {"Resolver": {"address": "0xBBB"}}}
                }
            }"#,
        )
        .unwrap();
        assert!(collect_rows(&registry, "Registry").is_ok());
    }

    #[test]
    fn missing_contract_is_an_error() {
        let registry = two_network_registry();
        let result = collect_rows(&registry, "Resolver");
        assert!(matches!(
            result,
            Err(DocError::MissingContract { name }) if name == "Resolver"
        ));
    }

    #[test]
    fn table_with_legacy_column() {
        let registry = two_network_registry();
        let data = collect_rows(&registry, "Registry").unwrap();
        let table = render_table(&data);

        assert!(table.contains("| Network | Contract address | Legacy addresses |"));
        assert!(table.contains("| Mainnet | `0xAAA` |  |"));
        assert!(table.contains("| Rinkeby | `0xBBB` | `0xCCC` |"));
    }

    #[test]
    fn table_without_legacy_column() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {"contracts": {"Registry": {"address": "0xAAA"}}}
                }
            }"#,
        )
        .unwrap();
        let data = collect_rows(&registry, "Registry").unwrap();
        let table = render_table(&data);

        assert!(table.contains("| Network | Contract address |"));
        assert!(!table.contains("Legacy addresses"));
        assert!(table.contains("| Mainnet | `0xAAA` |"));
    }

    #[test]
    fn multiple_legacy_addresses_joined() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {
                        "contracts": {
                            "Resolver": {
                                "address": "0xAAA",
                                "legacyAddresses": ["0xBBB", "0xCCC"]
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let data = collect_rows(&registry, "Resolver").unwrap();
        let table = render_table(&data);
        assert!(table.contains("`0xBBB`<br>`0xCCC`"));
    }

    #[test]
    fn fragment_has_heading_and_no_blank_lines() {
        let registry = two_network_registry();
        let fragment = contract_table(&registry, "Registry").unwrap();

        assert!(fragment.starts_with("## `Registry`"));
        for line in fragment.lines() {
            assert!(!line.trim().is_empty());
        }
        // Header immediately followed by the separator row.
        let lines: Vec<&str> = fragment.lines().collect();
        let header = lines
            .iter()
            .position(|l| l.starts_with("| Network"))
            .unwrap();
        assert!(lines[header + 1].starts_with("|---"));
    }
}
