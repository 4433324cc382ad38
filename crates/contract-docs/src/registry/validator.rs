use std::collections::HashSet;

use crate::error::{Severity, Violation};
use crate::registry::types::{network_name, NetworkRegistry};

/// Validate a parsed registry for consistency.
///
/// Returns a list of violations. If any violation has
/// [`Severity::Error`], the registry should not be rendered.
pub fn validate_registry(registry: &NetworkRegistry) -> Vec<Violation> {
    let mut violations = Vec::new();

    validate_network_ids(registry, &mut violations);
    validate_addresses(registry, &mut violations);
    validate_legacy_addresses(registry, &mut violations);
    validate_network_contents(registry, &mut violations);

    violations
}

fn validate_network_ids(registry: &NetworkRegistry, violations: &mut Vec<Violation>) {
    for id in registry.networks.keys() {
        if network_name(id).is_none() {
            violations.push(Violation {
                severity: Severity::Error,
                rule: "REG-001".to_string(),
                message: format!(
                    "network id {id} has no display name — \
                     rendering it would produce a row with no network label"
                ),
                location: Some(format!("networks.{id}")),
            });
        }
    }
}

fn validate_addresses(registry: &NetworkRegistry, violations: &mut Vec<Violation>) {
    for (id, network) in &registry.networks {
        for (name, contract) in &network.contracts {
            if contract.address.is_empty() {
                violations.push(Violation {
                    severity: Severity::Error,
                    rule: "REG-002".to_string(),
                    message: format!("contract {name} on network {id} has an empty address"),
                    location: Some(format!("networks.{id}.contracts.{name}.address")),
                });
            } else if !is_hex_address(&contract.address) {
                violations.push(Violation {
                    severity: Severity::Warning,
                    rule: "REG-003".to_string(),
                    message: format!(
                        "contract {name} on network {id} has a non-standard address: {}",
                        contract.address
                    ),
                    location: Some(format!("networks.{id}.contracts.{name}.address")),
                });
            }
        }
    }
}

fn validate_legacy_addresses(registry: &NetworkRegistry, violations: &mut Vec<Violation>) {
    for (id, network) in &registry.networks {
        for (name, contract) in &network.contracts {
            let mut seen = HashSet::new();
            for legacy in &contract.legacy_addresses {
                if !seen.insert(legacy.to_lowercase()) {
                    violations.push(Violation {
                        severity: Severity::Warning,
                        rule: "REG-004".to_string(),
                        message: format!(
                            "contract {name} on network {id} lists legacy address {legacy} twice"
                        ),
                        location: Some(format!(
                            "networks.{id}.contracts.{name}.legacyAddresses"
                        )),
                    });
                }
            }
        }
    }
}

fn validate_network_contents(registry: &NetworkRegistry, violations: &mut Vec<Violation>) {
    for (id, network) in &registry.networks {
        if network.contracts.is_empty() {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "REG-005".to_string(),
                message: format!("network {id} defines no contracts"),
                location: Some(format!("networks.{id}.contracts")),
            });
        }
    }
}

/// `0x` followed by exactly 40 hex digits.
fn is_hex_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::parse_registry_str;

    fn errors(violations: &[Violation]) -> Vec<&Violation> {
        violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .collect()
    }

    #[test]
    fn clean_registry_has_no_violations() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {
                        "contracts": {
                            "Registry": {
                                "address": "0xD1E5b0FF1287aA9f9A268759062E4Ab08b9Dacbe"
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        assert!(validate_registry(&registry).is_empty());
    }

    #[test]
    fn unknown_network_id_is_an_error() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "99": {
                        "contracts": {
                            "Registry": {
                                "address": "0xD1E5b0FF1287aA9f9A268759062E4Ab08b9Dacbe"
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let violations = validate_registry(&registry);
        let errs = errors(&violations);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].rule, "REG-001");
        assert!(errs[0].message.contains("99"));
    }

    #[test]
    fn empty_address_is_an_error() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {"contracts": {"Registry": {"address": ""}}}
                }
            }"#,
        )
        .unwrap();
        let violations = validate_registry(&registry);
        assert!(errors(&violations).iter().any(|v| v.rule == "REG-002"));
    }

    #[test]
    fn short_address_is_a_warning() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {"contracts": {"Registry": {"address": "0xAAA"}}}
                }
            }"#,
        )
        .unwrap();
        let violations = validate_registry(&registry);
        assert!(errors(&violations).is_empty());
        assert!(violations.iter().any(|v| v.rule == "REG-003"));
    }

    #[test]
    fn duplicate_legacy_address_is_a_warning() {
        let registry = parse_registry_str(
            r#"{
                "networks": {
                    "1": {
                        "contracts": {
                            "Resolver": {
                                "address": "0xb66DcE2DA6afAAa98F2013446dBCB0f4B0ab2842",
                                "legacyAddresses": ["0xAAA", "0xaaa"]
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let violations = validate_registry(&registry);
        assert!(violations.iter().any(|v| v.rule == "REG-004"));
    }

    #[test]
    fn empty_network_is_a_warning() {
        let registry = parse_registry_str(r#"{"networks": {"1": {"contracts": {}}}}"#).unwrap();
        let violations = validate_registry(&registry);
        assert!(errors(&violations).is_empty());
        assert!(violations.iter().any(|v| v.rule == "REG-005"));
    }

    #[test]
    fn hex_address_check() {
        assert!(is_hex_address("0xD1E5b0FF1287aA9f9A268759062E4Ab08b9Dacbe"));
        assert!(!is_hex_address("D1E5b0FF1287aA9f9A268759062E4Ab08b9Dacbe"));
        assert!(!is_hex_address("0xD1E5"));
        assert!(!is_hex_address("0xZZZ5b0FF1287aA9f9A268759062E4Ab08b9Dacbe"));
    }
}
