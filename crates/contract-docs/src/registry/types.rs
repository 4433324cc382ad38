use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// The per-network smart-contract address registry.
///
/// This is the root type for `network-config.json`. The format is owned
/// by the upstream registry package, not by this tool. Maps are
/// [`IndexMap`] because the file's key order drives the row order of
/// every generated table; a sorted map would put network "42" before
/// network "5".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRegistry {
    pub networks: IndexMap<String, Network>,
}

/// One network's deployed contracts, keyed by contract name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub contracts: IndexMap<String, ContractInfo>,
}

/// Current and superseded addresses for one contract on one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    pub address: String,
    #[serde(default)]
    pub legacy_addresses: Vec<String>,
}

/// Display name for a known network id.
///
/// The set of known ids is closed. A registry entry with an id outside
/// this table is reported as an error rather than woven into the output
/// with a missing name.
pub fn network_name(id: &str) -> Option<&'static str> {
    match id {
        "1" => Some("Mainnet"),
        "3" => Some("Ropsten"),
        "4" => Some("Rinkeby"),
        "5" => Some("Goerli"),
        "42" => Some("Kovan"),
        _ => None,
    }
}

impl NetworkRegistry {
    /// Distinct contract names across all networks, in first-seen
    /// registry order. Computed once up front; this is the iteration
    /// domain for table generation.
    pub fn contract_names(&self) -> Vec<String> {
        let mut names: IndexSet<&str> = IndexSet::new();
        for network in self.networks.values() {
            for name in network.contracts.keys() {
                names.insert(name);
            }
        }
        names.into_iter().map(str::to_string).collect()
    }

    /// Look up one contract on one network.
    pub fn contract(&self, network_id: &str, name: &str) -> Option<&ContractInfo> {
        self.networks.get(network_id)?.contracts.get(name)
    }
}
