use serde::{Deserialize, Serialize};

fn default_check_connectivity() -> bool {
    true
}

fn default_connectivity_timeout_ms() -> u64 {
    1500
}

/// Reachability check done before each translation request
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// When false the app assumes it is always online
    #[serde(default = "default_check_connectivity")]
    pub check_connectivity: bool,
    #[serde(default = "default_connectivity_timeout_ms")]
    pub connectivity_timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            check_connectivity: default_check_connectivity(),
            connectivity_timeout_ms: default_connectivity_timeout_ms(),
        }
    }
}
