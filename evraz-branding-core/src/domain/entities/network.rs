//! Network classification for the branding core

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::constants::MAINNET_CHAIN_ID;
use crate::shared::types::ChainIdentifier;

/// Which kind of network the wallet is connected to.
///
/// Only the exact mainnet chain id is `Primary`. Anything else, whether a
/// known testnet, a private chain or garbage, is `Alternate`, so an
/// unrecognized network is never treated as production.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NetworkClassification {
    Primary,
    Alternate,
}

impl NetworkClassification {
    pub fn classify(chain_id: &ChainIdentifier) -> Self {
        Self::classify_str(chain_id.as_str())
    }

    pub fn classify_str(chain_id: &str) -> Self {
        if chain_id == MAINNET_CHAIN_ID {
            NetworkClassification::Primary
        } else {
            NetworkClassification::Alternate
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, NetworkClassification::Primary)
    }

    pub fn is_testnet(&self) -> bool {
        !self.is_primary()
    }

    pub fn name(&self) -> &'static str {
        match self {
            NetworkClassification::Primary => "mainnet",
            NetworkClassification::Alternate => "testnet",
        }
    }
}

impl fmt::Display for NetworkClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::TESTNET_CHAIN_ID;
    use proptest::prelude::*;

    #[test]
    fn test_mainnet_is_primary() {
        let id = ChainIdentifier::from(MAINNET_CHAIN_ID);
        assert_eq!(NetworkClassification::classify(&id), NetworkClassification::Primary);
        assert!(NetworkClassification::classify(&id).is_primary());
    }

    #[test]
    fn test_testnet_and_unknown_are_alternate() {
        for id in [TESTNET_CHAIN_ID, "deadbeef", "", "not a chain id"] {
            assert_eq!(
                NetworkClassification::classify_str(id),
                NetworkClassification::Alternate,
                "{id:?} must not be treated as mainnet"
            );
        }
    }

    #[test]
    fn test_near_misses_are_alternate() {
        let upper = MAINNET_CHAIN_ID.to_uppercase();
        let padded = format!(" {} ", MAINNET_CHAIN_ID);
        let prefix = &MAINNET_CHAIN_ID[..32];
        let extended = format!("{}00", MAINNET_CHAIN_ID);
        for id in [upper.as_str(), padded.as_str(), prefix, extended.as_str()] {
            assert!(NetworkClassification::classify_str(id).is_testnet());
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(NetworkClassification::Primary.to_string(), "mainnet");
        assert_eq!(NetworkClassification::Alternate.to_string(), "testnet");
    }

    proptest! {
        #[test]
        fn prop_anything_but_mainnet_is_alternate(id in ".*") {
            prop_assume!(id != MAINNET_CHAIN_ID);
            prop_assert_eq!(NetworkClassification::classify_str(&id), NetworkClassification::Alternate);
        }

        #[test]
        fn prop_hex_ids_other_than_mainnet_are_alternate(id in "[0-9a-f]{64}") {
            prop_assume!(id != MAINNET_CHAIN_ID);
            prop_assert!(NetworkClassification::classify_str(&id).is_testnet());
        }

        #[test]
        fn prop_classification_is_deterministic(id in ".*") {
            let chain_id = ChainIdentifier::new(id);
            let first = NetworkClassification::classify(&chain_id);
            let second = NetworkClassification::classify(&chain_id.clone());
            prop_assert_eq!(first, second);
        }
    }
}
