//! Process configuration
//!
//! Values come from the environment, after loading `.env` when present.
//! Without `BRANDING_CHAIN_ID` the testnet id is used, so an unconfigured
//! process never presents itself as production.

use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

use crate::domain::repositories::StaticChainIdProvider;
use crate::shared::constants::{
    DEFAULT_LOG_LEVEL, ENV_CHAIN_ID, ENV_LOG_LEVEL, LOG_LEVELS, TESTNET_CHAIN_ID,
};
use crate::shared::error::BrandingError;
use crate::shared::types::ChainIdentifier;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandingConfig {
    pub chain_id: ChainIdentifier,
    pub log_level: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            chain_id: ChainIdentifier::from(TESTNET_CHAIN_ID),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BrandingConfig {
    /// Load from `.env` and the process environment
    pub fn from_env() -> Result<Self, BrandingError> {
        dotenv().ok();
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(BrandingError::config(format!("{}: {}", key, e))),
        })
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BrandingError>
    where
        F: Fn(&str) -> Result<Option<String>, BrandingError>,
    {
        let defaults = Self::default();
        let chain_id = lookup(ENV_CHAIN_ID)?
            .map(ChainIdentifier::from)
            .unwrap_or(defaults.chain_id);
        let log_level = lookup(ENV_LOG_LEVEL)?
            .map(|level| level.trim().to_lowercase())
            .unwrap_or(defaults.log_level);

        let config = Self { chain_id, log_level };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BrandingError> {
        if self.log_level.is_empty() {
            return Err(BrandingError::config(format!("{} must not be empty", ENV_LOG_LEVEL)));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(BrandingError::config(format!(
                "{} must be one of {:?}, got {:?}",
                ENV_LOG_LEVEL, LOG_LEVELS, self.log_level
            )));
        }
        if !self.chain_id.is_well_formed() {
            log::warn!("{} is not a 64 character hex digest", ENV_CHAIN_ID);
        }
        Ok(())
    }

    /// Chain id source backed by the configured value
    pub fn chain_id_provider(&self) -> StaticChainIdProvider {
        StaticChainIdProvider::new(self.chain_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::ChainIdProvider;
    use crate::shared::constants::MAINNET_CHAIN_ID;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<Option<String>, BrandingError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| Ok(map.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_testnet() {
        let config = BrandingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BrandingConfig::default());
        assert_eq!(config.chain_id.as_str(), TESTNET_CHAIN_ID);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_reads_values() {
        let config = BrandingConfig::from_lookup(lookup_from(&[
            (ENV_CHAIN_ID, MAINNET_CHAIN_ID),
            (ENV_LOG_LEVEL, " DEBUG "),
        ]))
        .unwrap();
        assert_eq!(config.chain_id.as_str(), MAINNET_CHAIN_ID);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_chain_id_is_accepted() {
        let config =
            BrandingConfig::from_lookup(lookup_from(&[(ENV_CHAIN_ID, "not-hex")])).unwrap();
        assert_eq!(config.chain_id.as_str(), "not-hex");
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let err = BrandingConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert!(matches!(err, BrandingError::Config(_)));

        let err = BrandingConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  ")])).unwrap_err();
        assert!(matches!(err, BrandingError::Config(_)));
    }

    #[test]
    fn test_lookup_errors_propagate() {
        let err = BrandingConfig::from_lookup(|_| Err(BrandingError::config("unreadable"))).unwrap_err();
        assert_eq!(err, BrandingError::config("unreadable"));
    }

    #[tokio::test]
    async fn test_chain_id_provider() {
        let config = BrandingConfig {
            chain_id: ChainIdentifier::from(MAINNET_CHAIN_ID),
            ..BrandingConfig::default()
        };
        let provider = config.chain_id_provider();
        assert_eq!(provider.chain_id().await.unwrap().as_str(), MAINNET_CHAIN_ID);
    }
}
