//! Evraz Branding Core
//!
//! Branding and network profile configuration for the Evraz web wallet.
//!
//! ## Architecture
//!
//! - **Core**: network profile resolution and the active network handle
//! - **Domain**: network classification, market pairs, per-network
//!   bundles, static branding, gateway allow-list, chain id source trait
//! - **Infrastructure**: environment configuration
//! - **Shared**: literal tables, common types, errors, and utilities
//!
//! Only the exact mainnet chain id resolves to the production profile.
//! Every other chain id, including malformed ones, gets the testnet
//! profile.
//!
//! ## Usage
//!
//! ```rust
//! use evraz_branding_core::{MarketPair, NetworkProfileResolver};
//!
//! let profile = NetworkProfileResolver::new("deadbeef");
//! assert!(!profile.is_primary());
//! assert_eq!(profile.default_units(), &["TEST"]);
//! assert_eq!(profile.default_market(), MarketPair::new("TEST", "USD"));
//! assert!(profile.asset_namespaces().is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use crate::domain::repositories::ChainIdProvider;
use crate::infrastructure::BrandingConfig;
use crate::shared::error::BrandingError;

// Re-export main components
pub use crate::core::resolver::{classify_network, NetworkProfileResolver, ProfileSnapshot};
pub use crate::core::session::ActiveNetwork;

// Re-export domain entities
pub use crate::domain::entities::{
    allowed_gateway, Branding, ConfigBundle, GatewayAllowList, MarketPair, NetworkClassification,
};
pub use crate::domain::repositories::StaticChainIdProvider;

// Re-export shared types
pub use shared::types::{ChainIdentifier, ConfigurationAsset, Faucet, LoginMethod, Theme};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// Feature flags
#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export FFI functions when feature is enabled
#[cfg(feature = "ffi")]
pub use ffi::*;

/// Initialize logging at `level`; `RUST_LOG` takes precedence when set
pub fn init_logging(level: &str) -> Result<(), BrandingError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init()
        .map_err(|e| BrandingError::internal(format!("Logger already initialized: {}", e)))
}

/// Load configuration and initialize logging
pub fn init() -> Result<BrandingConfig, BrandingError> {
    let config = BrandingConfig::from_env()?;
    init_logging(&config.log_level)?;
    log::info!("{} {} initialized", NAME, VERSION);
    Ok(config)
}

/// Initialize the branding core with configuration from .env or safe defaults
pub async fn init_branding_core() -> Result<BrandingCore, BrandingError> {
    let config = BrandingConfig::from_env()?;
    BrandingCore::with_config(config).await
}

/// Entry point bundling configuration with the active network profile
pub struct BrandingCore {
    pub config: BrandingConfig,
    pub network: ActiveNetwork,
}

impl BrandingCore {
    pub async fn with_config(config: BrandingConfig) -> Result<Self, BrandingError> {
        let network = ActiveNetwork::from_provider(&config.chain_id_provider()).await?;
        Ok(Self { config, network })
    }

    /// Profile of the current connection
    pub async fn profile(&self) -> std::sync::Arc<NetworkProfileResolver> {
        self.network.snapshot().await
    }

    /// Re-read the chain id after a reconnect
    pub async fn refresh(&self, provider: &dyn ChainIdProvider) -> Result<bool, BrandingError> {
        self.network.refresh_from(provider).await
    }

    pub fn allowed_gateway(&self, gateway: Option<&str>) -> bool {
        GatewayAllowList::allowed_gateway(gateway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{MAINNET_CHAIN_ID, TESTNET_CHAIN_ID};

    #[test]
    fn test_branding_core_defaults_to_testnet() {
        let core = tokio_test::block_on(BrandingCore::with_config(BrandingConfig::default()))
            .expect("Failed to initialize branding core");
        let profile = tokio_test::block_on(core.profile());
        assert_eq!(profile.chain_id().as_str(), TESTNET_CHAIN_ID);
        assert_eq!(profile.default_units(), &["TEST"]);
    }

    #[tokio::test]
    async fn test_branding_core_refresh() {
        let core = BrandingCore::with_config(BrandingConfig::default())
            .await
            .expect("Failed to initialize branding core");
        let changed = core
            .refresh(&StaticChainIdProvider::new(MAINNET_CHAIN_ID))
            .await
            .expect("Refresh failed");
        assert!(changed);
        assert!(core.profile().await.is_primary());
        assert!(core.allowed_gateway(None));
        assert!(!core.allowed_gateway(Some("NONEXISTENT")));
    }

    #[test]
    fn test_version_information() {
        assert_eq!(NAME, "evraz-branding-core");
        assert!(!VERSION.is_empty());
    }
}
