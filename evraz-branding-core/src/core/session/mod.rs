//! Active network tracking
//!
//! Holds the resolver for the chain the wallet is currently connected to
//! and swaps it as a whole when the connection moves to another chain.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::resolver::NetworkProfileResolver;
use crate::domain::entities::NetworkClassification;
use crate::domain::repositories::ChainIdProvider;
use crate::shared::error::BrandingError;
use crate::shared::types::ChainIdentifier;
use crate::shared::utils::short_chain_id;

/// Shared handle to the current network profile.
///
/// Readers take a [`snapshot`](Self::snapshot) and query it; a concurrent
/// switch replaces the whole resolver, so one snapshot always describes a
/// single network.
#[derive(Clone)]
pub struct ActiveNetwork {
    current: Arc<RwLock<Arc<NetworkProfileResolver>>>,
}

impl ActiveNetwork {
    pub fn new(chain_id: impl Into<ChainIdentifier>) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(NetworkProfileResolver::new(chain_id)))),
        }
    }

    /// Resolve the chain id reported by `provider`
    pub async fn from_provider(provider: &dyn ChainIdProvider) -> Result<Self, BrandingError> {
        let chain_id = provider.chain_id().await?;
        Ok(Self::new(chain_id))
    }

    pub async fn snapshot(&self) -> Arc<NetworkProfileResolver> {
        Arc::clone(&*self.current.read().await)
    }

    pub async fn classification(&self) -> NetworkClassification {
        self.current.read().await.classification()
    }

    /// Switch to `chain_id`. Returns true when the classification changed.
    pub async fn update(&self, chain_id: impl Into<ChainIdentifier>) -> bool {
        let chain_id = chain_id.into();
        let mut current = self.current.write().await;
        if current.chain_id() == &chain_id {
            return false;
        }

        let previous = current.classification();
        let next = Arc::new(NetworkProfileResolver::new(chain_id));
        let changed = previous != next.classification();
        if changed {
            log::info!(
                "Network switched from {} to {} (chain {})",
                previous,
                next.classification(),
                short_chain_id(next.chain_id().as_str())
            );
        }
        *current = next;
        changed
    }

    /// Re-read the chain id from `provider`.
    ///
    /// On error the current profile is kept and the error is returned.
    pub async fn refresh_from(&self, provider: &dyn ChainIdProvider) -> Result<bool, BrandingError> {
        match provider.chain_id().await {
            Ok(chain_id) => Ok(self.update(chain_id).await),
            Err(e) => {
                log::warn!("Keeping current network profile, chain id lookup failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockChainIdProvider, StaticChainIdProvider};
    use crate::shared::constants::{MAINNET_CHAIN_ID, TESTNET_CHAIN_ID};

    #[tokio::test]
    async fn test_snapshot_reflects_initial_chain() {
        let active = ActiveNetwork::new(MAINNET_CHAIN_ID);
        let snapshot = active.snapshot().await;
        assert!(snapshot.is_primary());
        assert_eq!(snapshot.default_units().len(), 8);
        assert_eq!(active.classification().await, NetworkClassification::Primary);
    }

    #[tokio::test]
    async fn test_update_reports_classification_changes() {
        let active = ActiveNetwork::new(TESTNET_CHAIN_ID);
        assert!(!active.update(TESTNET_CHAIN_ID).await);
        assert!(!active.update("deadbeef").await);
        assert_eq!(active.snapshot().await.chain_id().as_str(), "deadbeef");
        assert!(active.update(MAINNET_CHAIN_ID).await);
        assert!(active.snapshot().await.is_primary());
        assert!(active.update("").await);
        assert_eq!(active.classification().await, NetworkClassification::Alternate);
    }

    #[tokio::test]
    async fn test_old_snapshot_survives_switch() {
        let active = ActiveNetwork::new(MAINNET_CHAIN_ID);
        let before = active.snapshot().await;
        active.update("deadbeef").await;

        assert!(before.is_primary());
        assert_eq!(before.default_units().len(), 8);
        assert_eq!(before.asset_namespaces().len(), 4);
        assert!(!active.snapshot().await.is_primary());
    }

    #[tokio::test]
    async fn test_from_provider() {
        let provider = StaticChainIdProvider::new(MAINNET_CHAIN_ID);
        let active = ActiveNetwork::from_provider(&provider).await.unwrap();
        assert!(active.snapshot().await.is_primary());

        let mut failing = MockChainIdProvider::new();
        failing
            .expect_chain_id()
            .returning(|| Err(BrandingError::network("handshake failed")));
        assert!(ActiveNetwork::from_provider(&failing).await.is_err());
    }

    #[tokio::test]
    async fn test_refresh_keeps_profile_on_error() {
        let active = ActiveNetwork::new(MAINNET_CHAIN_ID);
        let mut provider = MockChainIdProvider::new();
        provider
            .expect_chain_id()
            .times(1)
            .returning(|| Err(BrandingError::network("socket closed")));

        let err = active.refresh_from(&provider).await.unwrap_err();
        assert!(matches!(err, BrandingError::Network(_)));
        assert!(active.snapshot().await.is_primary());
    }

    #[tokio::test]
    async fn test_refresh_switches_network() {
        let active = ActiveNetwork::new(MAINNET_CHAIN_ID);
        let mut provider = MockChainIdProvider::new();
        provider
            .expect_chain_id()
            .times(1)
            .returning(|| Ok(ChainIdentifier::from(TESTNET_CHAIN_ID)));

        assert!(active.refresh_from(&provider).await.unwrap());
        let snapshot = active.snapshot().await;
        assert_eq!(snapshot.default_units(), &["TEST"]);
        assert!(snapshot.asset_namespaces().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_readers_see_whole_profiles() {
        let active = ActiveNetwork::new(MAINNET_CHAIN_ID);
        let mut tasks = Vec::new();
        for i in 0..16 {
            let active = active.clone();
            tasks.push(tokio::spawn(async move {
                if i % 4 == 0 {
                    let id = if i % 8 == 0 { TESTNET_CHAIN_ID } else { MAINNET_CHAIN_ID };
                    active.update(id).await;
                }
                let snapshot = active.snapshot().await;
                let units = snapshot.default_units().len();
                let namespaces = snapshot.asset_namespaces().len();
                (snapshot.is_primary(), units, namespaces)
            }));
        }
        for task in tasks {
            let (primary, units, namespaces) = task.await.unwrap();
            if primary {
                assert_eq!((units, namespaces), (8, 4));
            } else {
                assert_eq!((units, namespaces), (1, 0));
            }
        }
    }
}
