//! Chain id source
//!
//! The chain id comes from whatever owns the node connection. The branding
//! core only defines the seam it is read through.

use async_trait::async_trait;

use crate::shared::error::BrandingError;
use crate::shared::types::ChainIdentifier;

/// Source of the chain id of the connected node
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainIdProvider: Send + Sync {
    /// Chain id reported by the current connection
    async fn chain_id(&self) -> Result<ChainIdentifier, BrandingError>;
}

/// Provider that always reports the same chain id
#[derive(Debug, Clone)]
pub struct StaticChainIdProvider {
    chain_id: ChainIdentifier,
}

impl StaticChainIdProvider {
    pub fn new(chain_id: impl Into<ChainIdentifier>) -> Self {
        Self {
            chain_id: chain_id.into(),
        }
    }
}

#[async_trait]
impl ChainIdProvider for StaticChainIdProvider {
    async fn chain_id(&self) -> Result<ChainIdentifier, BrandingError> {
        Ok(self.chain_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_its_id() {
        let provider = StaticChainIdProvider::new("deadbeef");
        assert_eq!(provider.chain_id().await.unwrap().as_str(), "deadbeef");
        assert_eq!(provider.chain_id().await.unwrap().as_str(), "deadbeef");
    }

    #[tokio::test]
    async fn test_mock_provider_propagates_errors() {
        let mut provider = MockChainIdProvider::new();
        provider
            .expect_chain_id()
            .times(1)
            .returning(|| Err(BrandingError::network("node unreachable")));

        let err = provider.chain_id().await.unwrap_err();
        assert_eq!(err, BrandingError::network("node unreachable"));
    }
}
