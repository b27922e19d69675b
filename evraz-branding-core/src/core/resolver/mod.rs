//! Network profile resolution
//!
//! A [`NetworkProfileResolver`] is built from the chain id of the connected
//! node. It classifies the network once, picks the matching
//! [`ConfigBundle`] and answers every network dependent question from that
//! bundle, so two getters on the same resolver can never disagree about
//! which network they describe.

use serde::Serialize;

use crate::domain::entities::{
    filter_by_base, Branding, ConfigBundle, GatewayAllowList, MarketPair, NetworkClassification,
};
use crate::shared::constants::CONFIGURATION_ASSET_EXPLANATION;
use crate::shared::error::BrandingError;
use crate::shared::types::{
    AssetNamespace, AssetSymbol, ChainIdentifier, ConfigurationAsset, Faucet, GatewayId,
    LoginMethod, Theme,
};
use crate::shared::utils::{flatten_groups, short_chain_id};

/// Classify a chain id. Pure and total: only the mainnet id is `Primary`.
pub fn classify_network(chain_id: &ChainIdentifier) -> NetworkClassification {
    NetworkClassification::classify(chain_id)
}

/// Network dependent configuration for one chain id
#[derive(Debug, Clone)]
pub struct NetworkProfileResolver {
    chain_id: ChainIdentifier,
    classification: NetworkClassification,
    bundle: &'static ConfigBundle,
}

impl NetworkProfileResolver {
    pub fn new(chain_id: impl Into<ChainIdentifier>) -> Self {
        let chain_id = chain_id.into();
        if !chain_id.is_well_formed() {
            log::warn!(
                "Chain id {:?} is not a 64 character hex digest, treating it as testnet",
                short_chain_id(chain_id.as_str())
            );
        }
        let classification = classify_network(&chain_id);
        log::debug!(
            "Resolved chain {} as {}",
            short_chain_id(chain_id.as_str()),
            classification
        );
        Self {
            chain_id,
            classification,
            bundle: ConfigBundle::for_classification(classification),
        }
    }

    pub fn chain_id(&self) -> &ChainIdentifier {
        &self.chain_id
    }

    pub fn classification(&self) -> NetworkClassification {
        self.classification
    }

    pub fn is_primary(&self) -> bool {
        self.classification.is_primary()
    }

    pub fn bundle(&self) -> &'static ConfigBundle {
        self.bundle
    }

    /// Units offered by the UI's unit selector
    pub fn default_units(&self) -> &'static [AssetSymbol] {
        self.bundle.units
    }

    pub fn default_market(&self) -> MarketPair {
        MarketPair::from(self.bundle.default_market)
    }

    /// Default market in `QUOTE_BASE` route form
    pub fn default_market_id(&self) -> String {
        self.default_market().market_id()
    }

    /// Bases highlighted in "My Markets"
    pub fn my_markets_bases(&self) -> &'static [AssetSymbol] {
        self.bundle.market_bases
    }

    /// Quotes shown after selecting a base
    pub fn my_markets_quotes(&self) -> Vec<AssetSymbol> {
        flatten_groups(self.bundle.market_quote_groups)
    }

    /// Featured landing page markets.
    ///
    /// With an empty filter every pair is returned; otherwise only pairs
    /// whose base is listed, in their original order.
    pub fn featured_market_pairs<S: AsRef<str>>(&self, filter_quotes: &[S]) -> Vec<MarketPair> {
        filter_by_base(self.bundle.featured_markets, filter_quotes)
    }

    /// Recognized asset namespaces; empty off mainnet
    pub fn asset_namespaces(&self) -> &'static [AssetNamespace] {
        self.bundle.asset_namespaces
    }

    pub fn configuration_asset(&self) -> ConfigurationAsset {
        ConfigurationAsset {
            symbol: self.bundle.configuration_asset,
            explanation: CONFIGURATION_ASSET_EXPLANATION,
        }
    }

    /// Registration faucet; the same on every network
    pub fn faucet(&self) -> Faucet {
        Branding::faucet()
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            wallet_name: Branding::wallet_name(),
            wallet_url: Branding::wallet_url(),
            logo: Branding::logo(),
            small_logo: Branding::small_logo(),
            hive_news_tag: Branding::hive_news_tag(),
            default_theme: Branding::default_theme(),
            default_login: Branding::default_login(),
            allowed_logins: Branding::allowed_logins(),
            chain_id: self.chain_id.clone(),
            network: self.classification,
            units: self.default_units(),
            default_market: self.default_market(),
            market_bases: self.my_markets_bases(),
            market_quotes: self.my_markets_quotes(),
            featured_markets: self.featured_market_pairs::<&str>(&[]),
            asset_namespaces: self.asset_namespaces(),
            asset_hide_namespaces: Branding::asset_hide_namespaces(),
            allowed_gateways: GatewayAllowList::gateways(),
            configuration_asset: self.configuration_asset(),
            faucet: self.faucet(),
        }
    }
}

/// Every resolved value for one chain id, ready to hand to a UI
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSnapshot {
    pub wallet_name: &'static str,
    pub wallet_url: &'static str,
    pub logo: &'static str,
    pub small_logo: &'static str,
    pub hive_news_tag: &'static str,
    pub default_theme: Theme,
    pub default_login: LoginMethod,
    pub allowed_logins: &'static [LoginMethod],
    pub chain_id: ChainIdentifier,
    pub network: NetworkClassification,
    pub units: &'static [AssetSymbol],
    pub default_market: MarketPair,
    pub market_bases: &'static [AssetSymbol],
    pub market_quotes: Vec<AssetSymbol>,
    pub featured_markets: Vec<MarketPair>,
    pub asset_namespaces: &'static [AssetNamespace],
    pub asset_hide_namespaces: &'static [AssetNamespace],
    pub allowed_gateways: &'static [GatewayId],
    pub configuration_asset: ConfigurationAsset,
    pub faucet: Faucet,
}

impl ProfileSnapshot {
    pub fn to_json(&self) -> Result<String, BrandingError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, BrandingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
