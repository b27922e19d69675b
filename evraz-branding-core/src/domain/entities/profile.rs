//! Network dependent configuration bundles
//!
//! One immutable bundle per [`NetworkClassification`]. Resolvers pick a
//! bundle once and read every field from it.

use crate::domain::entities::network::NetworkClassification;
use crate::shared::constants::*;
use crate::shared::types::{AssetNamespace, AssetSymbol};

#[derive(Debug)]
pub struct ConfigBundle {
    pub units: &'static [AssetSymbol],
    /// `(base, quote)`
    pub default_market: (AssetSymbol, AssetSymbol),
    pub market_bases: &'static [AssetSymbol],
    /// Quote tokens grouped by issuer; flattened in group order
    pub market_quote_groups: &'static [&'static [AssetSymbol]],
    /// `(base, quote)` pairs for the landing page
    pub featured_markets: &'static [(AssetSymbol, AssetSymbol)],
    pub asset_namespaces: &'static [AssetNamespace],
    pub configuration_asset: AssetSymbol,
}

const MAINNET_QUOTE_GROUPS: &[&[AssetSymbol]] = &[
    NATIVE_TOKENS,
    GDEX_TOKENS,
    OPENLEDGER_TOKENS,
    RUDEX_TOKENS,
    XBTSX_TOKENS,
];

const TESTNET_QUOTE_GROUPS: &[&[AssetSymbol]] = &[TESTNET_MARKET_QUOTES];

pub static MAINNET_BUNDLE: ConfigBundle = ConfigBundle {
    units: MAINNET_UNITS,
    default_market: MAINNET_DEFAULT_MARKET,
    market_bases: MAINNET_MARKET_BASES,
    market_quote_groups: MAINNET_QUOTE_GROUPS,
    featured_markets: MAINNET_FEATURED_MARKETS,
    asset_namespaces: MAINNET_ASSET_NAMESPACES,
    // Deployed wallets read "TEST" on mainnet and "NOTIFICATIONS" on
    // testnet, the opposite pairing of every other field. Unconfirmed.
    configuration_asset: MAINNET_CONFIGURATION_ASSET,
};

pub static TESTNET_BUNDLE: ConfigBundle = ConfigBundle {
    units: TESTNET_UNITS,
    default_market: TESTNET_DEFAULT_MARKET,
    market_bases: TESTNET_MARKET_BASES,
    market_quote_groups: TESTNET_QUOTE_GROUPS,
    featured_markets: TESTNET_FEATURED_MARKETS,
    asset_namespaces: TESTNET_ASSET_NAMESPACES,
    configuration_asset: TESTNET_CONFIGURATION_ASSET,
};

impl ConfigBundle {
    pub fn for_classification(classification: NetworkClassification) -> &'static ConfigBundle {
        match classification {
            NetworkClassification::Primary => &MAINNET_BUNDLE,
            NetworkClassification::Alternate => &TESTNET_BUNDLE,
        }
    }
}
