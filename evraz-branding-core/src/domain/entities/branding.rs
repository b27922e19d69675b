//! Static branding of the wallet
//!
//! Everything here is the same on every network. Network dependent values
//! live in [`crate::domain::entities::profile`].

use crate::shared::constants::{
    ASSET_HIDE_NAMESPACES, FAUCET_REFERRER, FAUCET_URL, HIVE_NEWS_TAG, LOGO_ASSET,
    SMALL_LOGO_ASSET, TEST_FAUCET_URL, WALLET_NAME, WALLET_URL,
};
use crate::shared::types::{AssetNamespace, Faucet, LoginMethod, Theme};

const FAUCET: Faucet = Faucet {
    url: FAUCET_URL,
    show: true,
    editable: false,
    referrer: Some(FAUCET_REFERRER),
};

const TEST_FAUCET: Faucet = Faucet {
    url: TEST_FAUCET_URL,
    show: true,
    editable: false,
    referrer: None,
};

const ALLOWED_LOGINS: &[LoginMethod] = &[LoginMethod::Password, LoginMethod::Wallet];

pub struct Branding;

impl Branding {
    /// Name used throughout the UI and in translations
    pub fn wallet_name() -> &'static str {
        WALLET_NAME
    }

    pub fn wallet_url() -> &'static str {
        WALLET_URL
    }

    pub fn logo() -> &'static str {
        LOGO_ASSET
    }

    pub fn small_logo() -> &'static str {
        SMALL_LOGO_ASSET
    }

    pub fn default_theme() -> Theme {
        Theme::Midnight
    }

    pub fn default_login() -> LoginMethod {
        LoginMethod::Password
    }

    pub fn allowed_logins() -> &'static [LoginMethod] {
        ALLOWED_LOGINS
    }

    /// Registration faucet, offered on every network
    pub fn faucet() -> Faucet {
        FAUCET
    }

    /// Public testnet faucet. Not wired to the network classification.
    pub fn test_faucet() -> Faucet {
        TEST_FAUCET
    }

    /// Namespaces stripped from asset names before display
    pub fn asset_hide_namespaces() -> &'static [AssetNamespace] {
        ASSET_HIDE_NAMESPACES
    }

    /// Tag of the Hive news feed shown on the dashboard
    pub fn hive_news_tag() -> &'static str {
        HIVE_NEWS_TAG
    }

    /// Language selection is not customised yet
    pub fn supported_languages() -> Option<&'static [&'static str]> {
        None
    }
}
