use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::constants::CHAIN_ID_HEX_LENGTH;
use crate::shared::error::BrandingError;

// Basic types for branding lookups
pub type AssetSymbol = &'static str;
pub type AssetNamespace = &'static str;
pub type GatewayId = &'static str;

/// Opaque chain identifier handed over by the node connection.
///
/// Only ever compared for equality. `is_well_formed` exists for
/// diagnostics; a malformed identifier is still a valid input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainIdentifier(String);

impl ChainIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier looks like a 32-byte hex digest
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == CHAIN_ID_HEX_LENGTH && hex::decode(&self.0).is_ok()
    }
}

impl fmt::Display for ChainIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChainIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ChainIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// UI themes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Theme {
    #[serde(rename = "darkTheme")]
    Dark,
    #[serde(rename = "lightTheme")]
    Light,
    #[serde(rename = "midnightTheme")]
    Midnight,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Midnight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "darkTheme",
            Theme::Light => "lightTheme",
            Theme::Midnight => "midnightTheme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = BrandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| BrandingError::validation(format!("Unknown theme: {}", s)))
    }
}

// Login modes: cloud password login or local wallet file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    Password,
    Wallet,
}

impl LoginMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginMethod::Password => "password",
            LoginMethod::Wallet => "wallet",
        }
    }
}

impl fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginMethod {
    type Err = BrandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password" => Ok(LoginMethod::Password),
            "wallet" => Ok(LoginMethod::Wallet),
            other => Err(BrandingError::validation(format!("Unknown login method: {}", other))),
        }
    }
}

/// Faucet used for account registration
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Faucet {
    pub url: &'static str,
    pub show: bool,
    pub editable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<&'static str>,
}

/// Asset whose description carries decentralized UI configuration
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ConfigurationAsset {
    pub symbol: AssetSymbol,
    pub explanation: &'static str,
}
