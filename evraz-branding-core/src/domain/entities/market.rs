//! Market pair entity for the branding core

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::shared::constants::MARKET_ID_SEPARATOR;
use crate::shared::error::BrandingError;
use crate::shared::utils::split_market_id;

/// A trading pair as shown by the market selector.
///
/// The wallet's market ids are written `QUOTE_BASE`, so `EVRAZ_BTS` is
/// EVRAZ priced in BTS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MarketPair {
    pub base: String,
    pub quote: String,
}

impl MarketPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    pub fn parse_market_id(market_id: &str) -> Result<Self, BrandingError> {
        let (quote, base) = split_market_id(market_id)?;
        Ok(Self::new(base, quote))
    }

    pub fn market_id(&self) -> String {
        format!("{}{}{}", self.quote, MARKET_ID_SEPARATOR, self.base)
    }
}

impl From<(&str, &str)> for MarketPair {
    fn from((base, quote): (&str, &str)) -> Self {
        Self::new(base, quote)
    }
}

impl fmt::Display for MarketPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.quote, self.base)
    }
}

/// Keep pairs whose base is in `bases`, in their original order.
/// An empty filter keeps everything.
pub fn filter_by_base<S: AsRef<str>>(pairs: &[(&str, &str)], bases: &[S]) -> Vec<MarketPair> {
    let wanted: HashSet<&str> = bases.iter().map(AsRef::as_ref).collect();
    pairs
        .iter()
        .filter(|(base, _)| wanted.is_empty() || wanted.contains(base))
        .map(|&pair| MarketPair::from(pair))
        .collect()
}
