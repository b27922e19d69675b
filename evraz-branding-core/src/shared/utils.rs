//! Utility functions for the branding core
//!
//! Small helpers shared by the profile tables and the resolver.

use crate::shared::constants::MARKET_ID_SEPARATOR;
use crate::shared::error::BrandingError;

/// Concatenate token groups in group order
pub fn flatten_groups(groups: &[&[&'static str]]) -> Vec<&'static str> {
    groups.iter().flat_map(|group| group.iter().copied()).collect()
}

/// Split a `QUOTE_BASE` market id into its two halves
pub fn split_market_id(market_id: &str) -> Result<(&str, &str), BrandingError> {
    let mut parts = market_id.split(MARKET_ID_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(quote), Some(base), None) if !quote.is_empty() && !base.is_empty() => {
            Ok((quote, base))
        }
        _ => Err(BrandingError::validation(format!(
            "Market id must look like QUOTE{}BASE: {:?}",
            MARKET_ID_SEPARATOR, market_id
        ))),
    }
}

/// Shorten a chain id for log output
pub fn short_chain_id(chain_id: &str) -> String {
    const SHOWN: usize = 8;
    if chain_id.chars().count() <= SHOWN {
        return chain_id.to_string();
    }
    let head: String = chain_id.chars().take(SHOWN).collect();
    format!("{}…", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_groups_keeps_order_and_skips_empty() {
        let a: &[&str] = &["A", "B"];
        let empty: &[&str] = &[];
        let c: &[&str] = &["C"];
        assert_eq!(flatten_groups(&[a, empty, c]), vec!["A", "B", "C"]);
        assert!(flatten_groups(&[]).is_empty());
    }

    #[test]
    fn test_split_market_id() {
        assert_eq!(split_market_id("EVRAZ_BTS").unwrap(), ("EVRAZ", "BTS"));
        assert_eq!(split_market_id("XBTSX.BTC_BTS").unwrap(), ("XBTSX.BTC", "BTS"));
        assert!(split_market_id("EVRAZBTS").is_err());
        assert!(split_market_id("_BTS").is_err());
        assert!(split_market_id("EVRAZ_").is_err());
        assert!(split_market_id("A_B_C").is_err());
        assert!(split_market_id("").is_err());
    }

    #[test]
    fn test_short_chain_id() {
        assert_eq!(short_chain_id("deadbeef"), "deadbeef");
        assert_eq!(short_chain_id(""), "");
        assert_eq!(
            short_chain_id("4018d7844c78f6a6c41c6a552b898022310fc5dec06da467ee7905a8dad512c8"),
            "4018d784…"
        );
    }
}
