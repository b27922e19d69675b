//! Gateway allow-list for the deposit/withdraw dialog

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::shared::constants::ALLOWED_GATEWAYS;
use crate::shared::types::GatewayId;

lazy_static! {
    static ref ALLOWED_GATEWAY_SET: HashSet<GatewayId> = ALLOWED_GATEWAYS.iter().copied().collect();
}

/// Gateways the user may pick from
pub struct GatewayAllowList;

impl GatewayAllowList {
    pub fn gateways() -> &'static [GatewayId] {
        ALLOWED_GATEWAYS
    }

    /// Whether `gateway` may be offered.
    ///
    /// Without a gateway (`None` or empty) this answers whether any gateway
    /// is allowed at all.
    pub fn allowed_gateway(gateway: Option<&str>) -> bool {
        match gateway {
            None | Some("") => !ALLOWED_GATEWAY_SET.is_empty(),
            Some(id) => ALLOWED_GATEWAY_SET.contains(id),
        }
    }
}

/// Shorthand for [`GatewayAllowList::allowed_gateway`]
pub fn allowed_gateway(gateway: Option<&str>) -> bool {
    GatewayAllowList::allowed_gateway(gateway)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_gateway_asks_whether_any_are_allowed() {
        assert!(allowed_gateway(None));
        assert!(allowed_gateway(Some("")));
    }

    #[test]
    fn test_known_gateways() {
        assert!(allowed_gateway(Some("GDEX")));
        assert!(allowed_gateway(Some("XBTSX")));
        assert!(allowed_gateway(Some("SPARKDEX")));
    }

    #[test]
    fn test_unknown_gateways() {
        assert!(!allowed_gateway(Some("NONEXISTENT")));
        assert!(!allowed_gateway(Some("gdex")));
        assert!(!allowed_gateway(Some("GDEX ")));
    }

    #[test]
    fn test_every_listed_gateway_is_allowed() {
        for gateway in GatewayAllowList::gateways() {
            assert!(GatewayAllowList::allowed_gateway(Some(*gateway)));
        }
    }
}
