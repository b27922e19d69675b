//! Constants for the branding core
//!
//! Literal branding and market data for the Evraz wallet. Nothing here
//! carries behavior; the network profiles in `domain::entities::profile`
//! assemble these tables into bundles.

// Chain identifiers
pub const MAINNET_CHAIN_ID: &str =
    "4018d7844c78f6a6c41c6a552b898022310fc5dec06da467ee7905a8dad512c8";
// Only kept for the record and as the unconfigured default: every chain
// other than mainnet is treated as testnet.
pub const TESTNET_CHAIN_ID: &str =
    "39f5e2ede1f8bc1a3a54a7914414e3779e33193f1f5693510e73cb7a87617447";
pub const CHAIN_ID_HEX_LENGTH: usize = 64;

// Branding
pub const WALLET_NAME: &str = "Evraz";
pub const WALLET_URL: &str = "https://evrazdex.org";
pub const LOGO_ASSET: &str = "assets/evraz_big.png";
pub const SMALL_LOGO_ASSET: &str = "assets/evraz_small.png";
pub const HIVE_NEWS_TAG: &str = "bitshares";

// Faucets
pub const FAUCET_URL: &str = "https://faucet-evrazdex.org";
pub const FAUCET_REFERRER: &str = "evraz";
pub const TEST_FAUCET_URL: &str = "https://faucet.testnet.bitshares.eu";

// Units
pub const MAINNET_UNITS: &[&str] = &["EVRAZ", "BTS", "USD", "CNY", "BTC", "EUR", "GBP", "RUBLE"];
pub const TESTNET_UNITS: &[&str] = &["TEST"];

// Default markets as (base, quote); route ids EVRAZ_BTS and USD_TEST
pub const MAINNET_DEFAULT_MARKET: (&str, &str) = ("BTS", "EVRAZ");
pub const TESTNET_DEFAULT_MARKET: (&str, &str) = ("TEST", "USD");
pub const MARKET_ID_SEPARATOR: char = '_';

// "My Markets" bases
pub const MAINNET_MARKET_BASES: &[&str] = &[
    "EVRAZ",
    "BTS",
    "EUR",
    "RUBLE",
    "GBP",
    "CNY",
    "JPY",
    "XBTSX.BTC",
    "USDIGI",
    "EUROLUX",
    "ALTIN",
    "ALTIN.TRY",
    "ALTIN.RUB",
    "LEPTA",
];
pub const TESTNET_MARKET_BASES: &[&str] = &["TEST"];

// "My Markets" quotes, grouped by issuer
pub const NATIVE_TOKENS: &[&str] = &[
    "EVRAZ",
    "BTC",
    "BTC1.0",
    "BTS",
    "CNY",
    "CNY1.0",
    "EUR",
    "EUR1.0",
    "GOLD",
    "GOLD1.0",
    "RUBLE",
    "RUB1.0",
    "SILVER",
    "SILVER1.0",
    "USD",
    "USD1.0",
    "USDIGI",
    "GBP",
    "JPY",
    "EUROLUX",
    "ALTIN",
    "ALTIN.TRY",
    "ALTIN.RUB",
];
pub const GDEX_TOKENS: &[&str] = &[];
pub const OPENLEDGER_TOKENS: &[&str] = &[];
pub const RUDEX_TOKENS: &[&str] = &[];
pub const XBTSX_TOKENS: &[&str] = &["XBTSX.BTC", "XBTSX.USDT", "XBTSX.HIVE", "XBTSX.EOS"];
pub const TESTNET_MARKET_QUOTES: &[&str] = &["TEST"];

// Featured markets as (base, quote). Duplicates are part of the deployed list.
pub const MAINNET_FEATURED_MARKETS: &[(&str, &str)] = &[
    ("EVRAZ", "BTS"),
    ("EVRAZ", "RUBLE"),
    ("EVRAZ", "EUR"),
    ("EVRAZ", "CNY"),
    ("EVRAZ", "RUDEX.BTC"),
    ("EVRAZ", "XBTSX.BTC"),
    ("EVRAZ", "CRUDE.NGN"),
    ("USD", "BTS"),
    ("USD", "GOLD"),
    ("USD", "URTHR"),
    ("USD", "SKULD"),
    ("USD", "VERTHANDI"),
    ("CNY", "BTS"),
    ("CNY", "USD"),
    ("CNY", "URTHR"),
    ("CNY", "SKULD"),
    ("CNY", "VERTHANDI"),
    ("BTS", "RUBLE"),
    ("BTS", "SILVER"),
    ("BTS", "GOLD"),
    ("BTS", "XBTSX.BTC"),
    ("BTS", "XBTSX.USDT"),
    ("EVRAZ", "BTS"),
    ("EVRAZ", "RUBLE"),
    ("EVRAZ", "EUR"),
    ("EVRAZ", "CNY"),
    ("EVRAZ", "RUDEX.BTC"),
    ("EVRAZ", "XBTSX.BTC"),
    ("BTS", "URTHR"),
    ("BTS", "SKULD"),
    ("BTS", "VERTHANDI"),
];
pub const TESTNET_FEATURED_MARKETS: &[(&str, &str)] = &[("USD", "TEST")];

// Asset namespaces
pub const MAINNET_ASSET_NAMESPACES: &[&str] = &["XBTSX.", "GDEX.", "IOB.", "PIRATE."];
pub const TESTNET_ASSET_NAMESPACES: &[&str] = &[];
pub const ASSET_HIDE_NAMESPACES: &[&str] = &[];

// Gateways offered in the deposit/withdraw dialog. OPEN, RUDEX, CITADEL,
// BRIDGE and SPARKDEX stay listed so the UI can show their warning icon.
pub const ALLOWED_GATEWAYS: &[&str] = &[
    "TRADE",
    "OPEN",
    "RUDEX",
    "GDEX",
    "PIRATE",
    "XBTSX",
    "IOB",
    "CITADEL",
    "BRIDGE",
    "SPARKDEX",
];

// Decentralized UI configuration asset
pub const MAINNET_CONFIGURATION_ASSET: &str = "TEST";
pub const TESTNET_CONFIGURATION_ASSET: &str = "NOTIFICATIONS";
pub const CONFIGURATION_ASSET_EXPLANATION: &str =
    "This asset is used for decentralized configuration of the BitShares UI placed under bitshares.org.";

// Environment keys
pub const ENV_CHAIN_ID: &str = "BRANDING_CHAIN_ID";
pub const ENV_LOG_LEVEL: &str = "BRANDING_LOG_LEVEL";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];
