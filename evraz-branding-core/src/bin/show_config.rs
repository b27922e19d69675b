use anyhow::Context;
use std::env;

use evraz_branding_core::{allowed_gateway, init, NetworkProfileResolver};

fn main() -> anyhow::Result<()> {
    let config = init().context("failed to load branding configuration")?;
    let profile = NetworkProfileResolver::new(config.chain_id.clone());
    let snapshot = profile.snapshot();

    if env::args().skip(1).any(|arg| arg == "--json") {
        println!("{}", snapshot.to_json_pretty()?);
        return Ok(());
    }

    println!("{} Wallet Network Configuration:\n", snapshot.wallet_name);
    println!("  Wallet URL: {}", snapshot.wallet_url);
    println!("  Chain ID: {}", snapshot.chain_id);
    println!("  Network: {}", snapshot.network);
    println!("  Default Theme: {}", snapshot.default_theme);
    println!("  Default Login: {}", snapshot.default_login);
    println!("  Units: {}", snapshot.units.join(", "));
    println!("  Default Market: {}", profile.default_market_id());
    println!("  Featured Markets: {}", snapshot.featured_markets.len());
    println!(
        "  Asset Namespaces: {}",
        if snapshot.asset_namespaces.is_empty() {
            "(none)".to_string()
        } else {
            snapshot.asset_namespaces.join(", ")
        }
    );
    println!("  Gateways: {}", snapshot.allowed_gateways.join(", "));
    println!("  Any Gateway Allowed: {}", allowed_gateway(None));
    println!("  Configuration Asset: {}", snapshot.configuration_asset.symbol);
    println!("  Faucet: {}", snapshot.faucet.url);
    println!("  Hive News Tag: {}", snapshot.hive_news_tag);
    Ok(())
}
