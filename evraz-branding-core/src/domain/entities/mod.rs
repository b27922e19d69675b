//! Domain entities and value objects
//!
//! This module contains the network classification, market pairs, the
//! per-network configuration bundles and the static branding data.

pub mod branding;
pub mod gateway;
pub mod market;
pub mod network;
pub mod profile;

// Re-export entities
pub use branding::*;
pub use gateway::*;
pub use market::*;
pub use network::*;
pub use profile::*;
