//! Infrastructure layer - process level integrations
//!
//! This module contains configuration loading from the environment.

pub mod config;

// Re-export infrastructure components
pub use config::*;
