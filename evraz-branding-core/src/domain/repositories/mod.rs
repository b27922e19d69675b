//! Domain repositories
//!
//! This module contains the traits the branding core reads external
//! state through.

pub mod chain_id_repository;

// Re-export repositories
pub use chain_id_repository::*;
