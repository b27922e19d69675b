//! Shared types, utilities, and constants
//!
//! This module contains the literal branding tables, common types, and
//! the error type used throughout the branding core.

pub mod types;
pub mod utils;
pub mod constants;
pub mod error;

// Re-export shared components
pub use types::*;
pub use utils::*;
pub use error::*;
