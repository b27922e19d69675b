//! Domain layer - entities and repositories
//!
//! This module contains the network classification rules, the static
//! branding tables and the traits used to reach external collaborators.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
