//! Core branding functionality
//!
//! This module contains network profile resolution and the shared handle
//! that tracks the profile of the active connection.

pub mod resolver;
pub mod session;

pub use resolver::{classify_network, NetworkProfileResolver, ProfileSnapshot};
pub use session::ActiveNetwork;
