//! Infrastructure layer providing external service integrations.
//!
//! Settings persistence, the filesystem document provider, configuration
//! and log routing.

pub mod config;
pub mod logging;
pub mod persistence;

pub use config::*;
pub use logging::*;
pub use persistence::*;
