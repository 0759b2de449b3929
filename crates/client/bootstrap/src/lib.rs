//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and runtime setup that can be reused by
//! the CLI or any other front-end crate.
pub mod builder;
pub mod config;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{ChannelConfig, ContentConfig, RuntimeConfig};
