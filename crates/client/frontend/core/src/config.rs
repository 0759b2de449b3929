//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations.

use std::env;
use std::str::FromStr;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub channels: ChannelConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(channels: ChannelConfig, messages: MessageConfig) -> Self {
        Self { channels, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_EVENT_BUFFER` - Runtime events handled per frame (default: 16)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = parse_var::<usize>(&lookup, "CLI_EVENT_BUFFER") {
            config.channels.event_buffer = capacity.max(1);
        }

        if let Some(capacity) = parse_var::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    /// Upper bound on runtime events drained before the next redraw.
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { event_buffer: 16 }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Parses `key` from `lookup`, treating blank or malformed values as unset.
///
/// Shared by every frontend's `from_lookup`.
pub fn parse_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}
