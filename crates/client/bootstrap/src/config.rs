//! Runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

use game_content::DEFAULT_BASE_URL;
use game_core::GameConfig;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub content: ContentConfig,
    pub channels: ChannelConfig,
    pub monster_turn_delay: Duration,
    /// Fixed seed for damage rolls. Random per run when unset.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content: ContentConfig::default(),
            channels: ChannelConfig::default(),
            monster_turn_delay: Duration::from_millis(GameConfig::DEFAULT_MONSTER_TURN_DELAY_MS),
            seed: None,
            session_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OPEN5E_BASE_URL` - API root (default: `https://api.open5e.com`)
    /// - `OPEN5E_TIMEOUT_SECS` - Per-request timeout (default: 10)
    /// - `MONSTER_TURN_DELAY_MS` - Pause before the monster answers (default: 200)
    /// - `GAME_SEED` - Seed for deterministic damage rolls (default: random)
    /// - `RUNTIME_COMMAND_BUFFER` - Worker inbox size (default: 32)
    /// - `RUNTIME_EVENT_BUFFER` - Event broadcast capacity (default: 100)
    /// - `GAME_SESSION_ID` - Session identifier used for log file names
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let parse = |key: &str| read(key).and_then(|value| value.trim().parse::<u64>().ok());

        let mut config = Self::default();

        if let Some(url) = read("OPEN5E_BASE_URL") {
            config.content.base_url = url;
        }
        if let Some(secs) = parse("OPEN5E_TIMEOUT_SECS") {
            config.content.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(ms) = parse("MONSTER_TURN_DELAY_MS") {
            config.monster_turn_delay = Duration::from_millis(ms);
        }
        config.seed = parse("GAME_SEED");

        if let Some(capacity) = parse("RUNTIME_COMMAND_BUFFER") {
            config.channels.command_buffer = (capacity as usize).max(1);
        }
        if let Some(capacity) = parse("RUNTIME_EVENT_BUFFER") {
            config.channels.event_buffer = (capacity as usize).max(1);
        }

        config.session_id = read("GAME_SESSION_ID");

        config
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::with_monster_turn_delay(self.monster_turn_delay)
    }

    /// Worker-level configuration handed to [`runtime::Runtime`].
    pub fn runtime_config(&self) -> runtime::RuntimeConfig {
        runtime::RuntimeConfig {
            game_config: self.game_config(),
            event_buffer_size: self.channels.event_buffer,
            command_buffer_size: self.channels.command_buffer,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContentConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub command_buffer: usize,
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        let runtime = runtime::RuntimeConfig::default();
        Self {
            command_buffer: runtime.command_buffer_size,
            event_buffer: runtime.event_buffer_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);

        assert_eq!(config.content.base_url, "https://api.open5e.com");
        assert_eq!(config.content.timeout, Duration::from_secs(10));
        assert_eq!(config.monster_turn_delay, Duration::from_millis(200));
        assert_eq!(config.seed, None);
        assert_eq!(config.channels.command_buffer, 32);
        assert_eq!(config.channels.event_buffer, 100);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("OPEN5E_BASE_URL", "http://localhost:8000"),
            ("OPEN5E_TIMEOUT_SECS", "3"),
            ("MONSTER_TURN_DELAY_MS", "0"),
            ("GAME_SEED", "42"),
            ("RUNTIME_EVENT_BUFFER", "0"),
            ("GAME_SESSION_ID", "abc"),
        ]);

        assert_eq!(config.content.base_url, "http://localhost:8000");
        assert_eq!(config.content.timeout, Duration::from_secs(3));
        assert_eq!(config.game_config().monster_turn_delay, Duration::ZERO);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.channels.event_buffer, 1);
        assert_eq!(config.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn ignores_unparsable_and_blank_values() {
        let config = config_from(&[("GAME_SEED", "lucky"), ("OPEN5E_BASE_URL", "  ")]);

        assert_eq!(config.seed, None);
        assert_eq!(config.content.base_url, DEFAULT_BASE_URL);
    }
}
