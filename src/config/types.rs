// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
const DEFAULT_LINES_TO_SHOW: u16 = 5;

/// Watch loop configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_lines_to_show")]
    pub lines_to_show: u16,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_lines_to_show() -> u16 {
    DEFAULT_LINES_TO_SHOW
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            lines_to_show: DEFAULT_LINES_TO_SHOW,
        }
    }
}

impl WatchConfig {
    /// Tick interval, never shorter than one millisecond
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.watch.poll_interval_ms, 100);
        assert_eq!(config.watch.lines_to_show, 5);
    }

    #[test]
    fn test_partial_section_fills_missing_fields() {
        let config: Config = toml::from_str("[watch]\nlines_to_show = 8\n").unwrap();
        assert_eq!(config.watch.lines_to_show, 8);
        assert_eq!(config.watch.poll_interval_ms, 100);
    }

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        let config: Config = toml::from_str("[watch]\npoll_interval_ms = 0\n").unwrap();
        assert_eq!(config.watch.poll_interval(), Duration::from_millis(1));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_poll_interval_parses(ms in 1u64..100_000) {
            let toml_content = format!("[watch]\npoll_interval_ms = {}\n", ms);
            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.watch.poll_interval(), Duration::from_millis(ms));
        }
    }
}
