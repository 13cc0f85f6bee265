//! Host configuration read from environment variables.
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | piece randomizer seed (u32) | random |
//! | `BLOCKFALL_KEY_RELEASE_MS` | held-key auto-release timeout, 0 disables | 150 |
//! | `BLOCKFALL_EVENT_LOG` | path of a JSONL event log | none |
//!
//! Unparsable values fall back to the default.

use crate::input::held::DEFAULT_KEY_RELEASE_TIMEOUT_MS;

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_KEY_RELEASE_MS: &str = "BLOCKFALL_KEY_RELEASE_MS";
pub const ENV_EVENT_LOG: &str = "BLOCKFALL_EVENT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub seed: u32,
    pub key_release_timeout_ms: u32,
    pub event_log_path: Option<String>,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random::<u32>);

        let key_release_timeout_ms = lookup(ENV_KEY_RELEASE_MS)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_MS);

        let event_log_path = lookup(ENV_EVENT_LOG)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            key_release_timeout_ms,
            event_log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_explicit_values() {
        let cfg = config(&[
            (ENV_SEED, "42"),
            (ENV_KEY_RELEASE_MS, " 0 "),
            (ENV_EVENT_LOG, "/tmp/blockfall.jsonl"),
        ]);
        assert_eq!(
            cfg,
            HostConfig {
                seed: 42,
                key_release_timeout_ms: 0,
                event_log_path: Some("/tmp/blockfall.jsonl".to_string()),
            }
        );
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.key_release_timeout_ms, DEFAULT_KEY_RELEASE_TIMEOUT_MS);
        assert_eq!(cfg.event_log_path, None);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            (ENV_SEED, "-3"),
            (ENV_KEY_RELEASE_MS, "soon"),
            (ENV_EVENT_LOG, "   "),
        ]);
        assert_eq!(cfg.key_release_timeout_ms, DEFAULT_KEY_RELEASE_TIMEOUT_MS);
        assert_eq!(cfg.event_log_path, None);
    }
}
