//! Run configuration for the binaries.
//!
//! Everything is read from environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_SEED` | 100 | Seed of the draw stream |
//! | `TETRIS_TICK_MS` | 40 | Milliseconds between `Tick` actions |
//! | `TETRIS_LOG` | `info` | `tracing` filter directive |
//! | `TETRIS_LOG_FILE` | `tetris-reducer.log` | Log destination of the terminal game |
//!
//! Unset or blank variables take the default. A value that does not parse is
//! an error rather than a silent fallback.

use std::fmt;
use std::path::PathBuf;

use crate::types::{DEFAULT_SEED, TICK_RATE_MS};

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "tetris-reducer.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub tick_ms: u64,
    pub log_filter: String,
    pub log_file: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_ms: TICK_RATE_MS as u64,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let seed = match get("TETRIS_SEED") {
            Some(v) => parse_number("TETRIS_SEED", &v)?,
            None => defaults.seed,
        };
        let tick_ms = match get("TETRIS_TICK_MS") {
            Some(v) => parse_number("TETRIS_TICK_MS", &v)?,
            None => defaults.tick_ms,
        };
        if tick_ms == 0 {
            return Err(ConfigError::invalid("TETRIS_TICK_MS", "0", "must be positive"));
        }

        Ok(Self {
            seed,
            tick_ms,
            log_filter: get("TETRIS_LOG").unwrap_or(defaults.log_filter),
            log_file: get("TETRIS_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
        })
    }
}

fn parse_number<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| ConfigError::invalid(key, value, &e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: &str) -> Self {
        Self {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}={:?}: {}", self.key, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RunConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.seed, 100);
        assert_eq!(config.tick_ms, 40);
    }

    #[test]
    fn test_overrides() {
        let config = RunConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_TICK_MS", " 16 "),
            ("TETRIS_LOG", "tetris_reducer_core=trace"),
            ("TETRIS_LOG_FILE", "/tmp/game.log"),
        ]))
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.log_filter, "tetris_reducer_core=trace");
        assert_eq!(config.log_file, PathBuf::from("/tmp/game.log"));
    }

    #[test]
    fn test_blank_is_default() {
        let config = RunConfig::from_lookup(lookup(&[("TETRIS_SEED", "  ")])).unwrap();
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_invalid_seed_is_error() {
        let err = RunConfig::from_lookup(lookup(&[("TETRIS_SEED", "abc")])).unwrap_err();
        assert_eq!(err.key, "TETRIS_SEED");
        assert_eq!(err.value, "abc");
        assert!(err.to_string().starts_with("invalid TETRIS_SEED=\"abc\""));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = RunConfig::from_lookup(lookup(&[("TETRIS_TICK_MS", "0")])).unwrap_err();
        assert_eq!(err.key, "TETRIS_TICK_MS");
    }
}
