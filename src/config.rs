//! Engine configuration.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::state::shuffle::DEFAULT_SHUFFLE_MOVES;

/// Tunable engine settings.
///
/// Missing JSON fields fall back to [`EngineConfig::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Random slides applied when generating a puzzle
    pub shuffle_moves: u32,

    /// Maximum level forwarded to the diagnostics sink
    pub log_level: LevelFilter,
}

impl EngineConfig {
    /// Defaults used by the host build.
    pub const DEFAULT: Self = Self {
        shuffle_moves: DEFAULT_SHUFFLE_MOVES,
        log_level: LevelFilter::Info,
    };

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shuffle_moves == 0 {
            return Err(ConfigError::NoShuffleMoves);
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "shuffle_moves": self.shuffle_moves,
            "log_level": self.log_level.as_str()
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("shuffle_moves must be at least 1")]
    NoShuffleMoves,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default() {
        let config = EngineConfig::default();
        assert_eq!(config.shuffle_moves, DEFAULT_SHUFFLE_MOVES);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = EngineConfig::from_json(r#"{"shuffle_moves": 250, "log_level": "DEBUG"}"#)
            .unwrap();
        assert_eq!(
            config,
            EngineConfig {
                shuffle_moves: 250,
                log_level: LevelFilter::Debug,
            }
        );
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"shuffle_moves": 10}"#).unwrap();
        assert_eq!(config.shuffle_moves, 10);
        assert_eq!(config.log_level, LevelFilter::Info);

        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::DEFAULT);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"shuffle_moves": 0}"#),
            Err(ConfigError::NoShuffleMoves)
        ));
        assert!(matches!(
            EngineConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"shuffle_moves": -1}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_to_json() {
        let json = EngineConfig::DEFAULT.to_json();
        assert_eq!(json["shuffle_moves"], serde_json::json!(DEFAULT_SHUFFLE_MOVES));
        assert_eq!(json["log_level"], serde_json::json!("INFO"));
    }
}
