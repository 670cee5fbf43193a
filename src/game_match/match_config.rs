//! Match settings loaded from YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::chess_rules::DEFAULT_CLOCK_SECONDS;
use crate::chess_errors::ChessError;

/// How a pawn reaching the last row picks its new kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionPolicy {
    /// Always a queen; requests may only name the queen.
    #[default]
    AutoQueen,
    /// Knight, bishop, rook or queen, queen when unspecified.
    Choice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Starting time per player, in clock units (seconds).
    pub initial_clock_seconds: u32,
    /// Credited to the mover after each accepted move.
    pub increment_seconds: u32,
    /// Wall time of one clock unit for a running session.
    pub tick_interval_ms: u64,
    pub promotion: PromotionPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial_clock_seconds: DEFAULT_CLOCK_SECONDS,
            increment_seconds: 0,
            tick_interval_ms: 1000,
            promotion: PromotionPolicy::AutoQueen,
        }
    }
}

impl MatchConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ChessError> {
        let cfg: Self = serde_yaml::from_str(content)
            .map_err(|err| ChessError::InvalidConfig(format!("failed to parse config: {err}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults when no path is given, otherwise the parsed file.
    pub fn load(path: Option<&Path>) -> Result<Self, ChessError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|err| {
            ChessError::InvalidConfig(format!("failed to read config {}: {err}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ChessError> {
        if self.initial_clock_seconds == 0 {
            return Err(ChessError::InvalidConfig(
                "initial_clock_seconds must be positive".to_owned(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ChessError::InvalidConfig(
                "tick_interval_ms must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchConfig, PromotionPolicy};
    use crate::chess_errors::ChessError;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = MatchConfig::from_yaml_str("{}").expect("empty mapping should parse");
        assert_eq!(cfg, MatchConfig::default());
        assert_eq!(cfg.initial_clock_seconds, 600);
        assert_eq!(cfg.promotion, PromotionPolicy::AutoQueen);
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let yaml = "initial_clock_seconds: 180\nincrement_seconds: 2\npromotion: choice\n";
        let cfg = MatchConfig::from_yaml_str(yaml).expect("config should parse");
        assert_eq!(cfg.initial_clock_seconds, 180);
        assert_eq!(cfg.increment_seconds, 2);
        assert_eq!(cfg.tick_interval_ms, 1000);
        assert_eq!(cfg.promotion, PromotionPolicy::Choice);
    }

    #[test]
    fn zero_clock_is_rejected() {
        let err = MatchConfig::from_yaml_str("initial_clock_seconds: 0").expect_err("zero clock should fail");
        assert!(matches!(err, ChessError::InvalidConfig(_)));

        assert!(MatchConfig::from_yaml_str("tick_interval_ms: 0").is_err());
        assert!(MatchConfig::from_yaml_str("promotion: sometimes").is_err());
    }

    #[test]
    fn missing_path_uses_defaults() {
        let cfg = MatchConfig::load(None).expect("defaults should load");
        assert_eq!(cfg, MatchConfig::default());
        assert!(MatchConfig::load(Some(std::path::Path::new("/nonexistent/chess.yaml"))).is_err());
    }
}
