//! Assistant configuration from environment variables

use std::env;
use std::str::FromStr;

use board_core::go::DEFAULT_BOARD_SIZE;
use board_core::tiles::MahjongRule;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(AssistantError::Config(format!(
                "OUTPUT_FORMAT must be json or text, got {other:?}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Scoring rule used when `--rule` is not given
    pub mahjong_rule: MahjongRule,

    /// Size of the board produced from empty Go input
    pub go_board_size: usize,

    /// Output format used when `--format` is not given
    pub output_format: OutputFormat,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            mahjong_rule: MahjongRule::default(),
            go_board_size: DEFAULT_BOARD_SIZE,
            output_format: OutputFormat::default(),
        }
    }
}

impl AssistantConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, AssistantError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AssistantError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mahjong_rule = match lookup("MAHJONG_RULE") {
            Some(v) => v
                .parse()
                .map_err(|e| AssistantError::Config(format!("MAHJONG_RULE: {e}")))?,
            None => defaults.mahjong_rule,
        };

        let go_board_size = match lookup("GO_BOARD_SIZE") {
            Some(v) => match v.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(AssistantError::Config(format!(
                        "GO_BOARD_SIZE must be a positive integer, got {v:?}"
                    )))
                }
            },
            None => defaults.go_board_size,
        };

        let output_format = match lookup("OUTPUT_FORMAT") {
            Some(v) => v.parse()?,
            None => defaults.output_format,
        };

        Ok(Self {
            mahjong_rule,
            go_board_size,
            output_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AssistantConfig, AssistantError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AssistantConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(config.mahjong_rule, MahjongRule::National);
        assert_eq!(config.go_board_size, 19);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("MAHJONG_RULE", "tianjin"),
            ("GO_BOARD_SIZE", "9"),
            ("OUTPUT_FORMAT", "TEXT"),
        ])
        .unwrap();
        assert_eq!(config.mahjong_rule, MahjongRule::Tianjin);
        assert_eq!(config.go_board_size, 9);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("MAHJONG_RULE", "hong kong")]),
            Err(AssistantError::Config(_))
        ));
        assert!(matches!(
            load(&[("GO_BOARD_SIZE", "0")]),
            Err(AssistantError::Config(_))
        ));
        assert!(matches!(
            load(&[("OUTPUT_FORMAT", "yaml")]),
            Err(AssistantError::Config(_))
        ));
    }
}
