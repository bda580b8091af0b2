//! Session configuration loaded from TOML and overridden by flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::{Difficulty, GameMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field is optional in the file; anything missing falls back to the
/// engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Who plays O.
    mode: GameMode,

    /// Computer strength (ignored in human-vs-human mode).
    difficulty: Difficulty,

    /// Name of the player using X.
    player1_name: Option<String>,

    /// Name of the player using O.
    player2_name: Option<String>,

    /// Fixed seed for reproducible computer play.
    seed: Option<u64>,
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(
                ConfigErrorKind::Read,
                format!("{}: {}", path.as_ref().display(), e),
            )
        })?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse, e.to_string()))
    }

    /// Applies command-line flags on top of this configuration.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(difficulty) = cli.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(name) = &cli.player1 {
            self.player1_name = Some(name.clone());
        }
        if let Some(name) = &cli.player2 {
            self.player2_name = Some(name.clone());
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        self
    }
}

/// What went wrong while loading a session config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("cannot read session file")]
    Read,
    /// The TOML did not describe a valid session.
    #[display("bad session settings")]
    Parse,
}

/// A session config that could not be loaded, tagged with where it was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("{kind} ({detail}) [{origin}]")]
pub struct ConfigError {
    /// Read or parse failure.
    pub kind: ConfigErrorKind,
    /// Underlying I/O or TOML message.
    pub detail: String,
    /// Raising call site as `file:line`.
    pub origin: String,
}

impl ConfigError {
    #[track_caller]
    fn new(kind: ConfigErrorKind, detail: String) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            kind,
            detail,
            origin: format!("{}:{}", caller.file(), caller.line()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SessionConfig::from_toml("").expect("Empty config is valid");
        assert_eq!(config, SessionConfig::default());
        assert_eq!(*config.mode(), GameMode::HumanVsHuman);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_full_file_parses() {
        let config = SessionConfig::from_toml(
            r#"
            mode = "human_vs_ai"
            difficulty = "hard"
            player1_name = "Ada"
            seed = 42
            "#,
        )
        .expect("Valid config");
        assert_eq!(*config.mode(), GameMode::HumanVsAi);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(config.player1_name().as_deref(), Some("Ada"));
        assert_eq!(*config.seed(), Some(42));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let err = SessionConfig::from_toml(r#"difficulty = "nightmare""#)
            .expect_err("Unknown difficulty");
        assert_eq!(err.kind, ConfigErrorKind::Parse);
        assert!(err.to_string().starts_with("bad session settings"));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = SessionConfig::from_file("no/such/noughts.toml").expect_err("Missing file");
        assert_eq!(err.kind, ConfigErrorKind::Read);
        assert!(err.detail.contains("noughts.toml"));
        assert!(err.origin.contains("config.rs"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = SessionConfig::from_toml(
            r#"
            mode = "human_vs_human"
            difficulty = "easy"
            player1_name = "Ada"
            "#,
        )
        .expect("Valid config");
        let cli = Cli::parse_from([
            "noughts",
            "--mode",
            "human_vs_ai",
            "--difficulty",
            "HARD",
            "--seed",
            "9",
        ]);

        let merged = config.with_overrides(&cli);
        assert_eq!(*merged.mode(), GameMode::HumanVsAi);
        assert_eq!(*merged.difficulty(), Difficulty::Hard);
        assert_eq!(merged.player1_name().as_deref(), Some("Ada"));
        assert_eq!(*merged.seed(), Some(9));
    }
}
