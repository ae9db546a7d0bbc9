use crate::{
    domain::ids::{IdGenerator, SequentialIds, UuidGenerator},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

/// How fresh column and case ids are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Uuid => Box::new(UuidGenerator),
            Self::Sequential => Box::new(SequentialIds::default()),
        }
    }
}

/// Color scheme flag. Consulted by renderers only; board state ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub default_column_title: String,
    pub default_case_title: String,
    pub id_strategy: IdStrategy,
    /// Bootstrap with the sample columns and cases
    pub seed: bool,
    pub theme: Theme,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Board".to_string(),
            default_column_title: "New Column".to_string(),
            default_case_title: "New Case".to_string(),
            id_strategy: IdStrategy::Uuid,
            seed: true,
            theme: Theme::Dark,
        }
    }
}

impl BoardConfig {
    pub const FILE_NAME: &'static str = "board.toml";

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: BoardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading board config");
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads `board.toml` from `dir`, falling back to defaults when absent
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> Result<()> {
        if self.default_column_title.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "default_column_title must not be empty".to_string(),
            ));
        }
        if self.default_case_title.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "default_case_title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
