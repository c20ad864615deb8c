use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AuroraError, Result};

/// Scoring weights and result cap for note search.
///
/// Fields missing from a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Added when the query occurs in the note body.
    pub body_weight: f64,
    /// Added when the query occurs in the tag string.
    pub tag_weight: f64,
    /// Added when the query equals the whole (trimmed) body.
    pub exact_bonus: f64,
    /// Scores are clamped to this value.
    pub max_score: f64,
    /// Maximum number of results returned.
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            body_weight: 1.0,
            tag_weight: 0.8,
            exact_bonus: 0.5,
            max_score: 1.0,
            result_limit: 8,
        }
    }
}

impl SearchConfig {
    /// Load a config from a YAML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: SearchConfig = serde_yaml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(AuroraError::InvalidConfig(
                "result_limit must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("body_weight", self.body_weight),
            ("tag_weight", self.tag_weight),
            ("exact_bonus", self.exact_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AuroraError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !self.max_score.is_finite() || self.max_score <= 0.0 {
            return Err(AuroraError::InvalidConfig(format!(
                "max_score must be positive, got {}",
                self.max_score
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
