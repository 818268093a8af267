//! Configuration management for the skill ranker

use crate::error::{Result, SkillRankerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub ranking: RankingConfig,
    pub output: OutputConfig,
}

/// Formula constants for the performance and trust scores.
///
/// The defaults reproduce the published scoring formulas exactly; changing
/// them is an explicit opt-in by whoever owns the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub vsps_accuracy_weight: f64,
    pub vsps_speed_weight: f64,
    pub vsps_skip_weight: f64,
    pub rated_accuracy_weight: f64,
    pub rated_rating_weight: f64,
    pub rated_recency_weight: f64,
    pub unrated_accuracy_weight: f64,
    pub unrated_recency_weight: f64,
    pub max_recruiter_rating: f64,
    pub recency_horizon_days: u32,
    /// Multiplier applied to the normalised recruiter rating, clamped to [0, 1]
    pub recruiter_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Keep only the first `n` results after sorting
    pub max_results: Option<usize>,
    pub decimals: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            vsps_accuracy_weight: 0.6,
            vsps_speed_weight: 0.3,
            vsps_skip_weight: 0.1,
            rated_accuracy_weight: 0.4,
            rated_rating_weight: 0.4,
            rated_recency_weight: 0.2,
            unrated_accuracy_weight: 0.7,
            unrated_recency_weight: 0.3,
            max_recruiter_rating: 5.0,
            recency_horizon_days: 365,
            recruiter_confidence: 1.0,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: None,
            decimals: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("vsps_accuracy_weight", self.vsps_accuracy_weight),
            ("vsps_speed_weight", self.vsps_speed_weight),
            ("vsps_skip_weight", self.vsps_skip_weight),
            ("rated_accuracy_weight", self.rated_accuracy_weight),
            ("rated_rating_weight", self.rated_rating_weight),
            ("rated_recency_weight", self.rated_recency_weight),
            ("unrated_accuracy_weight", self.unrated_accuracy_weight),
            ("unrated_recency_weight", self.unrated_recency_weight),
            ("recruiter_confidence", self.recruiter_confidence),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(SkillRankerError::Configuration(format!(
                    "scoring.{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.max_recruiter_rating.is_finite() || self.max_recruiter_rating <= 0.0 {
            return Err(SkillRankerError::Configuration(format!(
                "scoring.max_recruiter_rating must be positive, got {}",
                self.max_recruiter_rating
            )));
        }

        if self.recency_horizon_days == 0 {
            return Err(SkillRankerError::Configuration(
                "scoring.recency_horizon_days must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SkillRankerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-ranker")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;

        if self.ranking.decimals > 9 {
            return Err(SkillRankerError::Configuration(format!(
                "ranking.decimals must be at most 9, got {}",
                self.ranking.decimals
            )));
        }

        Ok(())
    }
}
