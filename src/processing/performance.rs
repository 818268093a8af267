//! Verified-skill performance score (VSPS)

use crate::config::ScoringConfig;

/// Weighted blend of assessment accuracy, speed and skip penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceScorer {
    accuracy_weight: f64,
    speed_weight: f64,
    skip_weight: f64,
}

impl Default for PerformanceScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl PerformanceScorer {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            accuracy_weight: config.vsps_accuracy_weight,
            speed_weight: config.vsps_speed_weight,
            skip_weight: config.vsps_skip_weight,
        }
    }

    /// Out-of-range inputs are tolerated; only the result is clamped.
    pub fn score(&self, accuracy: f64, speed: f64, skip_penalty: f64) -> f64 {
        let raw = self.accuracy_weight * accuracy + self.speed_weight * speed
            - self.skip_weight * skip_penalty;
        raw.clamp(0.0, 1.0)
    }
}

/// `clamp(0.6 * accuracy + 0.3 * speed - 0.1 * skip_penalty)`
pub fn vsps(accuracy: f64, speed: f64, skip_penalty: f64) -> f64 {
    PerformanceScorer::default().score(accuracy, speed, skip_penalty)
}
