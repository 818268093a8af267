//! Trust score between a candidate and a posting
//!
//! Postings that carry a recruiter rating are scored on the rating and the
//! posting's verification recency. Postings without one fall back to the
//! candidate's own assessment recency, so missing recruiter metadata is never
//! treated as a penalty.

use crate::config::ScoringConfig;
use crate::processing::records::{CandidateProfile, Posting};

/// Which trust formula applies to a candidate/posting pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrustInput {
    WithRating {
        rating: f64,
        verification_recency_days: Option<u32>,
    },
    WithoutRating {
        assessment_recency_days: Option<u32>,
    },
}

impl TrustInput {
    pub fn resolve(candidate: &CandidateProfile, posting: &Posting) -> Self {
        match posting.recruiter_rating {
            Some(rating) => TrustInput::WithRating {
                rating,
                verification_recency_days: posting.verification_recency_days,
            },
            None => TrustInput::WithoutRating {
                assessment_recency_days: candidate.assessment_recency_days,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrustScorer {
    rated_accuracy_weight: f64,
    rated_rating_weight: f64,
    rated_recency_weight: f64,
    unrated_accuracy_weight: f64,
    unrated_recency_weight: f64,
    max_recruiter_rating: f64,
    recency_horizon_days: u32,
    recruiter_confidence: f64,
}

impl Default for TrustScorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl TrustScorer {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            rated_accuracy_weight: config.rated_accuracy_weight,
            rated_rating_weight: config.rated_rating_weight,
            rated_recency_weight: config.rated_recency_weight,
            unrated_accuracy_weight: config.unrated_accuracy_weight,
            unrated_recency_weight: config.unrated_recency_weight,
            max_recruiter_rating: config.max_recruiter_rating,
            recency_horizon_days: config.recency_horizon_days,
            recruiter_confidence: config.recruiter_confidence.clamp(0.0, 1.0),
        }
    }

    pub fn score(&self, candidate: &CandidateProfile, posting: &Posting) -> f64 {
        self.score_input(candidate.accuracy, TrustInput::resolve(candidate, posting))
    }

    pub fn score_input(&self, accuracy: f64, input: TrustInput) -> f64 {
        let trust = match input {
            TrustInput::WithRating {
                rating,
                verification_recency_days,
            } => {
                let rating_norm = rating / self.max_recruiter_rating * self.recruiter_confidence;
                let recency = self.normalize_recency(verification_recency_days);
                self.rated_accuracy_weight * accuracy
                    + self.rated_rating_weight * rating_norm
                    + self.rated_recency_weight * recency
            }
            TrustInput::WithoutRating {
                assessment_recency_days,
            } => {
                let recency = self.normalize_recency(assessment_recency_days);
                self.unrated_accuracy_weight * accuracy + self.unrated_recency_weight * recency
            }
        };

        trust.clamp(0.0, 1.0)
    }

    /// 1.0 for today, falling linearly to 0.0 at the horizon. `None` is 0.0.
    pub fn normalize_recency(&self, days: Option<u32>) -> f64 {
        match days {
            None => 0.0,
            Some(days) => {
                let horizon = self.recency_horizon_days;
                let capped = days.min(horizon) as f64;
                (1.0 - capped / horizon as f64).clamp(0.0, 1.0)
            }
        }
    }
}

/// Recency on the default 365 day horizon.
pub fn normalize_recency(days: Option<u32>) -> f64 {
    TrustScorer::default().normalize_recency(days)
}

/// Trust score with the default weights.
pub fn trust_score(candidate: &CandidateProfile, posting: &Posting) -> f64 {
    TrustScorer::default().score(candidate, posting)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(accuracy: f64, assessment_recency_days: Option<u32>) -> CandidateProfile {
        CandidateProfile {
            id: "c".to_string(),
            name: "Candidate".to_string(),
            verified_skills: vec!["ruby".to_string()],
            accuracy,
            speed: 0.5,
            skip_penalty: 0.0,
            assessment_recency_days,
        }
    }

    fn posting(recruiter_rating: Option<f64>, verification_recency_days: Option<u32>) -> Posting {
        Posting {
            id: "p".to_string(),
            title: "Posting".to_string(),
            organization: String::new(),
            location: String::new(),
            description: "ruby".to_string(),
            required_skills: Vec::new(),
            recruiter_rating,
            verification_recency_days,
        }
    }

    #[test]
    fn test_normalize_recency() {
        assert_eq!(normalize_recency(None), 0.0);
        assert_eq!(normalize_recency(Some(0)), 1.0);
        assert_eq!(normalize_recency(Some(365)), 0.0);
        assert_eq!(normalize_recency(Some(5000)), 0.0);
        assert!((normalize_recency(Some(73)) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_branch() {
        let c = candidate(0.9, Some(10));

        assert_eq!(
            TrustInput::resolve(&c, &posting(Some(4.0), Some(30))),
            TrustInput::WithRating {
                rating: 4.0,
                verification_recency_days: Some(30)
            }
        );
        assert_eq!(
            TrustInput::resolve(&c, &posting(None, Some(30))),
            TrustInput::WithoutRating {
                assessment_recency_days: Some(10)
            }
        );
    }

    #[test]
    fn test_rated_branch_formula() {
        let c = candidate(0.9, Some(10));
        let p = posting(Some(4.0), Some(30));

        let expected = 0.4 * 0.9 + 0.4 * (4.0 / 5.0) + 0.2 * (1.0 - 30.0 / 365.0);
        let trust = trust_score(&c, &p);
        assert!((trust - expected).abs() < 1e-12);
        assert!((trust - 0.864).abs() < 5e-4);
    }

    #[test]
    fn test_unrated_branch_formula() {
        let c = candidate(0.9, Some(10));
        let p = posting(None, Some(30));

        let expected = 0.7 * 0.9 + 0.3 * (1.0 - 10.0 / 365.0);
        let trust = trust_score(&c, &p);
        assert!((trust - expected).abs() < 1e-12);
        assert!((trust - 0.922).abs() < 5e-4);
    }

    #[test]
    fn test_branches_differ_for_same_candidate() {
        let c = candidate(0.5, Some(0));
        let rated = trust_score(&c, &posting(Some(0.0), None));
        let unrated = trust_score(&c, &posting(None, None));

        assert!((rated - 0.2).abs() < 1e-12);
        assert!((unrated - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_missing_recency_contributes_nothing() {
        let c = candidate(1.0, None);
        assert!((trust_score(&c, &posting(None, None)) - 0.7).abs() < 1e-12);
        assert!((trust_score(&c, &posting(Some(5.0), None)) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_to_unit_interval() {
        let c = candidate(2.0, Some(0));
        assert_eq!(trust_score(&c, &posting(None, None)), 1.0);

        let c = candidate(-3.0, None);
        assert_eq!(trust_score(&c, &posting(Some(1.0), None)), 0.0);
    }

    #[test]
    fn test_recruiter_confidence_scales_rating() {
        let config = ScoringConfig {
            recruiter_confidence: 0.5,
            ..ScoringConfig::default()
        };
        let scorer = TrustScorer::from_config(&config);
        let trust = scorer.score_input(
            0.0,
            TrustInput::WithRating {
                rating: 5.0,
                verification_recency_days: None,
            },
        );
        assert!((trust - 0.2).abs() < 1e-12);
    }
}
