//! Ranking aggregator: fuses text relevance, performance and trust

use crate::config::Config;
use crate::processing::performance::PerformanceScorer;
use crate::processing::records::{CandidateProfile, Posting, RankingResult};
use crate::processing::similarity::cosine_similarity;
use crate::processing::tokenizer::Tokenizer;
use crate::processing::trust::TrustScorer;
use crate::processing::vector_space::VectorSpace;
use log::debug;

/// Ranks postings for one candidate.
///
/// Holds only immutable scoring configuration; every call builds and drops
/// its own [`VectorSpace`], so one ranker can serve concurrent callers.
pub struct Ranker {
    tokenizer: Tokenizer,
    performance: PerformanceScorer,
    trust: TrustScorer,
    decimals: u32,
    max_results: Option<usize>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            performance: PerformanceScorer::from_config(&config.scoring),
            trust: TrustScorer::from_config(&config.scoring),
            decimals: config.ranking.decimals,
            max_results: config.ranking.max_results,
        }
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Score every posting and order them by descending final score.
    ///
    /// `final_score` is the product of the unrounded components, rounded
    /// afterwards. Equal reported scores keep their input order.
    pub fn rank(&self, candidate: &CandidateProfile, postings: &[Posting]) -> Vec<RankingResult> {
        if postings.is_empty() {
            return Vec::new();
        }

        let posting_texts: Vec<String> = postings.iter().map(Posting::composite_text).collect();
        let space = VectorSpace::build(&self.tokenizer, &candidate.composite_text(), &posting_texts);
        debug!(
            "Built vector space: {} terms across {} documents",
            space.dimension(),
            space.total_docs
        );

        let vsps = self
            .performance
            .score(candidate.accuracy, candidate.speed, candidate.skip_penalty);

        let mut results: Vec<RankingResult> = postings
            .iter()
            .zip(space.posting_vectors.iter())
            .map(|(posting, posting_vector)| {
                let cosine = cosine_similarity(&space.candidate_vector, posting_vector);
                let trust = self.trust.score(candidate, posting);
                let final_score = (cosine * vsps * trust).clamp(0.0, 1.0);

                debug!(
                    "Posting {}: cosine={:.4} vsps={:.4} trust={:.4} final={:.4}",
                    posting.id, cosine, vsps, trust, final_score
                );

                RankingResult {
                    posting: posting.clone(),
                    cosine_similarity: self.round(cosine),
                    vsps: self.round(vsps),
                    trust_score: self.round(trust),
                    final_score: self.round(final_score),
                }
            })
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

        if let Some(limit) = self.max_results {
            results.truncate(limit);
        }

        results
    }

    fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimals)
    }
}

/// Round the exact stored value to `decimals` places.
///
/// Values stored just below a midpoint round down. Exact binary midpoints
/// (odd multiples of `2^-(decimals + 1)`) round away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scaled_half = value * 2_f64.powi(decimals as i32 + 1);
    if scaled_half.fract() == 0.0 && scaled_half % 2.0 != 0.0 {
        let factor = 10_f64.powi(decimals as i32);
        return (value * factor).round() / factor;
    }

    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Rank with the default scoring configuration.
pub fn rank(candidate: &CandidateProfile, postings: &[Posting]) -> Vec<RankingResult> {
    Ranker::new().rank(candidate, postings)
}
