//! Ranking report structures handed to the output formatters

use crate::processing::records::{CandidateProfile, RankingResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranking run packaged for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    /// Report metadata and generation info
    pub metadata: ReportMetadata,

    /// Ranked postings, best first
    pub results: Vec<RankingResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the ranker used
    pub ranker_version: String,

    pub candidate_id: String,
    pub candidate_name: String,

    /// Postings considered, before any top-k cut
    pub posting_count: usize,

    pub processing_time_ms: u64,
}

/// Coarse label for a final score, used by the console and markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrength {
    Strong,
    Moderate,
    Weak,
    NoMatch,
}

impl MatchStrength {
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= 0.5 {
            MatchStrength::Strong
        } else if final_score >= 0.2 {
            MatchStrength::Moderate
        } else if final_score > 0.0 {
            MatchStrength::Weak
        } else {
            MatchStrength::NoMatch
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStrength::Strong => "STRONG",
            MatchStrength::Moderate => "MODERATE",
            MatchStrength::Weak => "WEAK",
            MatchStrength::NoMatch => "NO MATCH",
        }
    }
}

impl RankingReport {
    pub fn new(
        candidate: &CandidateProfile,
        posting_count: usize,
        results: Vec<RankingResult>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                ranker_version: env!("CARGO_PKG_VERSION").to_string(),
                candidate_id: candidate.id.clone(),
                candidate_name: candidate.name.clone(),
                posting_count,
                processing_time_ms,
            },
            results,
        }
    }

    pub fn best(&self) -> Option<&RankingResult> {
        self.results.first()
    }

    pub fn matched_count(&self) -> usize {
        self.results.iter().filter(|r| r.final_score > 0.0).count()
    }
}
