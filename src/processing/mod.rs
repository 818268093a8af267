//! Recommendation scoring: tokenization, TF-IDF, similarity and ranking

pub mod records;
pub mod tokenizer;
pub mod vector_space;
pub mod similarity;
pub mod performance;
pub mod trust;
pub mod ranker;

pub use ranker::{rank, Ranker};
pub use records::{CandidateProfile, Posting, RankingResult};
