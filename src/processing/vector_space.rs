//! Shared TF-IDF term space for one ranking call

use crate::processing::tokenizer::Tokenizer;
use std::collections::{HashMap, HashSet};

/// Vocabulary, document frequencies and vectors for the candidate and every
/// posting of a single ranking call.
///
/// All vectors have `vocab.len()` entries and share index-to-term alignment.
/// A space is only meaningful for the exact document set it was built from,
/// so it is constructed fresh for each call and never reused.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    pub vocab: Vec<String>,
    pub doc_freq: HashMap<String, usize>,
    pub total_docs: usize,
    pub candidate_vector: Vec<f64>,
    pub posting_vectors: Vec<Vec<f64>>,
}

impl VectorSpace {
    /// Build the space over `[candidate_text, posting_texts..]`.
    pub fn build(tokenizer: &Tokenizer, candidate_text: &str, posting_texts: &[String]) -> Self {
        let candidate_tokens = tokenizer.tokenize(candidate_text);
        let posting_tokens: Vec<Vec<String>> = posting_texts
            .iter()
            .map(|text| tokenizer.tokenize(text))
            .collect();

        let documents: Vec<&[String]> = std::iter::once(candidate_tokens.as_slice())
            .chain(posting_tokens.iter().map(Vec::as_slice))
            .collect();

        let vocab = build_vocab(&documents);
        let doc_freq = build_doc_freq(&documents);
        let total_docs = documents.len();

        let candidate_vector = vectorize(&candidate_tokens, &vocab, &doc_freq, total_docs);
        let posting_vectors = posting_tokens
            .iter()
            .map(|tokens| vectorize(tokens, &vocab, &doc_freq, total_docs))
            .collect();

        Self {
            vocab,
            doc_freq,
            total_docs,
            candidate_vector,
            posting_vectors,
        }
    }

    pub fn dimension(&self) -> usize {
        self.vocab.len()
    }
}

/// Distinct terms in first-encounter order across all documents.
pub fn build_vocab(documents: &[&[String]]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocab = Vec::new();

    for tokens in documents {
        for token in tokens.iter() {
            if seen.insert(token.as_str()) {
                vocab.push(token.clone());
            }
        }
    }

    vocab
}

/// Number of documents each term occurs in at least once.
pub fn build_doc_freq(documents: &[&[String]]) -> HashMap<String, usize> {
    let mut doc_freq = HashMap::new();

    for tokens in documents {
        let distinct: HashSet<&String> = tokens.iter().collect();
        for term in distinct {
            *doc_freq.entry(term.clone()).or_insert(0) += 1;
        }
    }

    doc_freq
}

/// TF-IDF vector of one tokenized document over `vocab`.
///
/// `tf = count / total_tokens`, `idf = ln(N / (1 + df))`. A document with no
/// tokens maps to the zero vector. A term present in `N - 1` documents gets an
/// idf of exactly zero.
pub fn vectorize(
    tokens: &[String],
    vocab: &[String],
    doc_freq: &HashMap<String, usize>,
    total_docs: usize,
) -> Vec<f64> {
    let total_terms = tokens.len();
    if total_terms == 0 {
        return vec![0.0; vocab.len()];
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    vocab
        .iter()
        .map(|term| {
            let tf = counts.get(term.as_str()).copied().unwrap_or(0) as f64 / total_terms as f64;
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            let idf = (total_docs as f64 / (1.0 + df)).ln();
            tf * idf
        })
        .collect()
}
