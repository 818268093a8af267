//! Parsing of record files into candidate and posting values

use crate::error::{Result, SkillRankerError};
use crate::input::file_detector::FileType;
use crate::processing::records::{CandidateProfile, Posting};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A postings file holds either a bare array or a `postings` table.
///
/// TOML has no top-level arrays, so TOML files always use the wrapped form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PostingsFile {
    List(Vec<Posting>),
    Wrapped { postings: Vec<Posting> },
}

impl PostingsFile {
    fn into_postings(self) -> Vec<Posting> {
        match self {
            PostingsFile::List(postings) => postings,
            PostingsFile::Wrapped { postings } => postings,
        }
    }
}

pub fn parse_candidate(content: &str, file_type: FileType, source: &str) -> Result<CandidateProfile> {
    parse_document(content, file_type, source)
}

pub fn parse_postings(content: &str, file_type: FileType, source: &str) -> Result<Vec<Posting>> {
    let file: PostingsFile = parse_document(content, file_type, source)?;
    Ok(file.into_postings())
}

fn parse_document<T: DeserializeOwned>(content: &str, file_type: FileType, source: &str) -> Result<T> {
    match file_type {
        FileType::Json => serde_json::from_str(content).map_err(|e| {
            SkillRankerError::InvalidRecord(format!("Failed to parse JSON '{}': {}", source, e))
        }),
        FileType::Toml => toml::from_str(content).map_err(|e| {
            SkillRankerError::InvalidRecord(format!("Failed to parse TOML '{}': {}", source, e))
        }),
        FileType::Unknown => Err(SkillRankerError::UnsupportedFormat(format!(
            "Unsupported record file: {}",
            source
        ))),
    }
}
