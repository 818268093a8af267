//! Input manager for loading candidate and posting records

use crate::error::{Result, SkillRankerError};
use crate::input::file_detector::FileType;
use crate::input::record_parser::{parse_candidate, parse_postings};
use crate::input::validation::{validate_candidate, validate_postings};
use crate::processing::records::{CandidateProfile, Posting};
use anyhow::Context;
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_candidate(&mut self, path: &Path) -> Result<CandidateProfile> {
        let file_type = self.detect_file_type(path)?;
        let content = self.read_file(path).await?;

        let candidate = parse_candidate(&content, file_type, &path.display().to_string())?;
        validate_candidate(&candidate)?;

        info!("Loaded candidate '{}' from {}", candidate.id, path.display());
        Ok(candidate)
    }

    pub async fn load_postings(&mut self, path: &Path) -> Result<Vec<Posting>> {
        let file_type = self.detect_file_type(path)?;
        let content = self.read_file(path).await?;

        let postings = parse_postings(&content, file_type, &path.display().to_string())?;
        validate_postings(&postings)?;

        info!("Loaded {} postings from {}", postings.len(), path.display());
        Ok(postings)
    }

    async fn read_file(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached records for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(SkillRankerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading records from: {}", path.display());
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read records from {}", path.display()))?;

        if self.enable_cache {
            self.cache.insert(path_str, content.clone());
        }

        Ok(content)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| SkillRankerError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        match FileType::from_extension(extension) {
            FileType::Unknown => Err(SkillRankerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
            file_type => Ok(file_type),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
