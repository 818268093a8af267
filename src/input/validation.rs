//! Range and finiteness checks for loaded records
//!
//! The scoring core assumes finite numbers and never rejects input itself,
//! so records are checked here, where they are constructed.

use crate::error::{Result, SkillRankerError};
use crate::processing::records::{CandidateProfile, Posting};

const MAX_RECRUITER_RATING: f64 = 5.0;

pub fn validate_candidate(candidate: &CandidateProfile) -> Result<()> {
    let fields = [
        ("accuracy", candidate.accuracy),
        ("speed", candidate.speed),
        ("skipPenalty", candidate.skip_penalty),
    ];

    for (name, value) in fields {
        check_range(&candidate.id, name, value, 1.0)?;
    }

    Ok(())
}

pub fn validate_posting(posting: &Posting) -> Result<()> {
    if let Some(rating) = posting.recruiter_rating {
        check_range(&posting.id, "recruiterRating", rating, MAX_RECRUITER_RATING)?;
    }

    Ok(())
}

pub fn validate_postings(postings: &[Posting]) -> Result<()> {
    postings.iter().try_for_each(validate_posting)
}

fn check_range(record_id: &str, field: &str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SkillRankerError::InvalidRecord(format!(
            "{}: {} must be a finite number",
            record_id, field
        )));
    }

    if !(0.0..=max).contains(&value) {
        return Err(SkillRankerError::InvalidRecord(format!(
            "{}: {} must be between 0 and {}, got {}",
            record_id, field, max, value
        )));
    }

    Ok(())
}
