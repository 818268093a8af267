//! Candidate, posting and ranking result records

use serde::{Deserialize, Serialize};

/// A candidate as stored by the surrounding application.
///
/// Scores are expected in `[0, 1]`; `skip_penalty` grows as behaviour gets
/// worse. A missing `assessment_recency_days` means no recency signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub verified_skills: Vec<String>,
    pub accuracy: f64,
    pub speed: f64,
    pub skip_penalty: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_recency_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Recruiter rating on a 0-5 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_recency_days: Option<u32>,
}

/// One scored posting. Every score is clamped to `[0, 1]` and rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub posting: Posting,
    pub cosine_similarity: f64,
    pub vsps: f64,
    pub trust_score: f64,
    pub final_score: f64,
}

impl CandidateProfile {
    /// Text the candidate is vectorized from: verified skills joined by spaces.
    pub fn composite_text(&self) -> String {
        self.verified_skills.join(" ")
    }
}

impl Posting {
    /// Description followed by the required skills, space separated.
    pub fn composite_text(&self) -> String {
        format!("{} {}", self.description, self.required_skills.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_composite_text() {
        let candidate = CandidateProfile {
            id: "c-1".to_string(),
            name: "Ada".to_string(),
            verified_skills: vec!["python".to_string(), "django".to_string()],
            accuracy: 0.8,
            speed: 0.5,
            skip_penalty: 0.1,
            assessment_recency_days: None,
        };
        assert_eq!(candidate.composite_text(), "python django");
    }

    #[test]
    fn test_posting_composite_text_without_skills() {
        let posting = Posting {
            id: "p-1".to_string(),
            title: "Intern".to_string(),
            organization: String::new(),
            location: String::new(),
            description: "ruby rails developer wanted".to_string(),
            required_skills: Vec::new(),
            recruiter_rating: None,
            verification_recency_days: None,
        };
        assert_eq!(posting.composite_text(), "ruby rails developer wanted ");
    }

    #[test]
    fn test_deserialize_camel_case_posting() {
        let json = r#"{
            "id": "int-1",
            "title": "Backend Developer Intern",
            "organization": "NovaTech",
            "location": "Remote",
            "description": "Work on RESTful APIs",
            "requiredSkills": ["python", "sql"],
            "recruiterRating": 4.5,
            "verificationRecencyDays": 15
        }"#;

        let posting: Posting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.required_skills, vec!["python", "sql"]);
        assert_eq!(posting.recruiter_rating, Some(4.5));
        assert_eq!(posting.verification_recency_days, Some(15));
    }

    #[test]
    fn test_deserialize_candidate_without_recency() {
        let json = r#"{
            "id": "student-1",
            "name": "Riya",
            "verifiedSkills": ["python"],
            "accuracy": 0.9,
            "speed": 0.7,
            "skipPenalty": 0.2
        }"#;

        let candidate: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.assessment_recency_days, None);
        assert_eq!(candidate.skip_penalty, 0.2);
    }
}
