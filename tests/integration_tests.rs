//! Integration tests for the skill ranker

use skill_ranker::config::{Config, OutputFormat};
use skill_ranker::input::InputManager;
use skill_ranker::output::{RankingReport, ReportGenerator};
use skill_ranker::processing::{rank, CandidateProfile, Posting, Ranker};
use skill_ranker::SkillRankerError;
use std::path::Path;
use tempfile::tempdir;

#[tokio::test]
async fn test_reference_scenario_from_fixtures() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let postings = manager
        .load_postings(Path::new("tests/fixtures/postings.json"))
        .await
        .unwrap();

    let results = rank(&candidate, &postings);

    let ids: Vec<&str> = results.iter().map(|r| r.posting.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);

    assert_eq!(results[0].vsps, 0.73);
    assert_eq!(results[0].cosine_similarity, 0.383);
    assert_eq!(results[0].trust_score, 0.864);
    assert_eq!(results[0].final_score, 0.242);

    assert_eq!(results[1].trust_score, 0.922);
    assert_eq!(results[2].trust_score, 0.922);
    assert_eq!(results[1].final_score, 0.0);
    assert_eq!(results[2].final_score, 0.0);
}

#[tokio::test]
async fn test_toml_postings_and_candidate() {
    let dir = tempdir().unwrap();
    let candidate_path = dir.path().join("candidate.toml");
    std::fs::write(
        &candidate_path,
        r#"
id = "student-2"
name = "Arjun"
verifiedSkills = ["python", "django"]
accuracy = 0.8
speed = 0.6
skipPenalty = 0.1
"#,
    )
    .unwrap();

    let mut manager = InputManager::new();
    let candidate = manager.load_candidate(&candidate_path).await.unwrap();
    let postings = manager
        .load_postings(Path::new("tests/fixtures/postings.toml"))
        .await
        .unwrap();
    assert_eq!(postings.len(), 3);

    let results = rank(&candidate, &postings);
    let ids: Vec<&str> = results.iter().map(|r| r.posting.id.as_str()).collect();

    // "python" occurs in three of four documents, so its idf is ln(4/4) = 0 and
    // only the posting that also mentions "django" gets any text relevance.
    assert_eq!(ids, vec!["int-1", "int-3", "int-5"]);
    assert!(results[0].cosine_similarity > 0.0);
    assert_eq!(results[1].cosine_similarity, 0.0);
    assert_eq!(results[2].cosine_similarity, 0.0);

    // No assessment recency on file: unrated posting trust is 0.7 * accuracy
    assert_eq!(results[2].trust_score, 0.56);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/postings.json");

    let first = manager.load_postings(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_postings(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.load_postings(Path::new("tests/fixtures/postings.csv")).await;
    assert!(matches!(result, Err(SkillRankerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.load_candidate(Path::new("tests/fixtures/nonexistent.json")).await;
    assert!(matches!(result, Err(SkillRankerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_unreadable_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("postings.json");
    std::fs::create_dir(&path).unwrap();

    let mut manager = InputManager::new();
    match manager.load_postings(&path).await {
        Err(SkillRankerError::InvalidInput(message)) => {
            assert!(message.contains("Failed to read records from"));
            assert!(message.contains("postings.json"));
        }
        other => panic!("expected invalid input, got {:?}", other),
    }
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_out_of_range_candidate_is_rejected() {
    let mut manager = InputManager::new();
    let result = manager
        .load_candidate(Path::new("tests/fixtures/invalid_candidate.json"))
        .await;

    match result {
        Err(SkillRankerError::InvalidRecord(message)) => assert!(message.contains("accuracy")),
        other => panic!("expected invalid record, got {:?}", other),
    }
}

#[test]
fn test_empty_postings_rank_to_empty() {
    let candidate = CandidateProfile {
        id: "c".to_string(),
        name: "Nobody".to_string(),
        verified_skills: vec!["rust".to_string()],
        accuracy: 1.0,
        speed: 1.0,
        skip_penalty: 0.0,
        assessment_recency_days: Some(0),
    };
    let postings: Vec<Posting> = Vec::new();

    assert!(rank(&candidate, &postings).is_empty());
}

#[test]
fn test_config_driven_ranker_and_report() {
    let candidate: CandidateProfile =
        serde_json::from_str(&std::fs::read_to_string("tests/fixtures/candidate.json").unwrap()).unwrap();
    let postings: Vec<Posting> =
        serde_json::from_str(&std::fs::read_to_string("tests/fixtures/postings.json").unwrap()).unwrap();

    let mut config = Config::default();
    config.ranking.max_results = Some(2);
    let results = Ranker::from_config(&config).rank(&candidate, &postings);
    assert_eq!(results.len(), 2);

    let report = RankingReport::new(&candidate, postings.len(), results, 0);
    let generator = ReportGenerator::with_options(false, true, true, true);

    let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("Rails Developer Intern"));
    assert!(!markdown.contains("Marketing Intern"));
    assert!(markdown.contains("1 of 3 postings matched."));
}
