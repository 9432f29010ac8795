//! Integration tests for the originality check pipeline.
//!
//! These tests exercise the full fan-out → collect → rank → verdict
//! pipeline using in-memory fakes (no network calls). External providers
//! are exercised through unreachable endpoint overrides for the fail-open
//! paths; live provider tests are marked `#[ignore]` for manual/periodic
//! validation with real credentials.

use std::sync::{Arc, Mutex};

use serde_json::json;

use originality::orchestrator::aggregate::{assemble_verdict, overall_similarity, rank_matches};
use originality::{
    ArchivedSubmission, CheckConfig, CheckVerdict, MatchSource, SourceMatch, SubmissionArchive,
    VerdictSink,
};

fn make_match(source: MatchSource, reference: &str, similarity: f64) -> SourceMatch {
    SourceMatch {
        source,
        reference: reference.to_string(),
        similarity,
        title: format!("Title for {reference}"),
        excerpt: format!("Excerpt for {reference}"),
    }
}

/// No credentials, caching off — deterministic offline behaviour.
fn offline_config() -> CheckConfig {
    CheckConfig {
        cache_ttl_seconds: 0,
        ..Default::default()
    }
}

struct MemoryArchive {
    submissions: Vec<ArchivedSubmission>,
}

impl MemoryArchive {
    fn empty() -> Self {
        Self {
            submissions: vec![],
        }
    }

    fn with(submissions: Vec<ArchivedSubmission>) -> Self {
        Self { submissions }
    }
}

impl SubmissionArchive for MemoryArchive {
    async fn approved_excluding(
        &self,
        exclude_id: &str,
    ) -> originality::Result<Vec<ArchivedSubmission>> {
        Ok(self
            .submissions
            .iter()
            .filter(|s| s.id != exclude_id)
            .cloned()
            .collect())
    }
}

struct RecordingSink {
    recorded: Mutex<Vec<CheckVerdict>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            recorded: Mutex::new(vec![]),
        }
    }
}

impl VerdictSink for RecordingSink {
    async fn record(&self, verdict: &CheckVerdict) -> originality::Result<()> {
        self.recorded
            .lock()
            .expect("sink lock")
            .push(verdict.clone());
        Ok(())
    }
}

fn submission(id: &str, title: &str, content: serde_json::Value) -> ArchivedSubmission {
    ArchivedSubmission {
        id: id.into(),
        title: title.into(),
        content,
    }
}

// ── Full check runs with in-memory fakes ───────────────────────────────

#[tokio::test]
async fn clean_submission_with_no_sources_passes() {
    let verdict = originality::check(
        "the quick brown fox",
        "sub-clean",
        &offline_config(),
        &MemoryArchive::empty(),
    )
    .await
    .expect("check should complete");

    assert!(verdict.matches.is_empty());
    assert!(verdict.overall_similarity.abs() < f64::EPSILON);
    assert!(verdict.passed);
}

#[tokio::test]
async fn submission_identical_to_approved_work_fails() {
    let text = "a campus navigation app using indoor bluetooth beacons";
    let archive = MemoryArchive::with(vec![
        submission("prior-nav", "Indoor navigation", json!(text)),
        submission("prior-other", "Unrelated", json!("hydroponic lettuce yield study")),
    ]);

    let verdict = originality::check(text, "sub-copy", &offline_config(), &archive)
        .await
        .expect("check should complete");

    assert!((verdict.overall_similarity - 100.0).abs() < f64::EPSILON);
    assert!(!verdict.passed);
    assert_eq!(verdict.matches.len(), 1);
    assert_eq!(verdict.matches[0].reference, "/admin/submissions/prior-nav");
}

#[tokio::test]
async fn dead_provider_degrades_coverage_not_the_check() {
    let text = "solar powered irrigation scheduling with soil sensors";
    let config = CheckConfig {
        web_api_key: Some("key".into()),
        web_engine_id: Some("engine".into()),
        web_endpoint: "http://127.0.0.1:9/customsearch/v1".into(),
        video_api_key: Some("vkey".into()),
        video_endpoint: "http://127.0.0.1:9/youtube/v3/search".into(),
        timeout_seconds: 1,
        ..offline_config()
    };
    let archive = MemoryArchive::with(vec![submission(
        "prior-solar",
        "Solar irrigation",
        json!(text),
    )]);

    let verdict = originality::check(text, "sub-degraded", &config, &archive)
        .await
        .expect("dead providers must not abort the check");

    // Both external branches failed open; the internal branch still found
    // the copy.
    assert_eq!(verdict.matches.len(), 1);
    assert_eq!(verdict.matches[0].source, MatchSource::Internal);
    assert!(!verdict.passed);
}

#[tokio::test]
async fn recheck_never_matches_itself() {
    let text = "an esp32 based air quality monitor for lecture halls";
    let archive = MemoryArchive::with(vec![
        submission("sub-self", "Air quality monitor", json!(text)),
        submission("prior-aq", "Earlier monitor", json!(text)),
    ]);

    let verdict = originality::check(text, "sub-self", &offline_config(), &archive)
        .await
        .expect("check should complete");

    assert_eq!(verdict.matches.len(), 1);
    assert_eq!(verdict.matches[0].reference, "/admin/submissions/prior-aq");
}

#[tokio::test]
async fn low_overlap_internal_matches_filtered_as_noise() {
    // {project, report, submission, draft} vs {project, final, thesis,
    // paper, document}: 1/8 = 12.5%, below the 20 floor.
    let archive = MemoryArchive::with(vec![submission(
        "prior-boiler",
        "Boilerplate",
        json!("project final thesis paper document"),
    )]);

    let verdict = originality::check(
        "project report submission draft",
        "sub-noise",
        &offline_config(),
        &archive,
    )
    .await
    .expect("check should complete");

    assert!(verdict.matches.is_empty());
    assert!(verdict.passed);
}

// ── Aggregation pipeline with synthetic matches ────────────────────────

#[test]
fn merged_sources_ranked_and_gated() {
    // Web found two matches (30, 10), video one (5), internal none.
    let collected = vec![
        make_match(MatchSource::Web, "https://a.example.com", 30.0),
        make_match(MatchSource::Web, "https://b.example.com", 10.0),
        make_match(MatchSource::Video, "https://www.youtube.com/watch?v=x", 5.0),
    ];

    let verdict = assemble_verdict("sub-merge", collected.clone(), 25.0);
    let similarities: Vec<f64> = verdict.matches.iter().map(|m| m.similarity).collect();
    assert_eq!(similarities, vec![30.0, 10.0, 5.0]);
    assert!((verdict.overall_similarity - 30.0).abs() < f64::EPSILON);
    assert!(!verdict.passed);

    // The same matches pass under a higher threshold.
    let verdict = assemble_verdict("sub-merge", collected, 31.0);
    assert!(verdict.passed);
}

#[test]
fn equal_scores_keep_dispatch_order() {
    let collected = vec![
        make_match(MatchSource::Web, "web-ref", 40.0),
        make_match(MatchSource::Video, "video-ref", 40.0),
        make_match(MatchSource::Internal, "internal-ref", 40.0),
    ];

    let ranked = rank_matches(collected);
    let references: Vec<&str> = ranked.iter().map(|m| m.reference.as_str()).collect();
    assert_eq!(references, vec!["web-ref", "video-ref", "internal-ref"]);
}

#[test]
fn overall_similarity_is_the_maximum() {
    let collected = vec![
        make_match(MatchSource::Video, "v", 12.0),
        make_match(MatchSource::Web, "w", 61.5),
        make_match(MatchSource::Internal, "i", 33.0),
    ];
    assert!((overall_similarity(&collected) - 61.5).abs() < f64::EPSILON);
    assert!(overall_similarity(&[]).abs() < f64::EPSILON);
}

#[test]
fn boundary_similarity_does_not_pass() {
    let verdict = assemble_verdict(
        "sub-boundary",
        vec![make_match(MatchSource::Web, "w", 25.0)],
        25.0,
    );
    assert!(!verdict.passed);
}

#[test]
fn verdicts_survive_json_round_trip() {
    // The portal stores verdicts as JSON documents.
    let verdict = assemble_verdict(
        "sub-json",
        vec![
            make_match(MatchSource::Web, "https://a.example.com", 30.0),
            make_match(MatchSource::Internal, "/admin/submissions/p1", 28.0),
        ],
        25.0,
    );

    let json = serde_json::to_string(&verdict).expect("serialize");
    let decoded: CheckVerdict = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded.submission_id, "sub-json");
    assert_eq!(decoded.matches.len(), 2);
    assert_eq!(decoded.matches[0].source, MatchSource::Web);
    assert!(!decoded.passed);
}

// ── Fire-and-forget background runs ────────────────────────────────────

#[tokio::test]
async fn background_check_hands_verdict_to_sink() {
    let text = "a gesture controlled wheelchair prototype";
    let sink = Arc::new(RecordingSink::new());
    let archive = Arc::new(MemoryArchive::with(vec![submission(
        "prior-chair",
        "Wheelchair prototype",
        json!(text),
    )]));

    let handle = originality::spawn_check(
        text.into(),
        "sub-bg".into(),
        offline_config(),
        archive,
        Arc::clone(&sink),
    );
    handle.await.expect("background task should not panic");

    let recorded = sink.recorded.lock().expect("sink lock");
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].submission_id, "sub-bg");
    assert!(!recorded[0].passed);
    assert_eq!(recorded[0].matches.len(), 1);
}

#[tokio::test]
async fn concurrent_checks_do_not_interfere() {
    let sink = Arc::new(RecordingSink::new());
    let archive = Arc::new(MemoryArchive::empty());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            originality::spawn_check(
                format!("independent submission text number {i}"),
                format!("sub-par-{i}"),
                offline_config(),
                Arc::clone(&archive),
                Arc::clone(&sink),
            )
        })
        .collect();
    for handle in handles {
        handle.await.expect("background task should not panic");
    }

    let recorded = sink.recorded.lock().expect("sink lock");
    assert_eq!(recorded.len(), 4);
    let mut ids: Vec<&str> = recorded.iter().map(|v| v.submission_id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["sub-par-0", "sub-par-1", "sub-par-2", "sub-par-3"]);
}

// ── Live provider tests (require network and credentials) ──────────────
// Run with: cargo test --test check_integration live_ -- --ignored

#[tokio::test]
#[ignore]
async fn live_web_search_returns_scored_matches() {
    let config = CheckConfig::from_env();
    if config.web_credentials().is_none() {
        eprintln!("web provider credentials not set; skipping");
        return;
    }

    let verdict = originality::check(
        "the rust programming language empowers everyone to build reliable software",
        "live-sub-1",
        &config,
        &MemoryArchive::empty(),
    )
    .await
    .expect("live check should complete");

    for m in &verdict.matches {
        assert_eq!(m.source, MatchSource::Web);
        assert!(!m.reference.is_empty(), "match reference should not be empty");
        assert!(
            (0.0..=100.0).contains(&m.similarity),
            "similarity out of range: {}",
            m.similarity
        );
    }
}

#[tokio::test]
#[ignore]
async fn live_video_search_returns_watch_urls() {
    let config = CheckConfig::from_env();
    if config.video_credentials().is_none() {
        eprintln!("video provider credentials not set; skipping");
        return;
    }

    let verdict = originality::check(
        "introduction to machine learning lecture",
        "live-sub-2",
        &config,
        &MemoryArchive::empty(),
    )
    .await
    .expect("live check should complete");

    for m in &verdict.matches {
        assert!(
            m.reference.starts_with("https://www.youtube.com/watch?v="),
            "unexpected reference: {}",
            m.reference
        );
    }
}
