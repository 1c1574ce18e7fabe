// Integration tests for HackMatch

use actix_web::{test, web, App};
use hackmatch::config::RankingSettings;
use hackmatch::core::{CandidateFilter, CompatibilityEngine, RankOptions, RankedResults};
use hackmatch::MatchError;
use hackmatch::models::{CandidateItem, CatalogEntry, Profile};
use hackmatch::routes::{self, compat::AppState};
use hackmatch::services::TemplateGenerator;
use serde_json::{json, Value};
use std::sync::Arc;

fn create_test_profile() -> Profile {
    Profile::new("current_user")
        .with_music(["Techno", "Synthwave"])
        .with_movies(["Cyberpunk"])
        .with_interests(["AI", "Startups"])
        .with_cultural_clusters(["tech_innovators", "future_builders"])
        .with_skills(["Rust", "React"])
        .with_traits([80.0, 90.0, 70.0, 85.0])
}

fn create_teammate(id: &str, music: &[&str], traits: [f64; 4]) -> CandidateItem {
    CandidateItem::Teammate(
        Profile::new(id)
            .with_music(music.iter())
            .with_interests(["AI"])
            .with_cultural_clusters(["tech_innovators"])
            .with_traits(traits),
    )
}

fn create_event(id: &str, tags: &[&str]) -> CandidateItem {
    CandidateItem::Event(CatalogEntry::new(id, format!("Hackathon {}", id), tags.iter()))
}

fn create_pool() -> Vec<CandidateItem> {
    vec![
        create_event("ai-music", &["AI", "Techno", "Synthwave"]),
        create_teammate("aanya", &["Techno"], [85.0, 85.0, 75.0, 90.0]),
        create_event("cyberpunk-jam", &["Cyberpunk", "Gaming"]),
        create_event("gardening", &["Plants"]),
        create_teammate("david", &["Jazz"], [20.0, 30.0, 95.0, 40.0]),
        create_event("rust-summit", &["Rust", "Startups", "AI", "future_builders"]),
        create_event("empty", &[]),
    ]
}

fn ids(ranked: &RankedResults) -> Vec<String> {
    ranked
        .results
        .iter()
        .map(|r| r.candidate.id().to_string())
        .collect()
}

#[::core::prelude::v1::test]
fn test_integration_end_to_end_ranking() {
    let engine = CompatibilityEngine::default();
    let ranked = engine
        .rank(&create_test_profile(), &create_pool(), RankOptions::new())
        .unwrap();

    assert_eq!(ranked.total_candidates, 7);
    assert_eq!(ranked.results.len(), 7);
    assert_eq!(ranked.results[0].candidate.id(), "rust-summit");

    // All results should be sorted by score
    for i in 1..ranked.results.len() {
        assert!(
            ranked.results[i - 1].breakdown.overall_score >= ranked.results[i].breakdown.overall_score,
            "Results not sorted by score"
        );
    }

    for r in &ranked.results {
        let score = r.breakdown.overall_score;
        assert!((0.0..=100.0).contains(&score), "Score {} is out of range [0, 100]", score);
        assert!(!r.explanation.is_empty());
    }
}

#[::core::prelude::v1::test]
fn test_rank_is_deterministic() {
    let engine = CompatibilityEngine::default();
    let profile = create_test_profile();
    let pool = create_pool();

    let first = engine.rank(&profile, &pool, RankOptions::new()).unwrap();
    let second = engine.rank(&profile, &pool, RankOptions::new()).unwrap();

    assert_eq!(first, second);
}

#[::core::prelude::v1::test]
fn test_threshold_is_monotonic() {
    let engine = CompatibilityEngine::default();
    let profile = create_test_profile();
    let pool = create_pool();

    let thresholds = [0.0, 10.0, 25.0, 50.0, 75.0, 100.0];
    for pair in thresholds.windows(2) {
        let loose = ids(&engine.rank(&profile, &pool, RankOptions::new().with_threshold(pair[0])).unwrap());
        let strict = ids(&engine.rank(&profile, &pool, RankOptions::new().with_threshold(pair[1])).unwrap());

        assert!(strict.len() <= loose.len());
        assert!(strict.iter().all(|id| loose.contains(id)), "{:?} not within {:?}", strict, loose);
    }
}

#[::core::prelude::v1::test]
fn test_limit_returns_prefix() {
    let engine = CompatibilityEngine::default();
    let profile = create_test_profile();
    let pool = create_pool();

    let options = RankOptions::new().with_threshold(20.0);
    let unlimited = ids(&engine.rank(&profile, &pool, options).unwrap());

    for n in 0..=unlimited.len() + 2 {
        let limited = ids(&engine.rank(&profile, &pool, options.with_limit(n)).unwrap());
        assert_eq!(limited.len(), n.min(unlimited.len()));
        assert_eq!(limited[..], unlimited[..limited.len()]);
    }
}

#[::core::prelude::v1::test]
fn test_empty_pool_is_not_an_error() {
    let engine = CompatibilityEngine::default();
    let ranked = engine
        .rank(&create_test_profile(), &[], RankOptions::new().with_limit(5))
        .unwrap();

    assert!(ranked.results.is_empty());
    assert_eq!(ranked.total_candidates, 0);
}

#[::core::prelude::v1::test]
fn test_large_pool_parallel_scoring() {
    let engine = CompatibilityEngine::default();
    let profile = create_test_profile();
    let pool: Vec<CandidateItem> = (0..1000)
        .map(|i| {
            let tags = ["AI", "Techno", "Rust", "Startups", "Cyberpunk"];
            create_event(&i.to_string(), &tags[..i % tags.len()])
        })
        .collect();

    let ranked = engine.rank(&profile, &pool, RankOptions::new().with_limit(10)).unwrap();

    assert_eq!(ranked.total_candidates, 1000);
    assert_eq!(ranked.results.len(), 10);
    // 4-tag events score 100; the first one seen is candidate 4
    assert_eq!(ranked.results[0].candidate.id(), "4");
    assert!(ranked.results.iter().all(|r| r.breakdown.overall_score == 100.0));
}

fn app_state() -> AppState {
    AppState {
        engine: CompatibilityEngine::default(),
        generator: Arc::new(TemplateGenerator::new()),
        ranking: RankingSettings::default(),
    }
}

fn profile_json(id: &str, music: &[&str], clusters: &[&str], interests: &[&str], traits: [f64; 4]) -> Value {
    json!({
        "userId": id,
        "music": music,
        "culturalClusters": clusters,
        "interests": interests,
        "psychographicTraits": {
            "creativity": traits[0],
            "innovation": traits[1],
            "collaboration": traits[2],
            "techSavviness": traits[3]
        }
    })
}

#[actix_web::test]
async fn test_http_score_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = json!({
        "profileA": profile_json("a", &["Techno", "Synthwave"], &["tech_innovators"], &["AI"], [80.0, 90.0, 70.0, 85.0]),
        "profileB": profile_json("b", &["Techno", "Jazz"], &["tech_innovators", "creative_technologists"], &["AI", "Startups"], [75.0, 85.0, 75.0, 80.0]),
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/compat/score")
        .set_json(&body)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["breakdown"]["overallScore"], json!(55.0));
    assert_eq!(resp["breakdown"]["components"]["kind"], json!("teammate"));
    assert_eq!(resp["breakdown"]["components"]["culturalScore"], json!(50.0));
    assert_eq!(resp["breakdown"]["overlap"]["music"], json!(["Techno"]));
    assert_eq!(
        resp["explanation"],
        json!("You both love Techno music, share interests in AI, belong to similar cultural clusters.")
    );
}

#[actix_web::test]
async fn test_http_score_rejects_missing_traits() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = json!({
        "profileA": { "userId": "a", "psychographicTraits": { "creativity": 50 } },
        "profileB": profile_json("b", &[], &[], &[], [50.0; 4]),
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/compat/score")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_http_rank_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = json!({
        "profile": profile_json("me", &["Techno"], &["tech_innovators"], &["AI"], [50.0; 4]),
        "candidates": [
            { "kind": "event", "id": "e1", "name": "Quiet Hack", "tags": ["Knitting"] },
            { "kind": "event", "id": "e2", "name": "AI & Music Fusion Hack", "tags": ["AI", "Techno"] },
            { "kind": "projectIdea", "id": "p1", "name": "NeuroBeats", "tags": ["AI"] }
        ],
        "threshold": 10,
        "limit": 5
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/compat/rank")
        .set_json(&body)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["totalCandidates"], json!(3));
    let results = resp["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["candidate"]["id"], json!("e2"));
    assert_eq!(results[0]["breakdown"]["overallScore"], json!(50.0));
    assert_eq!(results[1]["candidate"]["kind"], json!("projectIdea"));
}

#[actix_web::test]
async fn test_http_rank_rejects_null_tags() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = json!({
        "profile": profile_json("me", &["Techno"], &[], &[], [50.0; 4]),
        "candidates": [{ "kind": "event", "id": "e1", "tags": null }]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/compat/rank")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_http_team_rank_and_suggestions() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = json!({
        "team": [
            profile_json("a", &["Electronic"], &[], &["AI"], [60.0; 4]),
            profile_json("b", &[], &[], &["Music"], [80.0; 4])
        ],
        "candidates": [
            { "kind": "projectIdea", "id": "ledger", "tags": ["Blockchain"] },
            { "kind": "projectIdea", "id": "neurobeats", "tags": ["AI", "Music", "Electronic"] }
        ]
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/compat/team-rank")
        .set_json(&body)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["results"][0]["candidate"]["id"], json!("neurobeats"));
    assert_eq!(resp["results"][0]["breakdown"]["overallScore"], json!(75.0));

    let req = test::TestRequest::post()
        .uri("/api/v1/suggestions/project")
        .set_json(&json!({ "idea": "AI music from brain signals", "teamSkills": [] }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["estimatedHours"], json!(48));
    assert_eq!(resp["difficulty"], json!("advanced"));

    let req = test::TestRequest::post()
        .uri("/api/v1/suggestions/aesthetic")
        .set_json(&json!({ "profile": { "userId": "a", "music": ["Synthwave"], "movies": ["Sci-Fi"] } }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["designStyle"], json!("Cyberpunk Neon"));
}

#[actix_web::test]
async fn test_http_explain_and_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = json!({
        "breakdown": {
            "overallScore": 40.0,
            "components": { "kind": "catalog", "matchScore": 40.0 },
            "overlap": { "interests": ["AI", "Startups", "Robotics"] }
        }
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/compat/explain")
        .set_json(&body)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        resp["explanation"],
        json!("share interests in AI, Startups, and Robotics.")
    );

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["status"], json!("healthy"));
}

#[::core::prelude::v1::test]
fn test_filtered_ranking_keeps_order() {
    let engine = CompatibilityEngine::default();
    let filter = CandidateFilter::new().with_required_tags(["AI"]);

    let ranked = engine
        .rank_filtered(&create_test_profile(), &create_pool(), &filter, RankOptions::new())
        .unwrap();

    assert_eq!(ids(&ranked), vec!["rust-summit", "ai-music", "aanya", "david"]);
    assert_eq!(ranked.total_candidates, 7);
}

#[::core::prelude::v1::test]
fn test_rank_rejects_invalid_profile_for_catalog_pool() {
    let engine = CompatibilityEngine::default();
    let profile = Profile::new("bad").with_interests(["AI"]).with_traits([500.0; 4]);
    let events = vec![create_event("ai", &["AI"])];

    let result = engine.rank(&profile, &events, RankOptions::new());
    assert!(matches!(result, Err(MatchError::InvalidInput(_))));
}

#[actix_web::test]
async fn test_http_rank_with_search_filters() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = json!({
        "profile": profile_json("me", &["Techno"], &["tech_innovators"], &["AI"], [50.0; 4]),
        "candidates": [
            { "kind": "event", "id": "e1", "name": "Climate Hack", "tags": ["AI", "Hybrid"] },
            { "kind": "event", "id": "e2", "name": "AI & Music Fusion Hack", "tags": ["AI", "Techno", "Remote"] },
            { "kind": "event", "id": "e3", "name": "Climate Sprint", "tags": ["Remote"] }
        ],
        "query": "climate",
        "requiredTags": ["hybrid", "Remote"]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/compat/rank")
        .set_json(&body)
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["totalCandidates"], json!(3));
    let ranked: Vec<&str> = resp["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["candidate"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ranked, vec!["e1", "e3"]);
}

#[actix_web::test]
async fn test_http_mentor_and_review() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/suggestions/mentor")
        .set_json(&json!({
            "description": "Brain waves to music",
            "progress": "Audio engine plays tones",
            "challenges": ["EEG headset drops packets"]
        }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["nextSteps"][0], json!("Unblock: EEG headset drops packets"));
    assert_eq!(resp["resources"][0]["type"], json!("documentation"));

    let req = test::TestRequest::post()
        .uri("/api/v1/suggestions/review")
        .set_json(&json!({ "code": "let x = y.unwrap();", "language": "rust" }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["overallScore"], json!(95));
    assert_eq!(resp["suggestions"][0]["type"], json!("improvement"));

    let req = test::TestRequest::post()
        .uri("/api/v1/suggestions/review")
        .set_json(&json!({ "code": "", "language": "rust" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}
