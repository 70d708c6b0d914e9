//! Router-level tests against a local fake of the Torre API.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{app_state_for, spawn_fake_torre, FakeTorre};
use skillscope::build_router;

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn distribution_is_empty_when_every_search_fails() {
    let fake = FakeTorre::failing(StatusCode::INTERNAL_SERVER_ERROR);
    let terms = fake.search_terms.clone();
    let base = spawn_fake_torre(fake).await;
    let app = build_router(app_state_for(&base));

    let (status, body) = get_json(app, "/api/analyze/skill-distribution?skill=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "skill": "rust", "distribution": [], "totalProfiles": 0, "source": "Torre.ai" })
    );
    assert_eq!(terms.lock().unwrap().len(), 5);
}

#[tokio::test]
async fn distribution_is_empty_when_upstream_is_unreachable() {
    // Nothing listens on port 1.
    let app = build_router(app_state_for("http://127.0.0.1:1"));

    let (status, body) = get_json(app, "/api/analyze/skill-distribution?skill=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalProfiles"], 0);
    assert_eq!(body["distribution"], json!([]));
}

#[tokio::test]
async fn senior_rust_engineer_lands_in_expert() {
    let fake = FakeTorre::with_results(vec![(
        "rust",
        json!({ "results": [ {
            "name": "Ferris",
            "professionalHeadline": "Senior Rust Engineer",
            "completion": 0.9,
            "weight": 1.2
        } ] }),
    )]);
    let base = spawn_fake_torre(fake).await;
    let app = build_router(app_state_for(&base));

    let (status, body) = get_json(app, "/api/analyze/skill-distribution?skill=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalProfiles"], 1);
    assert_eq!(
        body["distribution"],
        json!([ { "level": "expert", "percentage": 100, "count": 1, "averageExperience": null } ])
    );
}

#[tokio::test]
async fn distribution_counts_sum_to_total() {
    let profiles = |headlines: &[&str]| {
        json!({ "results": headlines
            .iter()
            .map(|h| json!({ "professionalHeadline": h }))
            .collect::<Vec<_>>() })
    };
    let fake = FakeTorre::with_results(vec![
        ("java", profiles(&["Principal Java Architect", "Student", "Intern"])),
        ("junior java trainee", profiles(&["", "Junior QA"])),
        ("senior java expert", json!({ "unexpected": true })),
    ]);
    let base = spawn_fake_torre(fake).await;
    let app = build_router(app_state_for(&base));

    let (_, body) = get_json(app, "/api/analyze/skill-distribution?skill=java").await;

    let entries = body["distribution"].as_array().unwrap();
    let counted: u64 = entries.iter().map(|e| e["count"].as_u64().unwrap()).sum();
    assert_eq!(body["totalProfiles"], 5);
    assert_eq!(counted, 5);
    let percent: u64 = entries.iter().map(|e| e["percentage"].as_u64().unwrap()).sum();
    assert!(percent <= 100);
}

#[tokio::test]
async fn missing_skill_parameter_is_rejected() {
    let app = build_router(app_state_for("http://127.0.0.1:1"));
    let response = app
        .oneshot(
            Request::get("/api/analyze/skill-distribution")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn compensation_is_annualized() {
    let base = spawn_fake_torre(FakeTorre::default()).await;
    let app = build_router(app_state_for(&base));

    let (status, body) = get_json(app, "/api/analyze/skill-compensation?skill=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["averageCompensation"], 80_000.0);
    assert_eq!(body["medianCompensation"], 70_000.0);
    assert_eq!(body["dataPoints"], 120);
    assert_eq!(body["periodicity"], "yearly");
}

#[tokio::test]
async fn compensation_upstream_failure_is_bad_gateway() {
    let base = spawn_fake_torre(FakeTorre::default()).await;
    let app = build_router(app_state_for(&base));

    let (status, body) = get_json(app, "/api/analyze/skill-compensation?skill=cobol").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn profile_text_is_entity_decoded() {
    let base = spawn_fake_torre(FakeTorre::default()).await;
    let app = build_router(app_state_for(&base));

    let (status, body) = get_json(app, "/api/profile/renee").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["person"]["name"], "Ren&eacute;e O'Hara");
    assert_eq!(body["person"]["professionalHeadline"], "Lead Rust & Go Engineer");
    assert_eq!(body["strengths"][0]["proficiency"], "expert");
}

#[tokio::test]
async fn profile_omits_absent_fields() {
    let base = spawn_fake_torre(FakeTorre::default()).await;
    let app = build_router(app_state_for(&base));

    let (status, body) = get_json(app, "/api/profile/renee").await;

    assert_eq!(status, StatusCode::OK);
    let person = body["person"].as_object().unwrap();
    assert!(!person.contains_key("id"));
    assert!(!person.contains_key("picture"));
    assert!(!person.contains_key("location"));
    assert!(body.get("experiences").is_none());
    assert!(body["strengths"][0].get("id").is_none());
}

#[tokio::test]
async fn encoded_username_stays_one_path_segment() {
    let base = spawn_fake_torre(FakeTorre::default()).await;

    for (uri, username) in [
        ("/api/profile/alice%2F..%2Fmallory", "alice/../mallory"),
        ("/api/profile/alice%3Fx=1", "alice?x=1"),
        ("/api/profile/alice%23frag", "alice#frag"),
    ] {
        let app = build_router(app_state_for(&base));
        let (status, body) = get_json(app, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["person"]["publicId"], username, "{uri}");
    }
}

#[tokio::test]
async fn dot_username_is_rejected() {
    let app = build_router(app_state_for("http://127.0.0.1:1"));

    let (status, body) = get_json(app, "/api/profile/%2E%2E").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let base = spawn_fake_torre(FakeTorre::default()).await;
    let app = build_router(app_state_for(&base));

    let (status, body) = get_json(app, "/api/profile/ghost").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn profile_health_is_not_treated_as_username() {
    let app = build_router(app_state_for("http://127.0.0.1:1"));
    let response = app
        .oneshot(Request::get("/api/profile/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Profile service is operational");
}

#[tokio::test]
async fn people_search_parses_stream() {
    let base = spawn_fake_torre(FakeTorre::default()).await;
    let app = build_router(app_state_for(&base));

    let response = app
        .oneshot(
            Request::post("/api/search/people")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"query":"rust","limit":10}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["results"][0]["username"], "ana");
    assert_eq!(body["results"][0]["picture"], "https://img/1.png");
    assert_eq!(body["pagination"]["totalResults"], 2);
}

#[tokio::test]
async fn people_search_rejects_blank_query() {
    let app = build_router(app_state_for("http://127.0.0.1:1"));
    let response = app
        .oneshot(
            Request::post("/api/search/people")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"query":"   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = build_router(app_state_for("http://127.0.0.1:1"));
    let (status, body) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "skillscope");
}
