//! Local stand-in for the Torre endpoints, served by axum on an ephemeral port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use skillscope::{AppState, DistributionConfig, TorreClient, TorreEndpoints};

#[derive(Clone, Default)]
pub struct FakeTorre {
    /// `_search` bodies keyed by query term; unknown terms get no results.
    pub search_results: Arc<HashMap<String, Value>>,
    pub search_status: Option<StatusCode>,
    pub search_terms: Arc<Mutex<Vec<String>>>,
}

impl FakeTorre {
    pub fn with_results(results: Vec<(&str, Value)>) -> Self {
        Self {
            search_results: Arc::new(
                results
                    .into_iter()
                    .map(|(term, body)| (term.to_string(), body))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            search_status: Some(status),
            ..Self::default()
        }
    }
}

async fn handle_search(State(fake): State<FakeTorre>, Json(body): Json<Value>) -> Response {
    let term = body["query"]["term"].as_str().unwrap_or_default().to_string();
    fake.search_terms.lock().unwrap().push(term.clone());

    if let Some(status) = fake.search_status {
        return (status, "upstream unavailable").into_response();
    }

    let response = fake
        .search_results
        .get(&term)
        .cloned()
        .unwrap_or_else(|| json!({ "results": [] }));
    Json(response).into_response()
}

async fn handle_analyze(Json(body): Json<Value>) -> Response {
    if body["query"]["skill"]["term"] == "cobol" {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({
        "total": 120,
        "result": { "compensation": { "mean": 40.0, "suggested": 35.0, "min": 15.0, "max": 90.0 } }
    }))
    .into_response()
}

async fn handle_bio(Path(username): Path<String>) -> Response {
    if username == "ghost" {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }
    Json(json!({
        "person": {
            "name": "Ren&eacute;e O&#39;Hara",
            "professionalHeadline": "Lead Rust &amp; Go Engineer",
            "publicId": username
        },
        "strengths": [ { "name": "Rust", "proficiency": "expert", "weight": 4.0 } ]
    }))
    .into_response()
}

async fn handle_stream(Json(body): Json<Value>) -> String {
    assert_eq!(body["identityType"], "person");
    [
        r#"{"ggId":"1","name":"Ana","professionalHeadline":"Rust dev","imageUrl":"https://img/1.png","username":"ana"}"#,
        "",
        r#"{"meta":{"total":2}}"#,
        "garbage line",
        r#"{"ggId":"2","name":"Bo"}"#,
    ]
    .join("\n")
}

/// Serves `fake` and returns its base URL.
pub async fn spawn_fake_torre(fake: FakeTorre) -> String {
    let app = Router::new()
        .route("/people/_search", post(handle_search))
        .route("/people/_analyze", post(handle_analyze))
        .route("/api/genome/bios/:username", get(handle_bio))
        .route("/api/entities/_searchStream", post(handle_stream))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake torre");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> TorreClient {
    TorreClient::new(
        TorreEndpoints::with_base_url(base_url),
        Duration::from_secs(5),
        Duration::ZERO,
    )
    .expect("client")
}

pub fn app_state_for(base_url: &str) -> AppState {
    AppState::new(Arc::new(client_for(base_url)), DistributionConfig::default())
}
