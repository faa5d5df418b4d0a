//! HTTP adapter - JSON API over the worry journal.
//!
//! Each screen has its own module with `dto`, `handlers`, and `routes`.
//! [`router`] merges them, adds request tracing, and sends every unknown
//! path back to `/`.

pub mod error;
pub mod journal;
pub mod problem_solving;
mod state;
pub mod worry_time;

use axum::{response::Redirect, Router};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse};
pub use journal::journal_routes;
pub use problem_solving::problem_solving_routes;
pub use state::{AppState, Envelope};
pub use worry_time::worry_time_routes;

/// Builds the complete application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(journal_routes())
        .merge(worry_time_routes())
        .merge(problem_solving_routes())
        .fallback(|| async { Redirect::to("/") })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::WorryApp;
    use crate::domain::triage::WorryTimeSettings;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let store = Arc::new(InMemoryKeyValueStore::new());
        router(AppState::new(WorryApp::load(store, WorryTimeSettings::default())))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    #[tokio::test]
    async fn unknown_path_redirects_home() {
        let router = test_router();
        let response = router
            .oneshot(Request::builder().uri("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn log_and_toggle_worry() {
        let router = test_router();

        let (status, body) = send(&router, Method::POST, "/log/worries", Some(json!({"content": "Pay rent"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["status"], "new");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (_, log) = send(&router, Method::GET, "/log", None).await;
        assert_eq!(log["data"]["worries"].as_array().unwrap().len(), 1);
        assert_eq!(log["data"]["schedule"]["time"], "18:00");

        let (status, body) = send(&router, Method::POST, &format!("/log/worries/{}/toggle", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["isDealtWith"], true);

        let (_, log) = send(&router, Method::GET, "/log", None).await;
        assert!(log["data"]["worries"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_worry_is_rejected() {
        let router = test_router();
        let (status, body) = send(&router, Method::POST, "/log/worries", Some(json!({"content": "  "}))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "EMPTY_FIELD");
    }

    #[tokio::test]
    async fn toggle_unknown_worry_is_404() {
        let router = test_router();
        let uri = format!("/log/worries/{}/toggle", crate::domain::foundation::WorryId::new());
        let (status, _) = send(&router, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::POST, "/log/worries/not-a-uuid/toggle", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn triage_to_completion() {
        let router = test_router();
        let (_, body) = send(&router, Method::POST, "/log/worries", Some(json!({"content": "Pay rent"}))).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&router, Method::POST, &format!("/worry-time/select/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["stage"], "deciding");
        assert_eq!(body["data"]["question"]["key"], "isHappeningNow");

        for _ in 0..4 {
            send(&router, Method::POST, "/worry-time/answer", Some(json!({"answer": true}))).await;
        }
        let (_, body) = send(&router, Method::GET, "/worry-time", None).await;
        assert_eq!(body["data"]["triage"]["stage"], "reflecting");
        assert_eq!(body["data"]["triage"]["categoryLabel"], "Action Required");

        let (status, _) = send(&router, Method::POST, "/worry-time/complete", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        send(&router, Method::PUT, "/worry-time/insights", Some(json!({"insights": "Set up autopay"}))).await;
        let (status, body) = send(&router, Method::POST, "/worry-time/complete", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["worry"]["status"], "completed");
        assert_eq!(body["data"]["worry"]["isDealtWith"], true);
        assert_eq!(body["data"]["triage"]["stage"], "idle");

        let (_, body) = send(&router, Method::GET, "/worry-time", None).await;
        assert_eq!(body["data"]["pastReflections"][0]["category"], "action-required");
    }

    #[tokio::test]
    async fn settings_validation() {
        let router = test_router();
        let (status, _) = send(&router, Method::PUT, "/worry-time/settings", Some(json!({"hour": 25, "minute": 0, "duration": 15}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = send(&router, Method::PUT, "/worry-time/settings", Some(json!({"hour": 9, "minute": 5, "duration": 20}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["time"], "09:05");
    }

    #[tokio::test]
    async fn wizard_gates_and_edits_draft() {
        let router = test_router();

        let (status, body) = send(&router, Method::POST, "/problem-solving/next", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "STEP_INCOMPLETE");

        let (status, body) = send(&router, Method::PUT, "/problem-solving/draft/worry", Some(json!({"value": "Money"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["canAdvance"], true);

        let (_, body) = send(&router, Method::POST, "/problem-solving/next", None).await;
        assert_eq!(body["data"]["wizard"]["step"]["key"], "practicalProblem");

        let (status, _) = send(&router, Method::POST, "/problem-solving/solutions", Some(json!({"text": "A"}))).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&router, Method::POST, "/problem-solving/solutions", Some(json!({"text": "A"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_FAILED");

        let (status, _) = send(&router, Method::DELETE, "/problem-solving/solutions/3", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, body) = send(&router, Method::POST, "/problem-solving/previous", None).await;
        assert_eq!(body["data"]["step"]["key"], "worry");

        let (_, body) = send(&router, Method::POST, "/problem-solving/reset", None).await;
        assert!(body["data"]["draft"]["solutions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn learn_is_static() {
        let router = test_router();
        let (status, body) = send(&router, Method::GET, "/learn", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Learn About Worry Postponement");
    }
}
