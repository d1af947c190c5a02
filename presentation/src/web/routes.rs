//! Web routes for the form UI.
//!
//! Three routes share one handler use case:
//! - `GET /` renders the blank form
//! - `POST /ask` (form-encoded) re-renders the page with the answer
//! - `POST /api/ask` (JSON) returns `{"answer": ...}` for programmatic use

use super::page::{self, AskOutcome};
use axum::{
    extract::{Form, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use scout_application::HandleQuestionUseCase;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state: the question handler (cheap to clone, all `Arc`s inside).
#[derive(Clone)]
pub struct AppState {
    handler: HandleQuestionUseCase,
}

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    question: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    answer: String,
}

/// Build the router for the web UI.
pub fn router(handler: HandleQuestionUseCase) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask_form))
        .route("/api/ask", post(ask_api))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { handler })
}

/// Bind and serve the web UI until the process exits.
pub async fn serve(addr: &str, handler: HandleQuestionUseCase) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Web UI listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(handler)).await
}

async fn index() -> Html<String> {
    Html(page::render(None))
}

async fn ask_form(State(state): State<AppState>, Form(form): Form<AskForm>) -> Html<String> {
    let answer = state.handler.handle(&form.question).await;
    Html(page::render(Some(&AskOutcome {
        question: form.question,
        answer,
    })))
}

async fn ask_api(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
    let answer = state.handler.handle(&request.question).await;
    Json(AskResponse { answer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scout_application::ports::research_runner::{ExecutionFailed, ResearchRunner};
    use scout_domain::{Model, ResearchTask, ResearcherProfile};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedRunner(Result<String, ExecutionFailed>);

    #[async_trait]
    impl ResearchRunner for FixedRunner {
        async fn run(&self, _task: ResearchTask) -> Result<String, ExecutionFailed> {
            self.0.clone()
        }
    }

    fn test_router(outcome: Result<String, ExecutionFailed>) -> Router {
        let handler = HandleQuestionUseCase::new(
            Arc::new(ResearcherProfile::web_researcher(Model::default())),
            Arc::new(FixedRunner(outcome)),
        );
        router(handler)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let app = test_router(Ok("unused".to_string()));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<textarea"));
    }

    #[tokio::test]
    async fn test_api_ask_returns_answer() {
        let app = test_router(Ok("4".to_string()));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/api/ask")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(r#"{"question": "What is 2+2?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["answer"], "4");
    }

    #[tokio::test]
    async fn test_api_ask_blank_question_gets_prompt_message() {
        let app = test_router(Ok("unused".to_string()));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/api/ask")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(r#"{"question": "   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_string(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["answer"], "Please enter a question.");
    }

    #[tokio::test]
    async fn test_form_ask_shows_error_in_answer_block() {
        let app = test_router(Err(ExecutionFailed::new("timeout")));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/ask")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(axum::body::Body::from("question=X"))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_string(response).await;
        assert!(body.contains("Error: timeout"));
    }
}
