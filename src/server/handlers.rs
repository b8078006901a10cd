use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use super::AppState;
use crate::scoring::{self, SentimentResult};

pub const SERVICE_NAME: &str = "sentiment-api";

/// Served at `/` when the configured index page cannot be read.
pub const FALLBACK_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
    <head><title>Sentiment Analysis API</title></head>
    <body style="font-family: Arial; padding: 50px; text-align: center;">
        <h1>Sentiment Analysis API</h1>
        <p>Score text from 1 (negative) to 10 (positive).</p>
        <p><code>POST /analyze</code> with <code>{"text": "..."}</code></p>
        <p><code>GET /health</code> for liveness checks</p>
    </body>
</html>
"#;

/// Request body for `POST /analyze`
#[derive(Debug, Clone, Deserialize)]
pub struct TextInput {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// GET / - index page from disk, or the built-in fallback
pub async fn root(State(state): State<Arc<AppState>>) -> Html<String> {
    match tokio::fs::read_to_string(&state.index_path).await {
        Ok(html) => Html(html),
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %state.index_path.display(),
                    error = %e,
                    "failed to read index page, serving fallback"
                );
            }
            Html(FALLBACK_INDEX_HTML.to_string())
        }
    }
}

/// GET /health - fixed liveness payload, no dependency checks
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// POST /analyze - score the submitted text
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<SentimentResult>, ApiError> {
    let Json(input) = payload?;
    let text = scoring::validate_text(&input.text)?.to_string();

    let analyzer = Arc::clone(&state.analyzer);
    let result = tokio::task::spawn_blocking(move || scoring::score(&text, analyzer.as_ref()))
        .await
        .map_err(|e| ApiError::Analysis(e.to_string()))??;

    tracing::debug!(
        score = result.sentiment_score,
        label = %result.sentiment_label,
        "analyzed text"
    );

    Ok(Json(result))
}
