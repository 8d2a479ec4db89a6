use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Job, JobId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProgressResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProgressResponse {
    fn not_found() -> Self {
        Self {
            status: "not_found".to_string(),
            progress: None,
            output: None,
            message: None,
        }
    }
}

impl From<Job> for ProgressResponse {
    fn from(job: Job) -> Self {
        Self {
            status: job.status.as_str().to_string(),
            progress: Some(job.progress),
            output: job.output.map(|path| path.as_str().to_string()),
            message: job.error_message,
        }
    }
}

/// Polling always succeeds; an unknown or malformed id reports `not_found`
/// in the body instead of an HTTP error.
#[tracing::instrument(skip(state))]
pub async fn progress_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let job = Uuid::parse_str(&job_id)
        .ok()
        .and_then(|uuid| state.job_tracker.get(JobId::from_uuid(uuid)));

    let body = match job {
        Some(job) => ProgressResponse::from(job),
        None => ProgressResponse::not_found(),
    };

    (StatusCode::OK, Json(body))
}
