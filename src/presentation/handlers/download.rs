use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{DocumentFormat, JobId, JobStatus};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn not_ready() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "File not ready or not found".to_string(),
        }),
    )
        .into_response()
}

/// Streams the finished document as an attachment once the job completed.
#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    let job = Uuid::parse_str(&job_id)
        .ok()
        .and_then(|uuid| state.job_tracker.get(JobId::from_uuid(uuid)));

    let Some(job) = job else {
        return not_ready();
    };
    if job.status != JobStatus::Completed {
        return not_ready();
    }
    let Some(output) = job.output else {
        return not_ready();
    };

    match state.output_store.fetch(&output).await {
        Ok(bytes) => {
            let mime = DocumentFormat::from_filename(output.as_str())
                .map(|format| format.as_mime())
                .unwrap_or("application/octet-stream");
            let disposition = format!("attachment; filename=\"{}\"", output.as_str());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, output = %output, "Failed to read output file");
            not_ready()
        }
    }
}
