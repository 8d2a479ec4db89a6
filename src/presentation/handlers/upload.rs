use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::application::services::TranslationMessage;
use crate::domain::{
    sanitize_filename, Document, JobId, StoragePath, TranslationRequest, TranslationStyle,
};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub job_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(error: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Accepts the multipart form, stages the file, registers the job, and hands
/// it to the worker queue. Returns as soon as the job is enqueued.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut file: Option<(String, Bytes)> = None;
    let mut api_key: Option<String> = None;
    let mut seed: Option<i64> = None;
    let mut style = TranslationStyle::default();
    let mut source_lang = "en".to_string();
    let mut target_lang = "fa".to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_owned).unwrap_or_default();
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read file bytes");
                        return bad_request(format!("Failed to read file: {}", e));
                    }
                };
                file = Some((filename, data));
            }
            Some("api_key") => {
                api_key = field.text().await.ok().filter(|key| !key.is_empty());
            }
            Some("seed") => {
                // Non-numeric seeds are ignored rather than failing the job.
                seed = field
                    .text()
                    .await
                    .ok()
                    .and_then(|s| s.trim().parse().ok());
            }
            Some("style") => {
                if let Ok(value) = field.text().await {
                    style = value.parse().unwrap_or_default();
                }
            }
            Some("source_lang") => {
                if let Ok(value) = field.text().await {
                    if !value.is_empty() {
                        source_lang = value;
                    }
                }
            }
            Some("target_lang") => {
                if let Ok(value) = field.text().await {
                    if !value.is_empty() {
                        target_lang = value;
                    }
                }
            }
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        tracing::warn!("Upload request with no file part");
        return bad_request("No file part");
    };
    if filename.is_empty() {
        return bad_request("No selected file");
    }
    let Some(api_key) = api_key else {
        return bad_request("API key is required");
    };

    let filename = sanitize_filename(&filename);
    let document = Document::new(filename.clone(), data.len() as u64);
    let storage_path = StoragePath::from_raw(filename.clone());

    if let Err(e) = state.upload_store.store(&storage_path, data).await {
        tracing::error!(error = %e, "Failed to stage uploaded file");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to store upload: {}", e),
            }),
        )
            .into_response();
    }

    let job_id = JobId::new();
    // The tracker entry must exist before the runner can touch this id.
    state.job_tracker.create(job_id);

    let msg = TranslationMessage {
        job_id,
        document,
        storage_path,
        request: TranslationRequest {
            api_key,
            source_lang,
            target_lang,
            style,
            seed,
        },
    };

    if let Err(e) = state.job_sender.send(msg).await {
        tracing::error!(error = %e, "Failed to enqueue translation job");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Translation queue unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(
        job_id = %job_id.as_uuid(),
        filename = %filename,
        "Translation job enqueued"
    );

    (
        StatusCode::OK,
        Json(UploadResponse {
            job_id: job_id.as_uuid().to_string(),
        }),
    )
        .into_response()
}
