use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower::ServiceExt;

use tarjuman::application::ports::{
    CodecCatalog, FileStore, JobTracker, Translator, TranslatorError,
};
use tarjuman::application::services::{TranslationService, TranslationWorker};
use tarjuman::domain::{Job, JobId, StoragePath, TranslationRequest};
use tarjuman::infrastructure::codecs::CodecRegistry;
use tarjuman::infrastructure::llm::MockTranslator;
use tarjuman::infrastructure::persistence::InMemoryJobTracker;
use tarjuman::infrastructure::storage::LocalFileStore;
use tarjuman::presentation::{create_router, AppState};

const BOUNDARY: &str = "test-boundary";

const SAMPLE_SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n\
                          2\n00:00:03,000 --> 00:00:04,000\nWorld\n";

/// Delegating tracker that counts `create` calls so tests can assert that a
/// rejected upload never registered a job.
struct CountingTracker {
    inner: InMemoryJobTracker,
    creates: AtomicUsize,
}

impl CountingTracker {
    fn new() -> Self {
        Self {
            inner: InMemoryJobTracker::new(),
            creates: AtomicUsize::new(0),
        }
    }
}

impl JobTracker for CountingTracker {
    fn create(&self, id: JobId) {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(id);
    }

    fn set_progress(&self, id: JobId, percent: u8) {
        self.inner.set_progress(id, percent);
    }

    fn set_completed(&self, id: JobId, output: StoragePath) {
        self.inner.set_completed(id, output);
    }

    fn set_error(&self, id: JobId, message: &str) {
        self.inner.set_error(id, message);
    }

    fn get(&self, id: JobId) -> Option<Job> {
        self.inner.get(id)
    }
}

struct SlowTranslator;

#[async_trait::async_trait]
impl Translator for SlowTranslator {
    async fn translate(
        &self,
        text: &str,
        _request: &TranslationRequest,
    ) -> Result<String, TranslatorError> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(text.to_string())
    }
}

struct TestApp {
    router: axum::Router,
    tracker: Arc<CountingTracker>,
    _upload_dir: TempDir,
    _output_dir: TempDir,
}

fn create_test_app(translator: Arc<dyn Translator>) -> TestApp {
    let upload_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let upload_store: Arc<dyn FileStore> =
        Arc::new(LocalFileStore::new(upload_dir.path().to_path_buf()).unwrap());
    let output_store: Arc<dyn FileStore> =
        Arc::new(LocalFileStore::new(output_dir.path().to_path_buf()).unwrap());
    let tracker = Arc::new(CountingTracker::new());
    let job_tracker: Arc<dyn JobTracker> = tracker.clone();
    let codecs: Arc<dyn CodecCatalog> = Arc::new(CodecRegistry::with_default_codecs());

    let (job_sender, job_receiver) = mpsc::channel(8);

    let service = Arc::new(TranslationService::new(
        codecs,
        translator,
        Arc::clone(&job_tracker),
        Arc::clone(&upload_store),
        Arc::clone(&output_store),
    ));
    tokio::spawn(TranslationWorker::new(job_receiver, service).run());

    let state = AppState {
        job_tracker,
        upload_store,
        output_store,
        job_sender,
    };

    TestApp {
        router: create_router(state),
        tracker,
        _upload_dir: upload_dir,
        _output_dir: output_dir,
    }
}

fn text_part(name: &str, value: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
    )
}

fn file_part(filename: &str, content: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n{content}\r\n"
    )
}

fn upload_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn poll_progress(router: &axum::Router, job_id: &str) -> serde_json::Value {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/progress/{job_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

async fn wait_for_completion(router: &axum::Router, job_id: &str) -> serde_json::Value {
    for _ in 0..200 {
        let body = poll_progress(router, job_id).await;
        match body["status"].as_str() {
            Some("completed") => return body,
            Some("error") => panic!("job failed: {body}"),
            _ => tokio::time::sleep(Duration::from_millis(10)).await,
        }
    }
    panic!("job did not complete in time");
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let app = create_test_app(Arc::new(MockTranslator));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_upload_without_api_key_then_returns_400_and_no_job_is_created() {
    let app = create_test_app(Arc::new(MockTranslator));

    let body = format!(
        "{}--{BOUNDARY}--\r\n",
        file_part("sample.srt", SAMPLE_SRT)
    );
    let response = app.router.clone().oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.tracker.creates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_upload_without_file_then_returns_400() {
    let app = create_test_app(Arc::new(MockTranslator));

    let body = format!(
        "{}--{BOUNDARY}--\r\n",
        text_part("api_key", "test-key")
    );
    let response = app.router.clone().oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.tracker.creates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_unknown_job_id_when_polling_then_returns_not_found_status_with_200() {
    let app = create_test_app(Arc::new(MockTranslator));

    let body = poll_progress(&app.router, "550e8400-e29b-41d4-a716-446655440000").await;

    assert_eq!(body["status"], "not_found");
}

#[tokio::test]
async fn given_malformed_job_id_when_polling_then_returns_not_found_status_with_200() {
    let app = create_test_app(Arc::new(MockTranslator));

    let body = poll_progress(&app.router, "not-a-uuid").await;

    assert_eq!(body["status"], "not_found");
}

#[tokio::test]
async fn given_srt_upload_when_job_completes_then_output_can_be_downloaded() {
    let app = create_test_app(Arc::new(MockTranslator));

    let body = format!(
        "{}{}{}{}{}--{BOUNDARY}--\r\n",
        file_part("sample.srt", SAMPLE_SRT),
        text_part("api_key", "test-key"),
        text_part("target_lang", "fa"),
        text_part("style", "colloquial"),
        text_part("seed", "42"),
    );
    let response = app.router.clone().oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let job_id = json_body(response).await["job_id"]
        .as_str()
        .unwrap()
        .to_string();

    let done = wait_for_completion(&app.router, &job_id).await;
    assert_eq!(done["progress"], 100);
    assert_eq!(done["output"], "translated_sample.srt");

    let download = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/download/{job_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(download.status(), StatusCode::OK);
    let disposition = download
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("translated_sample.srt"));

    let bytes = axum::body::to_bytes(download.into_body(), usize::MAX)
        .await
        .unwrap();
    let output = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(output.contains("[fa] Hello"));
    assert!(output.contains("00:00:01,000 --> 00:00:02,000"));
}

#[tokio::test]
async fn given_unsupported_extension_upload_then_job_reports_error_with_zero_progress() {
    let app = create_test_app(Arc::new(MockTranslator));

    let body = format!(
        "{}{}--{BOUNDARY}--\r\n",
        file_part("report.pdf", "%PDF-1.4"),
        text_part("api_key", "test-key"),
    );
    let response = app.router.clone().oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let job_id = json_body(response).await["job_id"]
        .as_str()
        .unwrap()
        .to_string();

    let mut body = poll_progress(&app.router, &job_id).await;
    for _ in 0..200 {
        if body["status"] == "error" {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        body = poll_progress(&app.router, &job_id).await;
    }

    assert_eq!(body["status"], "error");
    assert_eq!(body["progress"], 0);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("unsupported file format"));
}

#[tokio::test]
async fn given_job_still_running_when_downloading_then_returns_404() {
    let app = create_test_app(Arc::new(SlowTranslator));

    let body = format!(
        "{}{}--{BOUNDARY}--\r\n",
        file_part("sample.srt", SAMPLE_SRT),
        text_part("api_key", "test-key"),
    );
    let response = app.router.clone().oneshot(upload_request(body)).await.unwrap();
    let job_id = json_body(response).await["job_id"]
        .as_str()
        .unwrap()
        .to_string();

    let download = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/download/{job_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(download.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_unknown_job_id_when_downloading_then_returns_404() {
    let app = create_test_app(Arc::new(MockTranslator));

    let download = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/download/550e8400-e29b-41d4-a716-446655440000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(download.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_request_with_id_when_any_endpoint_then_response_echoes_request_id() {
    let app = create_test_app(Arc::new(MockTranslator));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "test-request-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-123"
    );
}
