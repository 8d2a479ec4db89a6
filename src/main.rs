use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use tarjuman::application::ports::{CodecCatalog, FileStore, JobTracker, Translator};
use tarjuman::application::services::{TranslationService, TranslationWorker};
use tarjuman::infrastructure::codecs::CodecRegistry;
use tarjuman::infrastructure::llm::{GeminiTranslator, GenerationSettings};
use tarjuman::infrastructure::observability::{init_tracing, TracingConfig};
use tarjuman::infrastructure::persistence::InMemoryJobTracker;
use tarjuman::infrastructure::storage::LocalFileStore;
use tarjuman::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    let job_tracker: Arc<dyn JobTracker> = Arc::new(InMemoryJobTracker::new());
    let upload_store: Arc<dyn FileStore> =
        Arc::new(LocalFileStore::new(settings.storage.upload_dir.clone())?);
    let output_store: Arc<dyn FileStore> =
        Arc::new(LocalFileStore::new(settings.storage.output_dir.clone())?);
    let codecs: Arc<dyn CodecCatalog> = Arc::new(CodecRegistry::with_default_codecs());
    let translator: Arc<dyn Translator> = Arc::new(GeminiTranslator::new(
        settings.translation.model.clone(),
        GenerationSettings::default(),
    ));

    let (job_sender, job_receiver) = mpsc::channel(64);

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
    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
