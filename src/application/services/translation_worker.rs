use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use super::{TranslationMessage, TranslationService};

/// Background consumer of the job queue. Each received message is handed to
/// its own task, so submission never waits on translation work and one task
/// drives exactly one job to a terminal state.
pub struct TranslationWorker {
    receiver: mpsc::Receiver<TranslationMessage>,
    service: Arc<TranslationService>,
}

impl TranslationWorker {
    pub fn new(
        receiver: mpsc::Receiver<TranslationMessage>,
        service: Arc<TranslationService>,
    ) -> Self {
        Self { receiver, service }
    }

    pub async fn run(mut self) {
        tracing::info!("Translation worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "translation_job",
                job_id = %msg.job_id.as_uuid(),
                document_id = %msg.document.id.as_uuid(),
                filename = %msg.document.filename,
            );
            let service = Arc::clone(&self.service);
            tokio::spawn(async move { service.run(msg).await }.instrument(span));
        }
        tracing::info!("Translation worker stopped: channel closed");
    }
}
