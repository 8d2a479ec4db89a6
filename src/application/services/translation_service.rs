use std::sync::Arc;

use crate::application::ports::{
    CodecCatalog, CodecError, FileStore, FileStoreError, JobTracker, Translator,
};
use crate::domain::{
    Document, DocumentFormat, JobId, StoragePath, TranslationOutcome, TranslationRequest,
};

/// Fixed marker prepended to the input filename for the output file.
pub const OUTPUT_FILENAME_PREFIX: &str = "translated_";

/// Work order for one translation job, produced by the upload handler and
/// consumed by the worker.
pub struct TranslationMessage {
    pub job_id: JobId,
    pub document: Document,
    pub storage_path: StoragePath,
    pub request: TranslationRequest,
}

/// Drives one job end to end: extract units, translate each, reinsert,
/// persist the output, and keep the tracker current along the way.
pub struct TranslationService {
    codecs: Arc<dyn CodecCatalog>,
    translator: Arc<dyn Translator>,
    job_tracker: Arc<dyn JobTracker>,
    upload_store: Arc<dyn FileStore>,
    output_store: Arc<dyn FileStore>,
}

impl TranslationService {
    pub fn new(
        codecs: Arc<dyn CodecCatalog>,
        translator: Arc<dyn Translator>,
        job_tracker: Arc<dyn JobTracker>,
        upload_store: Arc<dyn FileStore>,
        output_store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            codecs,
            translator,
            job_tracker,
            upload_store,
            output_store,
        }
    }

    /// Top-level entry: every failure below is converted into `error` job
    /// status here and never propagates further.
    pub async fn run(&self, msg: TranslationMessage) {
        let job_id = msg.job_id;
        match self.process(&msg).await {
            Ok(output) => {
                self.job_tracker.set_completed(job_id, output.clone());
                tracing::info!(output = %output, "Translation completed");
            }
            Err(e) => {
                tracing::error!(error = %e, "Translation job failed");
                self.job_tracker.set_error(job_id, &e.to_string());
            }
        }
    }

    async fn process(&self, msg: &TranslationMessage) -> Result<StoragePath, TranslationJobError> {
        let codec = DocumentFormat::from_filename(&msg.document.filename)
            .and_then(|format| self.codecs.for_format(format))
            .ok_or_else(|| {
                TranslationJobError::UnsupportedFormat(
                    msg.document
                        .extension()
                        .unwrap_or_else(|| msg.document.filename.clone()),
                )
            })?;

        let data = self.upload_store.fetch(&msg.storage_path).await?;
        let mut units = codec.extract(&data)?;
        let total = units.len();
        tracing::debug!(units = total, "Extracted translation units");

        for (processed, unit) in units.iter_mut().enumerate() {
            if unit.is_translatable() {
                let outcome = self.translate_unit(&unit.text, &msg.request).await;
                unit.text = outcome.into_text();
            }
            self.job_tracker
                .set_progress(msg.job_id, progress_percent(processed + 1, total));
        }

        let output = codec.reinsert(&data, &units, msg.request.target_is_rtl())?;

        let output_path = StoragePath::from_raw(format!(
            "{}{}",
            OUTPUT_FILENAME_PREFIX, msg.document.filename
        ));
        self.output_store
            .store(&output_path, output.into())
            .await?;

        Ok(output_path)
    }

    /// Fail-open per unit: an API failure is logged and masked by keeping the
    /// original text, so one bad unit cannot abort the document.
    async fn translate_unit(
        &self,
        text: &str,
        request: &TranslationRequest,
    ) -> TranslationOutcome {
        match self.translator.translate(text, request).await {
            Ok(translated) => TranslationOutcome::Translated(translated),
            Err(e) => {
                tracing::warn!(error = %e, "Translation failed, keeping original text");
                TranslationOutcome::Unchanged {
                    text: text.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn progress_percent(processed: usize, total: usize) -> u8 {
    if total == 0 {
        0
    } else {
        ((processed * 100) / total) as u8
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationJobError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("file store: {0}")]
    Store(#[from] FileStoreError),
    #[error("codec: {0}")]
    Codec(#[from] CodecError),
}
