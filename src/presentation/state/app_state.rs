use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{FileStore, JobTracker};
use crate::application::services::TranslationMessage;

#[derive(Clone)]
pub struct AppState {
    pub job_tracker: Arc<dyn JobTracker>,
    pub upload_store: Arc<dyn FileStore>,
    pub output_store: Arc<dyn FileStore>,
    pub job_sender: mpsc::Sender<TranslationMessage>,
}
