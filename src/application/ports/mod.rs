mod document_codec;
mod file_store;
mod job_tracker;
mod translator;

pub use document_codec::{CodecCatalog, CodecError, DocumentCodec};
pub use file_store::{FileStore, FileStoreError};
pub use job_tracker::JobTracker;
pub use translator::{Translator, TranslatorError};
