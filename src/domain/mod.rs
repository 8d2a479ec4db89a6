mod document;
mod job;
mod job_status;
mod language;
mod storage_path;
mod style;
mod translation;
mod unit;

pub use document::{extension_of, Document, DocumentFormat, DocumentId};
pub use job::{Job, JobId};
pub use job_status::JobStatus;
pub use language::{is_rtl, RTL_LANGUAGE_CODES};
pub use storage_path::{sanitize_filename, StoragePath};
pub use style::TranslationStyle;
pub use translation::{TranslationOutcome, TranslationRequest};
pub use unit::{TranslationUnit, UnitAddress};
