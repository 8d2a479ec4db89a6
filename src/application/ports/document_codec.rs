use std::sync::Arc;

use crate::domain::{DocumentFormat, TranslationUnit};

/// Decomposes a document into an ordered sequence of addressable text units
/// and reinserts replacement text at the same addresses, preserving all
/// non-text structure. Extraction and reinsertion walk the document in the
/// same deterministic order.
pub trait DocumentCodec: Send + Sync {
    fn extract(&self, data: &[u8]) -> Result<Vec<TranslationUnit>, CodecError>;

    /// Rebuild the document with the given unit texts. `force_rtl` right-aligns
    /// every non-empty text block in formats that carry alignment.
    fn reinsert(
        &self,
        data: &[u8],
        units: &[TranslationUnit],
        force_rtl: bool,
    ) -> Result<Vec<u8>, CodecError>;
}

/// Capability table from document format to the codec that handles it, open
/// to extension without touching the dispatch core.
pub trait CodecCatalog: Send + Sync {
    fn for_format(&self, format: DocumentFormat) -> Option<Arc<dyn DocumentCodec>>;
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("decode failed: {0}")]
    DecodeFailed(String),
    #[error("encode failed: {0}")]
    EncodeFailed(String),
    #[error("unit mismatch: document has {expected} units, {actual} supplied")]
    UnitMismatch { expected: usize, actual: usize },
}
