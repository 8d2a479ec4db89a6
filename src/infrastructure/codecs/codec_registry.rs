use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{CodecCatalog, DocumentCodec};
use crate::domain::DocumentFormat;

use super::docx_codec::DocxCodec;
use super::srt_codec::SrtCodec;

/// Capability table from document format to codec. New formats plug in with
/// `register` without touching the dispatch path.
pub struct CodecRegistry {
    codecs: HashMap<DocumentFormat, Arc<dyn DocumentCodec>>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    pub fn register(mut self, format: DocumentFormat, codec: Arc<dyn DocumentCodec>) -> Self {
        self.codecs.insert(format, codec);
        self
    }

    pub fn with_default_codecs() -> Self {
        Self::new()
            .register(DocumentFormat::Docx, Arc::new(DocxCodec))
            .register(DocumentFormat::Srt, Arc::new(SrtCodec))
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_default_codecs()
    }
}

impl CodecCatalog for CodecRegistry {
    fn for_format(&self, format: DocumentFormat) -> Option<Arc<dyn DocumentCodec>> {
        self.codecs.get(&format).map(Arc::clone)
    }
}
