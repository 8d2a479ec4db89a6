use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<(), FileStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, FileStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
}
