use async_trait::async_trait;

/// Location of a file after it has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreFileError {
    #[error("Invalid storage file name: {0}")]
    InvalidFileName(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Port for persisting uploaded bytes.
///
/// `file_name` must already be a sanitized basename. Writing an existing
/// name replaces the previous file (last write wins).
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<StoredFile, StoreFileError>;

    /// Readiness check: can the store accept writes right now.
    async fn is_available(&self) -> bool;
}
