use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::document::application::ports::outgoing::{FileStore, StoreFileError, StoredFile};

/// In-memory store that remembers every write, in order.
#[derive(Clone, Default)]
pub struct RecordingFileStore {
    writes: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl RecordingFileStore {
    pub fn writes(&self) -> Vec<(String, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStore for RecordingFileStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<StoredFile, StoreFileError> {
        self.writes
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes.to_vec()));

        Ok(StoredFile {
            file_name: file_name.to_string(),
            size_bytes: bytes.len() as u64,
        })
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Store whose disk is always full.
#[derive(Clone)]
pub struct FailingFileStore;

#[async_trait]
impl FileStore for FailingFileStore {
    async fn store(&self, _file_name: &str, _bytes: &[u8]) -> Result<StoredFile, StoreFileError> {
        Err(StoreFileError::Io("disk full".to_string()))
    }

    async fn is_available(&self) -> bool {
        false
    }
}
