use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use crate::document::application::ports::outgoing::{FileStore, StoreFileError, StoredFile};

/// Flat directory on the local filesystem.
///
/// Writes go to a uniquely named `.part` file first and are renamed over the
/// target, so concurrent uploads of the same name never interleave bytes.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    fn target_path(&self, file_name: &str) -> Result<PathBuf, StoreFileError> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None)
                if !file_name.contains(['/', '\\']) && !file_name.starts_with('.') =>
            {
                Ok(self.root.join(file_name))
            }
            _ => Err(StoreFileError::InvalidFileName(file_name.to_string())),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<StoredFile, StoreFileError> {
        let target = self.target_path(file_name)?;
        let partial = self.root.join(format!(".{}.part", Uuid::new_v4()));

        tokio::fs::write(&partial, bytes)
            .await
            .map_err(|e| StoreFileError::Io(format!("write {}: {e}", partial.display())))?;

        if let Err(e) = tokio::fs::rename(&partial, &target).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(StoreFileError::Io(format!(
                "rename into {}: {e}",
                target.display()
            )));
        }

        Ok(StoredFile {
            file_name: file_name.to_string(),
            size_bytes: bytes.len() as u64,
        })
    }

    async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
