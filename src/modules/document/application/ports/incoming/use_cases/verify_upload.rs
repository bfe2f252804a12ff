use async_trait::async_trait;

use crate::document::application::domain::{
    entities::{DocumentCategory, FileKind, VerificationOutcome},
    policies::{file_name_policy::storage_file_name, upload_policy::UploadPolicy},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadCommandError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("File type not allowed: {0}")]
    DisallowedExtension(String),

    #[error("File exceeds {0} bytes")]
    FileTooLarge(u64),

    #[error("Invalid document type: {0:?}")]
    InvalidDocumentType(Option<String>),

    #[error("Invalid expected file type: {0:?}")]
    InvalidFileType(Option<String>),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyUploadError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// File part exactly as it came off the wire.
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A submission that passed validation and is ready to be persisted.
#[derive(Debug, Clone)]
pub struct VerifyUploadCommand {
    category: DocumentCategory,
    expected: FileKind,
    actual: FileKind,
    original_name: String,
    storage_name: String,
    bytes: Vec<u8>,
}

impl VerifyUploadCommand {
    pub fn builder() -> VerifyUploadCommandBuilder {
        VerifyUploadCommandBuilder::default()
    }

    pub fn category(&self) -> DocumentCategory {
        self.category
    }
    pub fn expected(&self) -> FileKind {
        self.expected
    }
    pub fn actual(&self) -> FileKind {
        self.actual
    }
    pub fn original_name(&self) -> &str {
        &self.original_name
    }
    pub fn storage_name(&self) -> &str {
        &self.storage_name
    }
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[derive(Default)]
pub struct VerifyUploadCommandBuilder {
    doc_type: Option<String>,
    file_type: Option<String>,
    file: Option<UploadedFile>,
}

impl VerifyUploadCommandBuilder {
    pub fn doc_type(mut self, doc_type: Option<String>) -> Self {
        self.doc_type = doc_type;
        self
    }

    pub fn file_type(mut self, file_type: Option<String>) -> Self {
        self.file_type = file_type;
        self
    }

    pub fn file(mut self, file: Option<UploadedFile>) -> Self {
        self.file = file;
        self
    }

    /// Validates in a fixed order and stops at the first failure:
    /// file present, filename non-empty, extension allow-listed, size within
    /// the limit, then the two declared enumerations.
    pub fn build(self, policy: &UploadPolicy) -> Result<VerifyUploadCommand, UploadCommandError> {
        let file = self.file.ok_or(UploadCommandError::NoFileSelected)?;
        if file.file_name.is_empty() {
            return Err(UploadCommandError::NoFileSelected);
        }

        let ext = policy
            .allowed_extension(&file.file_name)
            .ok_or_else(|| UploadCommandError::DisallowedExtension(file.file_name.clone()))?;

        if file.bytes.len() as u64 > policy.max_file_size_bytes {
            return Err(UploadCommandError::FileTooLarge(policy.max_file_size_bytes));
        }

        let category = self
            .doc_type
            .as_deref()
            .and_then(|s| s.parse::<DocumentCategory>().ok())
            .ok_or_else(|| UploadCommandError::InvalidDocumentType(self.doc_type.clone()))?;

        let expected = self
            .file_type
            .as_deref()
            .and_then(|s| s.parse::<FileKind>().ok())
            .ok_or_else(|| UploadCommandError::InvalidFileType(self.file_type.clone()))?;

        Ok(VerifyUploadCommand {
            category,
            expected,
            actual: FileKind::from_extension(&ext),
            storage_name: storage_file_name(&file.file_name, &ext, policy.max_file_name_len),
            original_name: file.file_name,
            bytes: file.bytes,
        })
    }
}

#[async_trait]
pub trait VerifyUploadUseCase: Send + Sync {
    async fn execute(
        &self,
        command: VerifyUploadCommand,
    ) -> Result<VerificationOutcome, VerifyUploadError>;
}
