use async_trait::async_trait;

use crate::document::application::{
    domain::entities::VerificationOutcome,
    ports::{
        incoming::use_cases::{VerifyUploadCommand, VerifyUploadError, VerifyUploadUseCase},
        outgoing::{FileStore, StoreFileError},
    },
};

pub struct VerifyUploadService<S>
where
    S: FileStore,
{
    file_store: S,
}

impl<S> VerifyUploadService<S>
where
    S: FileStore,
{
    pub fn new(file_store: S) -> Self {
        Self { file_store }
    }
}

#[async_trait]
impl<S> VerifyUploadUseCase for VerifyUploadService<S>
where
    S: FileStore + Send + Sync,
{
    async fn execute(
        &self,
        command: VerifyUploadCommand,
    ) -> Result<VerificationOutcome, VerifyUploadError> {
        let stored = self
            .file_store
            .store(command.storage_name(), command.bytes())
            .await
            .map_err(|err| match err {
                StoreFileError::InvalidFileName(e) | StoreFileError::Io(e) => {
                    VerifyUploadError::StorageError(e)
                }
            })?;

        let outcome = VerificationOutcome::new(
            command.category(),
            command.expected(),
            command.actual(),
            stored.file_name,
        );

        tracing::info!(
            file_name = %outcome.file_name,
            size_bytes = stored.size_bytes,
            category = %outcome.category,
            expected = %outcome.expected,
            actual = %outcome.actual,
            verified = outcome.is_verified,
            "document stored"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};

    use crate::document::application::domain::{
        entities::{DocumentCategory, FileKind},
        policies::upload_policy::UploadPolicy,
    };
    use crate::document::application::ports::{
        incoming::use_cases::UploadedFile, outgoing::StoredFile,
    };

    mock! {
        pub FileStoreMock {}
        #[async_trait]
        impl FileStore for FileStoreMock {
            async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<StoredFile, StoreFileError>;
            async fn is_available(&self) -> bool;
        }
    }

    fn command(name: &str, declared: &str) -> VerifyUploadCommand {
        VerifyUploadCommand::builder()
            .doc_type(Some("Warranty".to_string()))
            .file_type(Some(declared.to_string()))
            .file(Some(UploadedFile {
                file_name: name.to_string(),
                bytes: vec![1, 2, 3],
            }))
            .build(&UploadPolicy::new("uploads"))
            .unwrap()
    }

    #[tokio::test]
    async fn test_execute_stores_under_sanitized_name_and_verifies() {
        let mut store = MockFileStoreMock::new();
        store
            .expect_store()
            .with(eq("report.PDF"), eq(&[1u8, 2, 3][..]))
            .times(1)
            .returning(|name, bytes| {
                Ok(StoredFile {
                    file_name: name.to_string(),
                    size_bytes: bytes.len() as u64,
                })
            });

        let service = VerifyUploadService::new(store);
        let outcome = service.execute(command("report.PDF", "PDF")).await.unwrap();

        assert_eq!(outcome.category, DocumentCategory::Warranty);
        assert_eq!(outcome.expected, FileKind::Pdf);
        assert_eq!(outcome.actual, FileKind::Pdf);
        assert_eq!(outcome.file_name, "report.PDF");
        assert!(outcome.is_verified);
    }

    #[tokio::test]
    async fn test_execute_mismatched_kind_is_not_verified() {
        let mut store = MockFileStoreMock::new();
        store.expect_store().times(1).returning(|name, _| {
            Ok(StoredFile {
                file_name: name.to_string(),
                size_bytes: 3,
            })
        });

        let service = VerifyUploadService::new(store);
        let outcome = service.execute(command("photo.jpg", "PDF")).await.unwrap();

        assert_eq!(outcome.actual, FileKind::Image);
        assert!(!outcome.is_verified);
    }

    #[tokio::test]
    async fn test_execute_traversal_name_never_reaches_store_raw() {
        let mut store = MockFileStoreMock::new();
        store
            .expect_store()
            .with(eq("etc_passwd.png"), always())
            .times(1)
            .returning(|name, _| {
                Ok(StoredFile {
                    file_name: name.to_string(),
                    size_bytes: 3,
                })
            });

        let service = VerifyUploadService::new(store);
        let outcome = service
            .execute(command("../../etc/passwd.png", "Image"))
            .await
            .unwrap();

        assert_eq!(outcome.file_name, "etc_passwd.png");
        assert!(outcome.is_verified);
    }

    #[tokio::test]
    async fn test_execute_maps_storage_failure() {
        let mut store = MockFileStoreMock::new();
        store
            .expect_store()
            .times(1)
            .returning(|_, _| Err(StoreFileError::Io("disk full".to_string())));

        let service = VerifyUploadService::new(store);
        let result = service.execute(command("a.gif", "Image")).await;

        assert!(
            matches!(result, Err(VerifyUploadError::StorageError(ref e)) if e == "disk full"),
            "Expected StorageError, got {:?}",
            result
        );
    }
}
