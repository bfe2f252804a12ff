use std::sync::Arc;

use actix_web::web;

use crate::document::application::document_use_cases::DocumentUseCases;
use crate::document::application::domain::policies::upload_policy::UploadPolicy;
use crate::document::application::ports::incoming::services::VerifyUploadService;
use crate::document::application::ports::incoming::use_cases::VerifyUploadUseCase;
use crate::document::application::ports::outgoing::FileStore;
use crate::tests::support::stubs::RecordingFileStore;
use crate::AppState;

pub struct TestAppStateBuilder {
    verify_upload: Arc<dyn VerifyUploadUseCase + Send + Sync>,
    file_store: Arc<dyn FileStore + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let store = RecordingFileStore::default();
        Self {
            verify_upload: Arc::new(VerifyUploadService::new(store.clone())),
            file_store: Arc::new(store),
            upload_policy: UploadPolicy::new("uploads"),
        }
    }
}

impl TestAppStateBuilder {
    /// Wires the real verification service on top of `store`.
    pub fn with_file_store(mut self, store: impl FileStore + Clone + 'static) -> Self {
        self.verify_upload = Arc::new(VerifyUploadService::new(store.clone()));
        self.file_store = Arc::new(store);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            document: DocumentUseCases {
                verify_upload: self.verify_upload,
            },
            upload_policy: self.upload_policy,
            file_store: self.file_store,
        })
    }
}
