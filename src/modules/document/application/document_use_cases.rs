use std::sync::Arc;

use crate::document::application::ports::incoming::use_cases::VerifyUploadUseCase;

#[derive(Clone)]
pub struct DocumentUseCases {
    pub verify_upload: Arc<dyn VerifyUploadUseCase + Send + Sync>,
}
