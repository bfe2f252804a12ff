mod verify_upload_service;
pub use verify_upload_service::VerifyUploadService;
