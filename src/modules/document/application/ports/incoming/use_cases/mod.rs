mod verify_upload;
pub use verify_upload::{
    UploadCommandError, UploadedFile, VerifyUploadCommand, VerifyUploadCommandBuilder,
    VerifyUploadError, VerifyUploadUseCase,
};
