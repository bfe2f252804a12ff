// src/modules/document/adapter/incoming/web/routes/upload_document.rs

use actix_multipart::{Multipart, MultipartError};
use actix_web::{post, web, HttpMessage, HttpRequest, Responder};
use askama::Template;
use futures::StreamExt;
use tracing::{error, warn};

use crate::document::adapter::incoming::web::flash::{
    redirect_with_flash, FlashMessage, FlashMessages,
};
use crate::document::application::domain::entities::VerificationOutcome;
use crate::document::application::domain::policies::upload_policy::UploadPolicy;
use crate::document::application::ports::incoming::use_cases::{
    UploadCommandError, UploadedFile, VerifyUploadCommand, VerifyUploadError,
};
use crate::shared::web::HtmlResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request form
// ──────────────────────────────────────────────────────────
//

/// Raw multipart fields. Only the first occurrence of each field counts.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub doc_type: Option<String>,
    pub file_type: Option<String>,
    pub file: Option<UploadedFile>,
}

#[derive(Debug, thiserror::Error)]
enum ReadFormError {
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("file part exceeds {0} bytes")]
    FileTooLarge(u64),

    #[error("field {0:?} exceeds {1} bytes")]
    FieldTooLarge(String, u64),
}

#[derive(Clone, Copy)]
enum Slot {
    File,
    DocType,
    FileType,
    Skip,
}

/// Reads the form with every kept part bounded by `policy`. Parts that are
/// not kept are drained without being buffered.
async fn read_upload_form(
    mut payload: Multipart,
    policy: &UploadPolicy,
) -> Result<UploadForm, ReadFormError> {
    let mut form = UploadForm::default();

    while let Some(field) = payload.next().await {
        let mut field = field?;
        let name = field.name().map(str::to_owned);
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);

        // A part with a filename is a file, without one it is a text field.
        let slot = match (name.as_deref(), file_name.is_some()) {
            (Some("file"), true) if form.file.is_none() => Slot::File,
            (Some("doc_type"), false) if form.doc_type.is_none() => Slot::DocType,
            (Some("file_type"), false) if form.file_type.is_none() => Slot::FileType,
            _ => Slot::Skip,
        };

        let limit = match slot {
            Slot::File => policy.max_file_size_bytes,
            _ => policy.max_field_bytes as u64,
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if matches!(slot, Slot::Skip) {
                continue;
            }
            if (bytes.len() + chunk.len()) as u64 > limit {
                return Err(match slot {
                    Slot::File => ReadFormError::FileTooLarge(limit),
                    _ => ReadFormError::FieldTooLarge(name.clone().unwrap_or_default(), limit),
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        match slot {
            Slot::File => {
                form.file = Some(UploadedFile {
                    file_name: file_name.unwrap_or_default(),
                    bytes,
                });
            }
            Slot::DocType => form.doc_type = Some(String::from_utf8_lossy(&bytes).into_owned()),
            Slot::FileType => form.file_type = Some(String::from_utf8_lossy(&bytes).into_owned()),
            Slot::Skip => {}
        }
    }

    Ok(form)
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.content_type().eq_ignore_ascii_case("multipart/form-data")
}

//
// ──────────────────────────────────────────────────────────
// Result view
// ──────────────────────────────────────────────────────────
//

#[derive(Template)]
#[template(path = "upload_result.html")]
struct UploadResultTemplate<'a> {
    outcome: &'a VerificationOutcome,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/upload")]
pub async fn upload_document_handler(
    req: HttpRequest,
    payload: web::Payload,
    flash: FlashMessages,
    data: web::Data<AppState>,
) -> impl Responder {
    // Anything that is not multipart cannot carry a file part.
    let form = if is_multipart(&req) {
        let multipart = Multipart::new(req.headers(), payload);
        match read_upload_form(multipart, &data.upload_policy).await {
            Ok(form) => form,
            Err(ReadFormError::FileTooLarge(limit)) => {
                let e = UploadCommandError::FileTooLarge(limit);
                warn!(reason = %e, "Upload rejected");
                return redirect_with_flash("/", &flash, FlashMessage::from(&e));
            }
            Err(e) => {
                warn!("Malformed multipart upload: {}", e);
                return HtmlResponse::bad_request("Malformed upload request");
            }
        }
    } else {
        UploadForm::default()
    };

    let command = match VerifyUploadCommand::builder()
        .doc_type(form.doc_type)
        .file_type(form.file_type)
        .file(form.file)
        .build(&data.upload_policy)
    {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(reason = %e, "Upload rejected");
            return redirect_with_flash("/", &flash, FlashMessage::from(&e));
        }
    };

    match data.document.verify_upload.execute(command).await {
        Ok(outcome) => HtmlResponse::render(&UploadResultTemplate { outcome: &outcome }),

        Err(VerifyUploadError::StorageError(e)) => {
            error!("Storage error saving upload: {}", e);
            HtmlResponse::internal_error()
        }
    }
}
