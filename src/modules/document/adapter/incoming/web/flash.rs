//! One-shot messages carried from a rejected upload to the next form view.
//!
//! The cookie stores message codes, never free text, joined by `.`. Reading
//! happens through the [`FlashMessages`] extractor and the form response
//! removes the cookie, so every queued message is shown at most once.

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    http::header,
    Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use std::future::{ready, Ready};
use tracing::warn;

use crate::document::application::ports::incoming::use_cases::UploadCommandError;

pub const FLASH_COOKIE: &str = "flash";
const SEPARATOR: &str = ".";
const MAX_QUEUED: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    NoFileSelected,
    DisallowedExtension,
    FileTooLarge,
    InvalidDocumentType,
    InvalidFileType,
}

impl FlashMessage {
    pub fn code(&self) -> &'static str {
        match self {
            FlashMessage::NoFileSelected => "no_file",
            FlashMessage::DisallowedExtension => "bad_extension",
            FlashMessage::FileTooLarge => "too_large",
            FlashMessage::InvalidDocumentType => "bad_doc_type",
            FlashMessage::InvalidFileType => "bad_file_type",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "no_file" => Some(FlashMessage::NoFileSelected),
            "bad_extension" => Some(FlashMessage::DisallowedExtension),
            "too_large" => Some(FlashMessage::FileTooLarge),
            "bad_doc_type" => Some(FlashMessage::InvalidDocumentType),
            "bad_file_type" => Some(FlashMessage::InvalidFileType),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            FlashMessage::NoFileSelected => "No file selected!",
            FlashMessage::DisallowedExtension => "Only PDF, PNG, JPG, JPEG, GIF files allowed!",
            FlashMessage::FileTooLarge => "File is too large!",
            FlashMessage::InvalidDocumentType => "Please select a valid document type!",
            FlashMessage::InvalidFileType => "Please select a valid expected file type!",
        }
    }
}

impl From<&UploadCommandError> for FlashMessage {
    fn from(err: &UploadCommandError) -> Self {
        match err {
            UploadCommandError::NoFileSelected => FlashMessage::NoFileSelected,
            UploadCommandError::DisallowedExtension(_) => FlashMessage::DisallowedExtension,
            UploadCommandError::FileTooLarge(_) => FlashMessage::FileTooLarge,
            UploadCommandError::InvalidDocumentType(_) => FlashMessage::InvalidDocumentType,
            UploadCommandError::InvalidFileType(_) => FlashMessage::InvalidFileType,
        }
    }
}

/// Messages queued for this client. `present` is true whenever the cookie was
/// sent, even if none of its codes were recognized, so it still gets cleared.
#[derive(Debug, Clone, Default)]
pub struct FlashMessages {
    messages: Vec<FlashMessage>,
    present: bool,
}

impl FlashMessages {
    pub fn parse(raw: &str) -> Self {
        let messages = raw
            .split(SEPARATOR)
            .filter_map(FlashMessage::from_code)
            .take(MAX_QUEUED)
            .collect();

        Self {
            messages,
            present: true,
        }
    }

    pub fn messages(&self) -> &[FlashMessage] {
        &self.messages
    }

    pub fn texts(&self) -> Vec<&'static str> {
        self.messages.iter().map(FlashMessage::text).collect()
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    fn with(&self, message: FlashMessage) -> Vec<FlashMessage> {
        let mut queued = self.messages.clone();
        if queued.len() >= MAX_QUEUED {
            queued.remove(0);
        }
        queued.push(message);
        queued
    }
}

impl FromRequest for FlashMessages {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let flash = req
            .cookie(FLASH_COOKIE)
            .map(|c| FlashMessages::parse(c.value()))
            .unwrap_or_default();

        ready(Ok(flash))
    }
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// 303 back to `location` with `message` appended to whatever is still queued.
pub fn redirect_with_flash(
    location: &str,
    queued: &FlashMessages,
    message: FlashMessage,
) -> HttpResponse {
    let value = queued
        .with(message)
        .iter()
        .map(FlashMessage::code)
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(flash_cookie(value))
        .finish()
}

/// Marks the flash cookie as consumed on an outgoing response.
pub fn clear_flash(response: &mut HttpResponse) {
    if let Err(e) = response.add_removal_cookie(&flash_cookie(String::new())) {
        warn!("Failed to clear flash cookie: {}", e);
    }
}
