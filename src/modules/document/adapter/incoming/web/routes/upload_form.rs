// src/modules/document/adapter/incoming/web/routes/upload_form.rs

use actix_web::{get, web, Responder};
use askama::Template;

use crate::document::adapter::incoming::web::flash::{clear_flash, FlashMessages};
use crate::document::application::domain::entities::{DocumentCategory, FileKind};
use crate::shared::web::HtmlResponse;
use crate::AppState;

#[derive(Template)]
#[template(path = "upload_form.html")]
struct UploadFormTemplate<'a> {
    categories: &'a [DocumentCategory],
    file_kinds: &'a [FileKind],
    accept: String,
    messages: Vec<&'static str>,
}

#[get("/")]
pub async fn upload_form_handler(
    flash: FlashMessages,
    data: web::Data<AppState>,
) -> impl Responder {
    let template = UploadFormTemplate {
        categories: &DocumentCategory::ALL,
        file_kinds: &FileKind::ALL,
        accept: data.upload_policy.accept_attribute(),
        messages: flash.texts(),
    };

    let mut response = HtmlResponse::render(&template);
    if flash.is_present() {
        clear_flash(&mut response);
    }
    response
}
