mod upload_document;
mod upload_form;

pub use upload_document::upload_document_handler;
pub use upload_form::upload_form_handler;
