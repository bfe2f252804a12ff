pub mod html_response;

pub use html_response::HtmlResponse;
