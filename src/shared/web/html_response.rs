// src/shared/web/html_response.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use askama::Template;
use tracing::error;

pub struct HtmlResponse;

impl HtmlResponse {
    pub fn ok(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(header::ContentType::html())
            .body(body)
    }

    /// Renders a template into a 200 page, or a 500 page if rendering fails.
    pub fn render<T: Template>(template: &T) -> HttpResponse {
        match template.render() {
            Ok(body) => Self::ok(body),
            Err(e) => {
                error!("Template render failed: {}", e);
                Self::internal_error()
            }
        }
    }

    pub fn error(status: StatusCode, title: &str, message: &str) -> HttpResponse {
        let page = ErrorPageTemplate {
            status: status.as_u16(),
            title,
            message,
        };

        // Plain fallback keeps the error path free of a second render failure.
        let body = page
            .render()
            .unwrap_or_else(|_| format!("{} {}", status.as_u16(), title));

        HttpResponse::build(status)
            .content_type(header::ContentType::html())
            .body(body)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, "Bad Request", message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An unexpected error occurred",
        )
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate<'a> {
    status: u16,
    title: &'a str,
    message: &'a str,
}
