pub mod modules;
pub use modules::document;
pub mod health;
pub mod shared;

use crate::document::adapter::outgoing::LocalFileStore;
use crate::document::application::document_use_cases::DocumentUseCases;
use crate::document::application::domain::policies::upload_policy::UploadPolicy;
use crate::document::application::ports::incoming::services::VerifyUploadService;
use crate::document::application::ports::outgoing::FileStore;
use crate::shared::config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub document: DocumentUseCases,
    pub upload_policy: UploadPolicy,
    pub file_store: Arc<dyn FileStore + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    config::load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let port = config::server_port()?;
    let upload_policy = UploadPolicy::from_env();

    let file_store = LocalFileStore::new(upload_policy.upload_dir.clone());
    file_store.ensure_root().await.with_context(|| {
        format!(
            "Failed to create upload directory {}",
            file_store.root().display()
        )
    })?;

    let verify_upload = VerifyUploadService::new(file_store.clone());

    let state = AppState {
        document: DocumentUseCases {
            verify_upload: Arc::new(verify_upload),
        },
        upload_policy,
        file_store: Arc::new(file_store),
    };

    info!(
        host = config::BIND_HOST,
        port = port,
        upload_dir = %state.upload_policy.upload_dir.display(),
        "Server listening"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind((config::BIND_HOST, port))
    .with_context(|| format!("Failed to bind {}:{}", config::BIND_HOST, port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Document upload
    cfg.service(crate::document::adapter::incoming::web::routes::upload_form_handler);
    cfg.service(crate::document::adapter::incoming::web::routes::upload_document_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
