// src/shared/config.rs
use anyhow::Context;

pub const DEFAULT_PORT: u16 = 10000;
pub const BIND_HOST: &str = "0.0.0.0";

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`. Both are optional.
pub fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

pub fn server_port() -> anyhow::Result<u16> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .with_context(|| format!("PORT must be a valid u16, got {value:?}")),
    }
}
