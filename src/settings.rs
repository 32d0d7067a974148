//! Runtime settings read from the environment (and `.env` when present).

use crate::error::AppError;
use std::str::FromStr;

/// Which store backs the products router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(AppError::Config(format!(
                "invalid STORAGE_BACKEND: {} (expected postgres or memory)",
                s
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub storage: StorageBackend,
    /// Versioned prefix; the products router is nested at `{api_v1_prefix}/products`.
    pub api_v1_prefix: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_max_connections: u32,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: "postgres://localhost/products".into(),
            storage: StorageBackend::Postgres,
            api_v1_prefix: "/api/v1".into(),
            server_host: "0.0.0.0".into(),
            server_port: 8080,
            db_max_connections: 5,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(url) = lookup("DATABASE_URL") {
            settings.database_url = url;
        }
        if let Some(backend) = lookup("STORAGE_BACKEND") {
            settings.storage = backend.parse()?;
        }
        if let Some(prefix) = lookup("API_V1_PREFIX") {
            settings.api_v1_prefix = normalize_prefix(&prefix)?;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            settings.server_host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            settings.server_port = parse_var("SERVER_PORT", &port)?;
        }
        if let Some(n) = lookup("DB_MAX_CONNECTIONS") {
            settings.db_max_connections = parse_var("DB_MAX_CONNECTIONS", &n)?;
        }
        if let Some(n) = lookup("MAX_BODY_BYTES") {
            settings.max_body_bytes = parse_var("MAX_BODY_BYTES", &n)?;
        }
        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Full path the products router is mounted at.
    pub fn products_path(&self) -> String {
        format!("{}/products", self.api_v1_prefix)
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid {}: {}", name, e)))
}

/// Prefix must start with `/`; trailing slashes are dropped. `/` alone means no prefix.
fn normalize_prefix(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(AppError::Config(format!(
            "invalid API_V1_PREFIX: {} (must start with '/')",
            raw
        )));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
