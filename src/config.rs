//! Server configuration read from the environment (and `.env`).

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:3000,http://127.0.0.1:8080";
const DEFAULT_MAX_BATCH_SIZE: usize = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SERVER_PORT '{0}' is not a valid port number")]
    InvalidPort(String),
    #[error("MAX_BATCH_SIZE '{0}' must be a positive integer")]
    InvalidBatchSize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Largest number of documents accepted in one request
    pub max_batch_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: split_origins(DEFAULT_ALLOWED_ORIGINS),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("SERVER_HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.allowed_origins);

        let max_batch_size = match lookup("MAX_BATCH_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidBatchSize(raw)),
            },
            None => defaults.max_batch_size,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
            max_batch_size,
        })
    }
}

pub const EMPTY_BATCH_MESSAGE: &str = "Daftar dokumen kosong, kirim minimal satu data KTP.";

/// Rejection message for a batch of `len` documents: empty, or above `max`.
pub fn batch_rejection(len: usize, max: usize) -> Option<String> {
    if len == 0 {
        return Some(EMPTY_BATCH_MESSAGE.to_string());
    }
    (len > max).then(|| {
        format!(
            "Jumlah dokumen ({}) melebihi batas {} dokumen per permintaan",
            len, max
        )
    })
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
