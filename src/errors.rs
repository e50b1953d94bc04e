//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Transport-level HTTP failure (connection, TLS, request build).
    Http(String),
    /// Non-2xx API response that survived classification.
    Api {
        /// HTTP status code of the failing response.
        status: u16,
        /// Structured `errorCode` from the response body, when present.
        code: Option<String>,
        /// Structured `message` from the body, or the HTTP reason phrase.
        message: String,
    },
    /// Requested domain object does not exist.
    NotFound(String),
    /// Target tenant is not available for seeding.
    Unavailable(String),
    /// File-system or I/O operation failure.
    Io(String),
    /// JSON serialization or response parsing failure.
    Json(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Http(msg) => write!(f, "http: {msg}"),
            Self::Api {
                status,
                code,
                message,
            } => match code {
                Some(code) => {
                    write!(f, "request failed due to code {code}: {message}")
                }
                None => write!(f, "request failed with status {status}: {message}"),
            },
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Unavailable(msg) => write!(f, "unavailable: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
            Self::Json(msg) => write!(f, "json: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
