/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Convenience alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Every failure a job can run into
///
/// Transport failures (`Network`, `Unexpected`, `Unauthorized`, `NotFound`,
/// `RateLimitExceeded`, `Db`) come from talking to the outside world. The rest
/// are data failures: bad configuration, empty upstream resources and payloads
/// missing the fields a job needs.
#[derive(Debug)]
pub enum AppError {
    /// Request could not be sent or the body could not be read
    Network(reqwest::Error),
    /// Local I/O failure
    Io(std::io::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Postgres failure
    Db(sqlx::Error),
    /// Upstream answered with a non-success status not covered below
    Unexpected(StatusCode),
    /// Upstream rejected the credentials
    Unauthorized,
    /// Upstream resource does not exist
    NotFound,
    /// Upstream rate limit hit
    RateLimitExceeded,
    /// Required environment variable is not set
    MissingEnv(String),
    /// Environment variable is set to something unusable
    InvalidConfig(String),
    /// Upstream resource had nothing usable in it
    EmptyResource(String),
    /// Response did not have the expected shape
    Deserialization(String),
    /// Data store accepted the request but did not do what was asked
    Store(String),
    /// Notification provider refused the notification
    Notification(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Db(e) => write!(f, "database error: {e}"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::MissingEnv(v) => write!(f, "missing environment variable: {v}"),
            AppError::InvalidConfig(m) => write!(f, "invalid configuration: {m}"),
            AppError::EmptyResource(m) => write!(f, "empty resource: {m}"),
            AppError::Deserialization(m) => write!(f, "deserialization error: {m}"),
            AppError::Store(m) => write!(f, "store error: {m}"),
            AppError::Notification(m) => write!(f, "notification error: {m}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Db(e) => Some(e),
            _ => None,
        }
    }
}

impl AppError {
    /// True for failures caused by talking to a remote service, false for
    /// configuration and data problems
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_)
                | AppError::Db(_)
                | AppError::Unexpected(_)
                | AppError::Unauthorized
                | AppError::NotFound
                | AppError::RateLimitExceeded
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}
