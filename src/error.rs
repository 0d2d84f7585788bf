/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types shared by the HTTP client, the market service and the tracker

use std::error::Error as StdError;
use std::fmt;

/// Boxed underlying cause carried by [`AppError::NetworkError`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request address could not be built
    InvalidUrl,
    /// The response body could not be read
    NoData,
    /// The response could not be interpreted as an HTTP response
    InvalidResponse,
    /// Any other transport failure, with its cause
    NetworkError(BoxError),
    /// Non-success status, only produced by an explicit status check
    ServerError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Vec<u8>,
    },
    /// HTTP 401
    Unauthorized,
    /// HTTP 403
    Forbidden,
    /// HTTP 404
    NotFound,
    /// The request exceeded the configured timeout
    Timeout,
    /// The host could not be reached
    NoInternetConnection,
    /// A payload did not decode into the expected model
    Deserialization(String),
    /// Request parameters could not be encoded
    SerializationError(String),
    /// Caller supplied an unusable value (header name, header value, ...)
    InvalidInput(String),
    /// Raw JSON error
    Json(serde_json::Error),
    /// I/O error, mostly from the preference file
    Io(std::io::Error),
}

/// Convenience alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wraps any error or message as a [`AppError::NetworkError`]
    pub fn network<E: Into<BoxError>>(cause: E) -> Self {
        AppError::NetworkError(cause.into())
    }

    /// True for the failures that happen before or during transport
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::InvalidUrl
                | AppError::NoData
                | AppError::InvalidResponse
                | AppError::NetworkError(_)
                | AppError::Timeout
                | AppError::NoInternetConnection
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidUrl => write!(f, "invalid url"),
            AppError::NoData => write!(f, "no data received"),
            AppError::InvalidResponse => write!(f, "invalid response"),
            AppError::NetworkError(e) => write!(f, "network error: {e}"),
            AppError::ServerError { status, .. } => write!(f, "server error: {status}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Forbidden => write!(f, "forbidden"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Timeout => write!(f, "request timeout"),
            AppError::NoInternetConnection => write!(f, "no internet connection"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AppError::NetworkError(e) => Some(e.as_ref()),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<reqwest::Error> for AppError {
    /// Maps a transport failure onto the typed taxonomy
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Timeout
        } else if e.is_connect() {
            AppError::NoInternetConnection
        } else if e.is_builder() {
            AppError::InvalidUrl
        } else if e.is_redirect() {
            AppError::InvalidResponse
        } else if e.is_body() || e.is_decode() {
            AppError::NoData
        } else {
            AppError::NetworkError(Box::new(e))
        }
    }
}

impl From<reqwest::header::InvalidHeaderName> for AppError {
    fn from(e: reqwest::header::InvalidHeaderName) -> Self {
        AppError::InvalidInput(format!("invalid header name: {e}"))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidInput(format!("invalid header value: {e}"))
    }
}

impl From<image::ImageError> for AppError {
    fn from(e: image::ImageError) -> Self {
        AppError::network(format!("failed to convert image to data: {e}"))
    }
}
