/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::{AppError, AppResult};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// Raw outcome of a completed HTTP exchange.
///
/// The client never turns a status code into an error on its own; callers
/// inspect [`ApiResponse::status_code`] or opt in with
/// [`ApiResponse::error_for_status`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Response body bytes
    pub data: Vec<u8>,
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HeaderMap,
}

impl ApiResponse {
    /// Creates a response from its parts
    pub fn new(data: Vec<u8>, status_code: u16, headers: HeaderMap) -> Self {
        Self {
            data,
            status_code,
            headers,
        }
    }

    /// True for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Body size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the body is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    /// Decodes the body as JSON into `T`
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_slice(&self.data).map_err(|e| AppError::Deserialization(e.to_string()))
    }

    /// Maps non-2xx statuses to the matching error, passes 2xx through
    pub fn error_for_status(self) -> AppResult<Self> {
        match self.status_code {
            200..=299 => Ok(self),
            401 => Err(AppError::Unauthorized),
            403 => Err(AppError::Forbidden),
            404 => Err(AppError::NotFound),
            status => Err(AppError::ServerError {
                status,
                body: self.data,
            }),
        }
    }
}
