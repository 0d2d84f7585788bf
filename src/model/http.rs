/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::application::config::{RateLimiterConfig, RestApiConfig};
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{DEFAULT_JPEG_QUALITY, USER_AGENT};
use crate::error::{AppError, AppResult};
use crate::model::requests::{
    HttpMethod, append_query, encode_json_body, header_map, merge_headers, normalize_base_url,
    parameter_pairs, resolve_url,
};
use crate::model::responses::ApiResponse;
use crate::model::utils::{log_request, log_response};
use crate::utils::id::get_id;
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use reqwest::Client as HttpInternalClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Url};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Mutable part of the client, swapped by [`HttpClient::configure`]
#[derive(Debug, Clone)]
struct ClientSettings {
    base_url: String,
    default_headers: HeaderMap,
    debug_logging: bool,
}

/// Generic JSON-over-HTTPS client.
///
/// Holds a base address, a default header set and a debug flag, and issues
/// requests through a single pooled `reqwest` client with a fixed timeout.
/// It only reports transport outcomes:
/// - every completed exchange is an [`ApiResponse`], whatever its status
/// - transport failures map onto [`AppError`]
/// - nothing is retried
///
/// Cloning is cheap and clones share settings, pool and rate limiter.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    settings: Arc<RwLock<ClientSettings>>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Creates a client from the REST configuration
    ///
    /// # Arguments
    /// * `config` - Base address, timeout, extra default headers and debug flag
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to use
    /// * `Err(AppError)` - If a configured header is invalid or the TLS backend fails
    pub fn new(config: &RestApiConfig) -> AppResult<Self> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .build()
            .map_err(AppError::network)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let extra = header_map(&header_pairs(&config.default_headers))?;
        default_headers = merge_headers(&default_headers, &extra);

        Ok(Self {
            http_client,
            settings: Arc::new(RwLock::new(ClientSettings {
                base_url: normalize_base_url(&config.base_url),
                default_headers,
                debug_logging: config.debug_logging,
            })),
            rate_limiter: None,
        })
    }

    /// Throttles every request through a token bucket
    #[must_use]
    pub fn with_rate_limiter(mut self, config: &RateLimiterConfig) -> Self {
        self.rate_limiter = Some(RateLimiter::new(config));
        self
    }

    /// Sets the base address and merges `default_headers` into the defaults.
    ///
    /// One trailing slash is stripped from `base_url`. Later calls win per
    /// header name.
    pub async fn configure(
        &self,
        base_url: &str,
        default_headers: &[(&str, &str)],
        debug_logging: bool,
    ) -> AppResult<()> {
        let extra = header_map(default_headers)?;
        let mut settings = self.settings.write().await;
        settings.base_url = normalize_base_url(base_url);
        settings.default_headers = merge_headers(&settings.default_headers, &extra);
        settings.debug_logging = debug_logging;
        if debug_logging {
            info!("Configured HttpClient with base url: {}", settings.base_url);
        }
        Ok(())
    }

    /// Sets `Authorization: <scheme> <token>` on every following request
    pub async fn set_auth_token(&self, token: &str, scheme: &str) -> AppResult<()> {
        let mut value = HeaderValue::from_str(&format!("{scheme} {token}"))?;
        value.set_sensitive(true);
        let mut settings = self.settings.write().await;
        settings.default_headers.insert(AUTHORIZATION, value);
        debug!("Auth token set");
        Ok(())
    }

    /// Same as [`HttpClient::set_auth_token`] with the `Bearer` scheme
    pub async fn set_bearer_token(&self, token: &str) -> AppResult<()> {
        self.set_auth_token(token, "Bearer").await
    }

    /// Drops the `Authorization` default header
    pub async fn clear_auth_token(&self) {
        self.settings
            .write()
            .await
            .default_headers
            .remove(AUTHORIZATION);
        debug!("Auth token removed");
    }

    /// Current base address
    pub async fn base_url(&self) -> String {
        self.settings.read().await.base_url.clone()
    }

    /// Current default header set
    pub async fn default_headers(&self) -> HeaderMap {
        self.settings.read().await.default_headers.clone()
    }

    /// Whether request/response dumps are enabled
    pub async fn debug_logging(&self) -> bool {
        self.settings.read().await.debug_logging
    }

    /// Makes a GET request without parameters
    pub async fn get(&self, endpoint: &str) -> AppResult<ApiResponse> {
        self.request(endpoint, HttpMethod::Get, None::<&()>, &[])
            .await
    }

    /// Makes a GET request with `parameters` as query items
    pub async fn get_with_query<P: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        parameters: &P,
    ) -> AppResult<ApiResponse> {
        self.request(endpoint, HttpMethod::Get, Some(parameters), &[])
            .await
    }

    /// Makes a POST request with `body` as JSON
    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> AppResult<ApiResponse> {
        self.request(endpoint, HttpMethod::Post, Some(body), &[])
            .await
    }

    /// Makes a PUT request with `body` as JSON
    pub async fn put<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> AppResult<ApiResponse> {
        self.request(endpoint, HttpMethod::Put, Some(body), &[])
            .await
    }

    /// Makes a PATCH request with `body` as JSON
    pub async fn patch<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> AppResult<ApiResponse> {
        self.request(endpoint, HttpMethod::Patch, Some(body), &[])
            .await
    }

    /// Makes a DELETE request without body
    pub async fn delete(&self, endpoint: &str) -> AppResult<ApiResponse> {
        self.request(endpoint, HttpMethod::Delete, None::<&()>, &[])
            .await
    }

    /// Issues one request
    ///
    /// # Arguments
    /// * `endpoint` - Path relative to the base address, or an absolute `http(s)` address
    /// * `method` - HTTP verb
    /// * `parameters` - Query items for GET, JSON body otherwise
    /// * `headers` - Per-call headers, they win over the defaults
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - For any completed exchange, whatever the status
    /// * `Err(AppError)` - Encoding or transport failure
    pub async fn request<P: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        parameters: Option<&P>,
        headers: &[(&str, &str)],
    ) -> AppResult<ApiResponse> {
        let settings = self.settings.read().await.clone();
        let mut url = resolve_url(&settings.base_url, endpoint).inspect_err(|_| {
            error!("Invalid URL: {}{}", settings.base_url, endpoint);
        })?;
        let all_headers = merge_headers(&settings.default_headers, &header_map(headers)?);

        let mut body = None;
        if let Some(params) = parameters {
            match method {
                HttpMethod::Get => append_query(&mut url, params)?,
                _ => {
                    body = Some(encode_json_body(params).inspect_err(|e| {
                        error!("Failed to encode parameters: {}", e);
                    })?)
                }
            }
        }

        let request_id = get_id();
        if settings.debug_logging {
            log_request(&request_id, method.as_str(), &url, &all_headers, body.as_deref());
        }

        let mut request = self
            .http_client
            .request(method.into(), url)
            .headers(all_headers);
        if let Some(b) = body {
            request = request.body(b);
        }

        self.execute(request, &request_id, settings.debug_logging)
            .await
    }

    /// Uploads `data` as the `file` part of a multipart/form-data POST
    ///
    /// # Arguments
    /// * `endpoint` - Path or absolute address
    /// * `data` - File content
    /// * `file_name` - File name announced in the part
    /// * `mime_type` - Content type of the file part
    /// * `parameters` - Extra text parts, one per key
    /// * `headers` - Per-call headers
    pub async fn upload_data<P: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &[u8],
        file_name: &str,
        mime_type: &str,
        parameters: Option<&P>,
        headers: &[(&str, &str)],
    ) -> AppResult<ApiResponse> {
        let settings = self.settings.read().await.clone();
        let url = resolve_url(&settings.base_url, endpoint).inspect_err(|_| {
            error!("Invalid URL: {}{}", settings.base_url, endpoint);
        })?;

        let fields = match parameters {
            Some(params) => parameter_pairs(params)?,
            None => Vec::new(),
        };
        let form = upload_form(data, file_name, mime_type, &fields)?;

        let mut all_headers = merge_headers(&settings.default_headers, &header_map(headers)?);
        // Set by reqwest together with the form boundary
        all_headers.remove(CONTENT_TYPE);

        let request_id = get_id();
        if settings.debug_logging {
            log_request(&request_id, HttpMethod::Post.as_str(), &url, &all_headers, None);
            info!(
                "Uploading {} ({} bytes, {}) with {} extra fields",
                file_name,
                data.len(),
                mime_type,
                fields.len()
            );
        }

        let request = self
            .http_client
            .post(url)
            .headers(all_headers)
            .multipart(form);

        self.execute(request, &request_id, settings.debug_logging)
            .await
    }

    /// JPEG-encodes `image` at `quality` (1-100) and uploads it
    pub async fn upload_image<P: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        image: &DynamicImage,
        quality: u8,
        file_name: &str,
        parameters: Option<&P>,
        headers: &[(&str, &str)],
    ) -> AppResult<ApiResponse> {
        let data = encode_jpeg(image, quality)?;
        self.upload_data(endpoint, &data, file_name, "image/jpeg", parameters, headers)
            .await
    }

    /// Uploads `image` as `image.jpg` at the default quality
    pub async fn upload_image_default(
        &self,
        endpoint: &str,
        image: &DynamicImage,
    ) -> AppResult<ApiResponse> {
        self.upload_image(
            endpoint,
            image,
            DEFAULT_JPEG_QUALITY,
            "image.jpg",
            None::<&()>,
            &[],
        )
        .await
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        request_id: &str,
        debug_logging: bool,
    ) -> AppResult<ApiResponse> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.wait().await;
        }

        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            error!("[{}] Request failed: {}", request_id, e);
            AppError::from(e)
        })?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let data = response.bytes().await.map_err(|e| {
            error!("[{}] Failed to read response body: {}", request_id, e);
            AppError::from(e)
        })?;

        debug!(
            "[{}] Response status: {} in {:?}",
            request_id,
            status_code,
            start.elapsed()
        );
        if debug_logging {
            log_response(request_id, status_code, start.elapsed(), &data);
        }

        Ok(ApiResponse::new(data.to_vec(), status_code, headers))
    }
}

/// Builds the body of [`HttpClient::upload_data`]: one `file` part
/// followed by one text part per field, in order.
///
/// reqwest draws a fresh random boundary for every form.
pub fn upload_form(
    data: &[u8],
    file_name: &str,
    mime_type: &str,
    fields: &[(String, String)],
) -> AppResult<Form> {
    let part = Part::bytes(data.to_vec())
        .file_name(file_name.to_string())
        .mime_str(mime_type)
        .map_err(|e| AppError::InvalidInput(format!("invalid mime type {mime_type}: {e}")))?;
    Ok(fields
        .iter()
        .fold(Form::new().part("file", part), |form, (name, value)| {
            form.text(name.clone(), value.clone())
        }))
}

/// Encodes `image` as baseline JPEG, alpha dropped
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> AppResult<Vec<u8>> {
    if image.width() == 0 || image.height() == 0 {
        return Err(AppError::network("failed to convert image to data: empty image"));
    }
    let mut data = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut data, quality.clamp(1, 100));
    DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
    Ok(data)
}

/// Absolute address a request to `endpoint` would hit, without sending it
pub fn effective_url(base_url: &str, endpoint: &str) -> AppResult<Url> {
    resolve_url(&normalize_base_url(base_url), endpoint)
}

/// Converts owned header pairs into the borrowed form the client takes
pub fn header_pairs(headers: &HashMap<String, String>) -> Vec<(&str, &str)> {
    headers
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}
