/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::HIDDEN_HEADER_VALUE;
use reqwest::Url;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// Header names whose values carry credentials
const SENSITIVE_HEADER_MARKERS: [&str; 5] = ["authorization", "cookie", "token", "secret", "api-key"];

/// True when the header value must not reach the logs
pub fn is_sensitive_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    SENSITIVE_HEADER_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// Value to print for a header, credentials replaced by `[HIDDEN]`
pub fn redact_header<'a>(name: &str, value: &'a str) -> &'a str {
    if is_sensitive_header(name) {
        HIDDEN_HEADER_VALUE
    } else {
        value
    }
}

/// Pretty JSON when the bytes decode as JSON, lossy text otherwise
pub fn pretty_body(data: &[u8]) -> String {
    serde_json::from_slice::<Value>(data)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or_else(|| String::from_utf8_lossy(data).into_owned())
}

/// Renders headers one per line, credentials redacted
pub fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let value = value.to_str().unwrap_or("<binary>");
            format!("   {}: {}", name, redact_header(name.as_str(), value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dumps an outgoing request
pub fn log_request(
    request_id: &str,
    method: &str,
    url: &Url,
    headers: &HeaderMap,
    body: Option<&[u8]>,
) {
    let body = match body {
        Some(data) if data.is_empty() => "None".to_string(),
        Some(data) => pretty_body(data),
        None => "None".to_string(),
    };
    info!(
        "API REQUEST [{}]\nURL: {}\nMethod: {}\nHeaders:\n{}\nParameters: {}",
        request_id,
        url,
        method,
        format_headers(headers),
        body
    );
}

/// Dumps a completed response
pub fn log_response(request_id: &str, status: u16, elapsed: Duration, data: &[u8]) {
    info!(
        "API RESPONSE [{}]\nStatus Code: {}\nCompleted in {:.2} seconds\nResponse Size: {} bytes\nResponse Data: {}",
        request_id,
        status,
        elapsed.as_secs_f64(),
        data.len(),
        pretty_body(data)
    );
}
