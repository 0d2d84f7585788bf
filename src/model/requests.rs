/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{LISTING_ORDER, LISTING_PAGE, LISTING_PAGE_SIZE, VS_CURRENCY};
use crate::error::{AppError, AppResult};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// HTTP verbs supported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Parameters travel as query items
    #[default]
    Get,
    /// Parameters travel as a JSON body
    Post,
    /// Parameters travel as a JSON body
    Put,
    /// Parameters travel as a JSON body
    Patch,
    /// Parameters travel as a JSON body
    Delete,
}

impl HttpMethod {
    /// Upper-case verb as sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Query of the market listing endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketListingQuery {
    /// Quote currency
    pub vs_currency: String,
    /// Sort order
    pub order: String,
    /// Number of assets per page
    pub per_page: u32,
    /// Page index
    pub page: u32,
    /// Whether to include the 7-day sparkline
    pub sparkline: bool,
}

impl Default for MarketListingQuery {
    fn default() -> Self {
        Self {
            vs_currency: VS_CURRENCY.to_string(),
            order: LISTING_ORDER.to_string(),
            per_page: LISTING_PAGE_SIZE,
            page: LISTING_PAGE,
            sparkline: false,
        }
    }
}

/// Query of the lightweight price endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplePriceQuery {
    /// Comma-joined asset identifiers
    pub ids: String,
    /// Quote currencies, comma-joined
    pub vs_currencies: String,
}

impl SimplePriceQuery {
    /// Builds the query for `ids`, quoted in USD
    pub fn new<S: AsRef<str>>(ids: &[S]) -> Self {
        Self {
            ids: ids
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(","),
            vs_currencies: VS_CURRENCY.to_string(),
        }
    }
}

/// Strips exactly one trailing slash from a base address
pub fn normalize_base_url(base_url: &str) -> String {
    base_url
        .strip_suffix('/')
        .unwrap_or(base_url)
        .to_string()
}

/// Resolves `endpoint` against `base_url` unless it is already absolute
pub fn resolve_url(base_url: &str, endpoint: &str) -> AppResult<Url> {
    let address = if endpoint.starts_with("http") {
        endpoint.to_string()
    } else {
        format!("{}/{}", base_url, endpoint.trim_start_matches('/'))
    };
    Url::parse(&address).map_err(|_| AppError::InvalidUrl)
}

/// Coerces a JSON value to the string sent as a query or form value
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flattens parameters into `(key, stringified value)` pairs.
///
/// The parameters must serialize to a JSON object.
pub fn parameter_pairs<P: Serialize + ?Sized>(parameters: &P) -> AppResult<Vec<(String, String)>> {
    match serde_json::to_value(parameters) {
        Ok(Value::Object(map)) => Ok(map
            .iter()
            .map(|(k, v)| (k.clone(), stringify_value(v)))
            .collect()),
        Ok(_) => Err(AppError::SerializationError(
            "parameters must serialize to a JSON object".to_string(),
        )),
        Err(e) => Err(AppError::SerializationError(e.to_string())),
    }
}

/// Adds every parameter to the query of `url`.
///
/// Existing items whose key is also a parameter are dropped, so each
/// parameter key appears exactly once. Other existing items are kept.
pub fn append_query<P: Serialize + ?Sized>(url: &mut Url, parameters: &P) -> AppResult<()> {
    let pairs = parameter_pairs(parameters)?;
    if pairs.is_empty() {
        return Ok(());
    }
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !pairs.iter().any(|(name, _)| name == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept.iter().chain(pairs.iter()));
    Ok(())
}

/// Encodes parameters as a JSON body
pub fn encode_json_body<P: Serialize + ?Sized>(parameters: &P) -> AppResult<Vec<u8>> {
    serde_json::to_vec(parameters).map_err(|e| AppError::SerializationError(e.to_string()))
}

/// Parses `(name, value)` pairs into a header map
pub fn header_map(headers: &[(&str, &str)]) -> AppResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        map.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }
    Ok(map)
}

/// Overlays `call` on top of `defaults`; names compare case-insensitively
/// and the call-level value wins
pub fn merge_headers(defaults: &HeaderMap, call: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for name in call.keys() {
        merged.remove(name);
        for value in call.get_all(name) {
            merged.append(name.clone(), value.clone());
        }
    }
    merged
}
