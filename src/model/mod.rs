/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// HTTP client with default headers, debug dumps and uploads
pub mod http;
/// Request models, URL and header helpers
pub mod requests;
/// Raw response model
pub mod responses;
/// Logging helpers for request and response dumps
pub mod utils;
