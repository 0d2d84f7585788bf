use crypto_tracker::error::AppError;
use crypto_tracker::model::responses::ApiResponse;
use reqwest::header::HeaderMap;
use std::error::Error;

#[test]
fn test_app_error_display_simple_variants() {
    assert_eq!(AppError::InvalidUrl.to_string(), "invalid url");
    assert_eq!(AppError::NoData.to_string(), "no data received");
    assert_eq!(AppError::InvalidResponse.to_string(), "invalid response");
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(AppError::Forbidden.to_string(), "forbidden");
    assert_eq!(AppError::NotFound.to_string(), "not found");
    assert_eq!(AppError::Timeout.to_string(), "request timeout");
    assert_eq!(
        AppError::NoInternetConnection.to_string(),
        "no internet connection"
    );
}

#[test]
fn test_app_error_display_server_error() {
    let error = AppError::ServerError {
        status: 503,
        body: b"down".to_vec(),
    };
    assert_eq!(error.to_string(), "server error: 503");
}

#[test]
fn test_app_error_display_with_messages() {
    assert_eq!(
        AppError::Deserialization("bad listing".to_string()).to_string(),
        "deserialization error: bad listing"
    );
    assert_eq!(
        AppError::SerializationError("bad body".to_string()).to_string(),
        "serialization error: bad body"
    );
    assert_eq!(
        AppError::InvalidInput("bad header".to_string()).to_string(),
        "invalid input: bad header"
    );
}

#[test]
fn test_app_error_network_keeps_cause() {
    let error = AppError::network("failed to convert image to data");
    assert_eq!(
        error.to_string(),
        "network error: failed to convert image to data"
    );
    assert!(error.source().is_some());
    assert!(error.is_transport());
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_transport_classification() {
    assert!(AppError::Timeout.is_transport());
    assert!(AppError::NoInternetConnection.is_transport());
    assert!(!AppError::Deserialization("x".to_string()).is_transport());
    assert!(!AppError::Unauthorized.is_transport());
}

#[test]
fn test_error_for_status_mapping() {
    let response = |status| ApiResponse::new(b"{}".to_vec(), status, HeaderMap::new());

    assert!(response(200).error_for_status().is_ok());
    assert!(response(204).error_for_status().is_ok());
    assert!(matches!(
        response(401).error_for_status(),
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(
        response(403).error_for_status(),
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        response(404).error_for_status(),
        Err(AppError::NotFound)
    ));
    match response(429).error_for_status() {
        Err(AppError::ServerError { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, b"{}".to_vec());
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}
