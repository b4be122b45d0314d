// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

/// Largest accepted JSON body.
pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request(&message),
            )
            .into()
        })
}

/// Unparsable path segments (e.g. an id that overflows) read as a missing resource.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::not_found("Resource not found"),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
            .into()
    })
}
