// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Success envelope: `{"success": true, "message"?: ..., ...payload}`.
///
/// The payload must serialize as a map so its fields land next to `success`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Serialize, Clone)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Clone)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: None,
            data,
        })
    }

    pub fn success_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data,
        })
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data,
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageBody {
            success: true,
            message: message.to_string(),
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            success: false,
            message: message.to_string(),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
