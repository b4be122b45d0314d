use actix_web::{HttpRequest, HttpResponse};

use crate::shared::api::ApiResponse;

/// Default service for every unmatched route.
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    let message = format!("Route not found: {} {}", req.method(), req.uri());
    ApiResponse::not_found(&message)
}
