use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "development")]
    pub environment: String,
}

/// Liveness check. No upstream calls.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses((status = 200, description = "Server is running", body = HealthResponse))
)]
#[get("/api/health")]
pub async fn health(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success_with_message(
        "EcoPlan API is running",
        HealthResponse {
            status: "OK".to_string(),
            timestamp: Utc::now(),
            environment: data.environment_name.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_reports_environment() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(app_state).service(health)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["environment"], "test");
        assert!(body["timestamp"].is_string());
    }
}
