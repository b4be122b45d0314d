use actix_web::http::StatusCode;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::report::application::domain::entities::{
    Report, ReportFormat, ReportId, ReportKind, ReportPeriod, ReportStats, ReportStatus,
};
use crate::modules::report::application::ports::incoming::use_cases::{
    CreateReportError, CreateReportInput, ReportAccessError,
};
use crate::modules::report::application::ports::outgoing::ReportListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReportRequest {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    #[serde(default)]
    #[schema(example = "Executive report - Green corridor")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to "Multiple projects"
    #[serde(default)]
    #[schema(example = "Green corridor")]
    pub project: Option<String>,
    #[serde(default)]
    pub format: Option<ReportFormat>,
    /// Defaults to "pt-BR"
    #[serde(default)]
    pub language: Option<String>,
    /// Save without generating; finalize later.
    #[serde(default)]
    pub draft: bool,
}

impl From<CreateReportRequest> for CreateReportInput {
    fn from(req: CreateReportRequest) -> Self {
        CreateReportInput {
            kind: req.kind,
            title: req.title.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
            project: req.project.unwrap_or_default(),
            format: req.format.unwrap_or_default(),
            language: req.language.unwrap_or_default(),
            draft: req.draft,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReportListQuery {
    /// executive, technical, project or sustainability
    #[serde(rename = "type")]
    #[param(value_type = Option<String>)]
    pub kind: Option<ReportKind>,
    /// generating, draft or completed
    #[param(value_type = Option<String>)]
    pub status: Option<ReportStatus>,
    /// Matched against title, description and project
    pub search: Option<String>,
    /// today, week or month
    #[param(value_type = Option<String>)]
    pub period: Option<ReportPeriod>,
}

impl From<ReportListQuery> for ReportListFilter {
    fn from(q: ReportListQuery) -> Self {
        ReportListFilter {
            kind: q.kind,
            status: q.status,
            search: q.search,
            period: q.period,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ReportResponse {
    pub report: Report,
}

#[derive(Serialize, ToSchema)]
pub struct ReportListResponse {
    pub count: usize,
    pub reports: Vec<Report>,
}

#[derive(Serialize, ToSchema)]
pub struct ReportStatsResponse {
    pub stats: ReportStats,
}

fn access_error_response(e: ReportAccessError, id: ReportId, failure: &str) -> HttpResponse {
    match e {
        ReportAccessError::NotFound => ApiResponse::not_found("Report not found"),
        ReportAccessError::Forbidden => {
            warn!(report_id = %id, "Access to foreign report denied");
            ApiResponse::forbidden("Access denied to this report")
        }
        e @ ReportAccessError::WrongStatus(_) => {
            ApiResponse::error(StatusCode::CONFLICT, &e.to_string())
        }
        ReportAccessError::RepositoryError(msg) => {
            error!(report_id = %id, error = %msg, "{}", failure);
            ApiResponse::internal_error(failure)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Create a report
///
/// Generation is simulated in the background; poll the report for progress.
/// With `draft: true` the report is only saved.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    security(("bearer_auth" = [])),
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Report generating or saved as draft", body = ReportResponse),
        (status = 400, description = "Missing title or unknown type", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[post("/api/reports")]
pub async fn create_report_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateReportRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .report
        .create
        .execute(&user.user_id, req.into_inner().into())
        .await
    {
        Ok(report) => {
            let message = match report.status {
                ReportStatus::Draft => "Report saved as draft!",
                _ => "Report generation started!",
            };
            ApiResponse::created(message, ReportResponse { report })
        }
        Err(e @ CreateReportError::MissingTitle) => ApiResponse::bad_request(&e.to_string()),
        Err(CreateReportError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to create report: {}", msg);
            ApiResponse::internal_error("Error creating report")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportListQuery),
    responses(
        (status = 200, description = "Caller's reports, newest first", body = ReportListResponse),
        (status = 400, description = "Unknown type, status or period", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/reports")]
pub async fn list_reports_handler(
    user: AuthenticatedUser,
    query: web::Query<ReportListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ReportListFilter::from(query.into_inner());
    match data.report.list.execute(&user.user_id, filter).await {
        Ok(reports) => ApiResponse::success(ReportListResponse {
            count: reports.len(),
            reports,
        }),
        Err(e) => {
            error!(user_id = %user.user_id, "Failed to list reports: {}", e);
            ApiResponse::internal_error("Error fetching reports")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/reports/stats",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counters by status and month", body = ReportStatsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/reports/stats")]
pub async fn report_stats_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.report.stats.execute(&user.user_id).await {
        Ok(stats) => ApiResponse::success(ReportStatsResponse { stats }),
        Err(e) => {
            error!(user_id = %user.user_id, "Failed to compute report stats: {}", e);
            ApiResponse::internal_error("Error fetching report stats")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report with current progress", body = ReportResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
    )
)]
#[get("/api/reports/{id:\\d+}")]
pub async fn get_report_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ReportId::new(path.into_inner());
    match data.report.get.execute(&user.user_id, id).await {
        Ok(report) => ApiResponse::success(ReportResponse { report }),
        Err(e) => access_error_response(e, id, "Error fetching report"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report deleted", body = MessageResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
    )
)]
#[delete("/api/reports/{id:\\d+}")]
pub async fn delete_report_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ReportId::new(path.into_inner());
    match data.report.delete.execute(&user.user_id, id).await {
        Ok(()) => ApiResponse::message("Report deleted successfully!"),
        Err(e) => access_error_response(e, id, "Error deleting report"),
    }
}

/// Finalize a draft
///
/// The report is completed at once with its page, chart and size figures.
#[utoipa::path(
    post,
    path = "/api/reports/{id}/finalize",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report completed", body = ReportResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
        (status = 409, description = "Report is not a draft", body = ErrorResponse),
    )
)]
#[post("/api/reports/{id:\\d+}/finalize")]
pub async fn finalize_report_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ReportId::new(path.into_inner());
    match data.report.finalize.execute(&user.user_id, id).await {
        Ok(report) => ApiResponse::success_with_message(
            "Report finalized successfully!",
            ReportResponse { report },
        ),
        Err(ReportAccessError::WrongStatus(_)) => {
            ApiResponse::error(StatusCode::CONFLICT, "Only draft reports can be finalized")
        }
        Err(e) => access_error_response(e, id, "Error finalizing report"),
    }
}

/// Cancel a report that is still generating
///
/// The report is removed.
#[utoipa::path(
    post,
    path = "/api/reports/{id}/cancel",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("id" = u64, Path, description = "Report id")),
    responses(
        (status = 200, description = "Generation cancelled", body = MessageResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
        (status = 409, description = "Report is not generating", body = ErrorResponse),
    )
)]
#[post("/api/reports/{id:\\d+}/cancel")]
pub async fn cancel_report_handler(
    user: AuthenticatedUser,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = ReportId::new(path.into_inner());
    match data.report.cancel.execute(&user.user_id, id).await {
        Ok(()) => ApiResponse::message("Report generation cancelled"),
        Err(ReportAccessError::WrongStatus(_)) => ApiResponse::error(
            StatusCode::CONFLICT,
            "Only reports being generated can be cancelled",
        ),
        Err(e) => access_error_response(e, id, "Error cancelling report"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::report::adapter::outgoing::InMemoryReportStore;
    use crate::modules::report::application::ports::outgoing::{NewReport, ReportRepository};
    use crate::shared::api::{custom_json_config, custom_query_config};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token};

    fn new_report(owner: &str, kind: ReportKind, status: ReportStatus) -> NewReport {
        NewReport {
            owner: UserId::from(owner),
            kind,
            title: format!("{:?} report", kind),
            description: String::new(),
            project: "Green corridor".to_string(),
            format: ReportFormat::Pdf,
            language: "pt-BR".to_string(),
            status,
        }
    }

    macro_rules! report_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(
                        TestAppStateBuilder::default()
                            .with_signed_in_user("42")
                            .with_report_store($store.clone())
                            .build(),
                    )
                    .app_data(custom_json_config())
                    .app_data(custom_query_config())
                    .service(create_report_handler)
                    .service(list_reports_handler)
                    .service(report_stats_handler)
                    .service(get_report_handler)
                    .service(delete_report_handler)
                    .service(finalize_report_handler)
                    .service(cancel_report_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_report_defaults_optional_fields() {
        let store = InMemoryReportStore::new();
        let app = report_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/reports")
            .insert_header(bearer(&test_token("42")))
            .set_json(json!({"type": "sustainability", "title": "ESG 2025"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Report generation started!");
        assert_eq!(body["report"]["type"], "sustainability");
        assert_eq!(body["report"]["status"], "generating");
        assert_eq!(body["report"]["progress"], 0);
        assert_eq!(body["report"]["project"], "Multiple projects");
        assert_eq!(body["report"]["language"], "pt-BR");
        assert_eq!(body["report"]["format"], "pdf");
    }

    #[actix_web::test]
    async fn test_create_report_rejects_unknown_type_and_blank_title() {
        let store = InMemoryReportStore::new();
        let app = report_app!(store);

        let req = test::TestRequest::post()
            .uri("/api/reports")
            .insert_header(bearer(&test_token("42")))
            .set_json(json!({"type": "financial", "title": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::post()
            .uri("/api/reports")
            .insert_header(bearer(&test_token("42")))
            .set_json(json!({"type": "technical", "title": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Report title is required");
    }

    #[actix_web::test]
    async fn test_list_filters_by_type() {
        let store = InMemoryReportStore::new();
        for kind in [
            ReportKind::Executive,
            ReportKind::Technical,
            ReportKind::Executive,
        ] {
            store
                .create(new_report("42", kind, ReportStatus::Draft))
                .await
                .unwrap();
        }
        store
            .create(new_report("7", ReportKind::Executive, ReportStatus::Draft))
            .await
            .unwrap();
        let app = report_app!(store);

        let req = test::TestRequest::get()
            .uri("/api/reports?type=executive")
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["reports"][0]["id"], 3);
        assert_eq!(body["reports"][1]["id"], 1);

        let req = test::TestRequest::get()
            .uri("/api/reports?type=annual")
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_finalize_only_drafts() {
        let store = InMemoryReportStore::new();
        let draft = store
            .create(new_report("42", ReportKind::Project, ReportStatus::Draft))
            .await
            .unwrap();
        let running = store
            .create(new_report(
                "42",
                ReportKind::Project,
                ReportStatus::Generating,
            ))
            .await
            .unwrap();
        let app = report_app!(store);

        let req = test::TestRequest::post()
            .uri(&format!("/api/reports/{}/finalize", draft.id))
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["report"]["status"], "completed");
        assert_eq!(body["report"]["progress"], 100);
        assert!(body["report"]["pages"].is_u64());
        assert!(body["report"]["fileSize"]
            .as_str()
            .unwrap()
            .ends_with(" MB"));

        let req = test::TestRequest::post()
            .uri(&format!("/api/reports/{}/finalize", running.id))
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Only draft reports can be finalized");
    }

    #[actix_web::test]
    async fn test_cancel_only_generating() {
        let store = InMemoryReportStore::new();
        let running = store
            .create(new_report(
                "42",
                ReportKind::Technical,
                ReportStatus::Generating,
            ))
            .await
            .unwrap();
        let draft = store
            .create(new_report("42", ReportKind::Technical, ReportStatus::Draft))
            .await
            .unwrap();
        let app = report_app!(store);

        let req = test::TestRequest::post()
            .uri(&format!("/api/reports/{}/cancel", draft.id))
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Only reports being generated can be cancelled"
        );

        let req = test::TestRequest::post()
            .uri(&format!("/api/reports/{}/cancel", running.id))
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/reports/{}", running.id))
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_foreign_report_is_forbidden() {
        let store = InMemoryReportStore::new();
        let foreign = store
            .create(new_report("7", ReportKind::Executive, ReportStatus::Draft))
            .await
            .unwrap();
        let app = report_app!(store);

        for req in [
            test::TestRequest::get().uri(&format!("/api/reports/{}", foreign.id)),
            test::TestRequest::delete().uri(&format!("/api/reports/{}", foreign.id)),
            test::TestRequest::post().uri(&format!("/api/reports/{}/finalize", foreign.id)),
        ] {
            let req = req.insert_header(bearer(&test_token("42"))).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 403);
        }
    }

    #[actix_web::test]
    async fn test_stats_counts_caller_reports() {
        let store = InMemoryReportStore::new();
        store
            .create(new_report("42", ReportKind::Executive, ReportStatus::Draft))
            .await
            .unwrap();
        store
            .create(new_report(
                "42",
                ReportKind::Executive,
                ReportStatus::Generating,
            ))
            .await
            .unwrap();
        store
            .create(new_report("7", ReportKind::Executive, ReportStatus::Draft))
            .await
            .unwrap();
        let app = report_app!(store);

        let req = test::TestRequest::get()
            .uri("/api/reports/stats")
            .insert_header(bearer(&test_token("42")))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["stats"]["total"], 2);
        assert_eq!(body["stats"]["thisMonth"], 2);
        assert_eq!(body["stats"]["draft"], 1);
        assert_eq!(body["stats"]["generating"], 1);
        assert_eq!(body["stats"]["completed"], 0);
    }

    #[actix_web::test]
    async fn test_list_requires_token() {
        let store = InMemoryReportStore::new();
        let app = report_app!(store);

        let req = test::TestRequest::get().uri("/api/reports").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
