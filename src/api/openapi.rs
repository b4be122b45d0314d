use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoPlan API",
        version = "1.0.0",
        description = "Urban environmental planning: projects, climate layers, Brazilian locations and simulated analyses and reports"
    ),
    paths(
        crate::health::health,

        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_me_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_stats_handler,
        crate::modules::project::adapter::incoming::web::routes::get_projects_by_category_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Environment
        crate::modules::environment::adapter::incoming::web::routes::get_weather_handler,
        crate::modules::environment::adapter::incoming::web::routes::get_regional_weather_handler,
        crate::modules::environment::adapter::incoming::web::routes::get_heat_map_handler,
        crate::modules::environment::adapter::incoming::web::routes::get_regional_heat_handler,
        crate::modules::environment::adapter::incoming::web::routes::get_vegetation_handler,
        crate::modules::environment::adapter::incoming::web::routes::irradiance_handler,
        crate::modules::environment::adapter::incoming::web::routes::list_states_handler,
        crate::modules::environment::adapter::incoming::web::routes::list_cities_handler,
        crate::modules::environment::adapter::incoming::web::routes::geocode_handler,

        // Analyses
        crate::modules::analysis::adapter::incoming::web::routes::create_analysis_handler,
        crate::modules::analysis::adapter::incoming::web::routes::list_analyses_handler,
        crate::modules::analysis::adapter::incoming::web::routes::get_analysis_handler,
        crate::modules::analysis::adapter::incoming::web::routes::delete_analysis_handler,

        // Reports
        crate::modules::report::adapter::incoming::web::routes::create_report_handler,
        crate::modules::report::adapter::incoming::web::routes::list_reports_handler,
        crate::modules::report::adapter::incoming::web::routes::report_stats_handler,
        crate::modules::report::adapter::incoming::web::routes::get_report_handler,
        crate::modules::report::adapter::incoming::web::routes::delete_report_handler,
        crate::modules::report::adapter::incoming::web::routes::finalize_report_handler,
        crate::modules::report::adapter::incoming::web::routes::cancel_report_handler,
    ),
    components(schemas(ErrorResponse, MessageResponse, HealthResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "system", description = "Liveness"),
        (name = "auth", description = "Registration, login and current user"),
        (name = "projects", description = "Planning projects owned by the caller"),
        (name = "environment", description = "Weather, heat, vegetation and solar irradiance layers"),
        (name = "locations", description = "Brazilian states, cities and geocoding"),
        (name = "analyses", description = "Simulated environmental analyses"),
        (name = "reports", description = "Generated executive, technical, project and sustainability reports"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/auth/register or /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
