mod api;
mod bootstrap;
mod config;
pub mod health;
pub mod modules;
mod shared;

pub use modules::auth;

use std::sync::Arc;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery};
use crate::auth::application::use_cases::{
    create_user::ICreateUserUseCase, fetch_profile::FetchUserProfileUseCase,
    login_user::ILoginUserUseCase,
};
use crate::config::AppConfig;
use crate::modules::analysis::application::analysis_use_cases::AnalysisUseCases;
use crate::modules::environment::application::environment_use_cases::EnvironmentUseCases;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::report::application::report_use_cases::ReportUseCases;
use crate::shared::api::route_not_found;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub token_provider: Arc<dyn TokenProvider>,
    pub user_query: Arc<dyn UserQuery>,
    pub project: ProjectUseCases,
    pub environment: EnvironmentUseCases,
    pub analysis: AnalysisUseCases,
    pub report: ReportUseCases,
    /// Value of `RUST_ENV`, echoed by the health check.
    pub environment_name: String,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let jwt_config = JwtConfig::from_env().map_err(std::io::Error::other)?;

    let state = bootstrap::build_app_state(&config, jwt_config).map_err(|e| {
        error!(error = %e, "Failed to assemble application state");
        std::io::Error::other(e)
    })?;
    let state = web::Data::new(state);

    let server_url = config.server_url();
    info!(
        url = %server_url,
        environment = %config.environment,
        "Server listening; docs at /swagger-ui/"
    );

    let cors_origins = config.cors_origins.clone();
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(bootstrap::cors(&cors_origins))
            .wrap(bootstrap::security_headers())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(bootstrap::init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .default_service(web::to(route_not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
