use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;
use tracing::info;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::password_hasher_from_config;
use crate::auth::adapter::outgoing::user_store_memory::InMemoryUserStore;
use crate::auth::application::use_cases::{
    create_user::CreateUserUseCase, fetch_profile::FetchUserProfileService,
    login_user::LoginUserUseCase,
};
use crate::config::{AppConfig, ConfigError};
use crate::modules::analysis::adapter::outgoing::{InMemoryAnalysisStore, TokioAnalysisRunner};
use crate::modules::analysis::application::analysis_use_cases::AnalysisUseCases;
use crate::modules::analysis::application::service::{
    AnalysisQueryService, CreateAnalysisService, DeleteAnalysisService,
};
use crate::modules::environment::adapter::outgoing::{
    build_http_client, HttpLocationDirectory, OpenMeteoClient,
};
use crate::modules::environment::application::environment_use_cases::EnvironmentUseCases;
use crate::modules::environment::application::ports::outgoing::{
    LocationDirectory, WeatherProvider,
};
use crate::modules::environment::application::service::{
    HeatMapService, IrradianceService, LocationService, VegetationService, WeatherService,
};
use crate::modules::project::adapter::outgoing::InMemoryProjectStore;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectStatsService, GetProjectsService,
    GetSingleProjectService, UpdateProjectService,
};
use crate::modules::report::adapter::outgoing::{InMemoryReportStore, TokioReportRunner};
use crate::modules::report::application::report_use_cases::ReportUseCases;
use crate::modules::report::application::service::{
    CreateReportService, ReportLifecycleService, ReportQueryService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::AppState;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Production wiring: in-memory stores plus the real upstream HTTP adapters.
pub fn build_app_state(config: &AppConfig, jwt: JwtConfig) -> Result<AppState, StartupError> {
    let client = build_http_client(&config.upstream)?;
    let weather = Arc::new(OpenMeteoClient::new(
        client.clone(),
        &config.upstream.open_meteo_url,
    ));
    let directory = Arc::new(HttpLocationDirectory::new(
        client,
        &config.upstream.ibge_url,
        &config.upstream.nominatim_url,
    ));

    Ok(assemble_app_state(config, jwt, weather, directory)?)
}

/// Wires every use case over fresh in-memory stores and the given upstreams.
pub fn assemble_app_state(
    config: &AppConfig,
    jwt: JwtConfig,
    weather: Arc<dyn WeatherProvider>,
    directory: Arc<dyn LocationDirectory>,
) -> Result<AppState, ConfigError> {
    // Auth
    let users = InMemoryUserStore::new();
    let token_service = Arc::new(JwtTokenService::new(jwt));
    let password_hasher = password_hasher_from_config(config)?;

    let create_user_use_case = CreateUserUseCase::new(
        users.clone(),
        users.clone(),
        password_hasher.clone(),
        token_service.clone(),
    );
    let login_user_use_case =
        LoginUserUseCase::new(users.clone(), password_hasher, token_service.clone());
    let fetch_user_profile_use_case = FetchUserProfileService::new(users.clone());

    // Projects
    let projects = InMemoryProjectStore::new();
    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(projects.clone())),
        get_list: Arc::new(GetProjectsService::new(projects.clone())),
        get_single: Arc::new(GetSingleProjectService::new(projects.clone())),
        update: Arc::new(UpdateProjectService::new(projects.clone())),
        delete: Arc::new(DeleteProjectService::new(projects.clone())),
        stats: Arc::new(GetProjectStatsService::new(projects)),
    };

    // Environment
    let environment = EnvironmentUseCases {
        weather: Arc::new(WeatherService::new(weather.clone())),
        heat_map: Arc::new(HeatMapService::new(weather)),
        vegetation: Arc::new(VegetationService),
        irradiance: Arc::new(IrradianceService),
        locations: Arc::new(LocationService::new(directory)),
    };

    // Analyses
    let analyses = InMemoryAnalysisStore::new();
    let runner = TokioAnalysisRunner::new(Arc::new(analyses.clone()), config.analysis_tick);
    let analysis_queries = Arc::new(AnalysisQueryService::new(analyses.clone()));
    let analysis = AnalysisUseCases {
        create: Arc::new(CreateAnalysisService::new(analyses.clone(), Arc::new(runner))),
        list: analysis_queries.clone(),
        get: analysis_queries,
        delete: Arc::new(DeleteAnalysisService::new(analyses)),
    };

    // Reports
    let reports = InMemoryReportStore::new();
    let report_runner = TokioReportRunner::new(Arc::new(reports.clone()), config.report_tick);
    let report_queries = Arc::new(ReportQueryService::new(reports.clone()));
    let report_lifecycle = Arc::new(ReportLifecycleService::new(reports.clone()));
    let report = ReportUseCases {
        create: Arc::new(CreateReportService::new(reports, Arc::new(report_runner))),
        list: report_queries.clone(),
        get: report_queries.clone(),
        stats: report_queries,
        delete: report_lifecycle.clone(),
        finalize: report_lifecycle.clone(),
        cancel: report_lifecycle,
    };

    info!(
        environment = %config.environment,
        hasher = ?config.password_hasher,
        "Application state assembled"
    );

    Ok(AppState {
        create_user_use_case: Arc::new(create_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_user_profile_use_case: Arc::new(fetch_user_profile_use_case),
        token_provider: token_service,
        user_query: Arc::new(users),
        project,
        environment,
        analysis,
        report,
        environment_name: config.environment.clone(),
    })
}

pub fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .supports_credentials()
        .max_age(3600)
}

pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "DENY"))
        .add((header::REFERRER_POLICY, "strict-origin-when-cross-origin"))
}

/// Extractor configs and every API route. Literal project and report paths go before `{id}`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth;
    use crate::modules::analysis::adapter::incoming::web::routes as analysis;
    use crate::modules::environment::adapter::incoming::web::routes as environment;
    use crate::modules::project::adapter::incoming::web::routes as project;
    use crate::modules::report::adapter::incoming::web::routes as report;

    cfg.app_data(custom_json_config())
        .app_data(custom_path_config())
        .app_data(custom_query_config());

    // Health
    cfg.service(crate::health::health);
    // Auth
    cfg.service(auth::register_user_handler)
        .service(auth::login_user_handler)
        .service(auth::fetch_me_handler);
    // Projects
    cfg.service(project::get_project_stats_handler)
        .service(project::get_projects_by_category_handler)
        .service(project::get_projects_handler)
        .service(project::create_project_handler)
        .service(project::get_single_project_handler)
        .service(project::update_project_handler)
        .service(project::delete_project_handler);
    // Environment and locations
    cfg.service(environment::get_weather_handler)
        .service(environment::get_regional_weather_handler)
        .service(environment::get_heat_map_handler)
        .service(environment::get_regional_heat_handler)
        .service(environment::get_vegetation_handler)
        .service(environment::irradiance_handler)
        .service(environment::list_states_handler)
        .service(environment::list_cities_handler)
        .service(environment::geocode_handler);
    // Analyses
    cfg.service(analysis::list_analyses_handler)
        .service(analysis::create_analysis_handler)
        .service(analysis::get_analysis_handler)
        .service(analysis::delete_analysis_handler);
    // Reports
    cfg.service(report::report_stats_handler)
        .service(report::list_reports_handler)
        .service(report::create_report_handler)
        .service(report::get_report_handler)
        .service(report::delete_report_handler)
        .service(report::finalize_report_handler)
        .service(report::cancel_report_handler);
}
