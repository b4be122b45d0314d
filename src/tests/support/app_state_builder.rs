use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::outgoing::user_store_memory::InMemoryUserStore;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::create_user::ICreateUserUseCase;
use crate::auth::application::use_cases::fetch_profile::{
    FetchUserProfileService, FetchUserProfileUseCase,
};
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::analysis::application::analysis_use_cases::AnalysisUseCases;
use crate::modules::analysis::application::ports::incoming::use_cases::{
    CreateAnalysisUseCase, DeleteAnalysisUseCase, GetAnalysisUseCase, ListAnalysesUseCase,
};
use crate::modules::environment::application::environment_use_cases::EnvironmentUseCases;
use crate::modules::environment::application::ports::incoming::use_cases::LocationUseCase;
use crate::modules::environment::application::service::{
    HeatMapService, IrradianceService, LocationService, VegetationService, WeatherService,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectStatsUseCase, GetProjectsUseCase,
    GetSingleProjectUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::report::adapter::outgoing::InMemoryReportStore;
use crate::modules::report::application::report_use_cases::ReportUseCases;
use crate::modules::report::application::service::{
    CreateReportService, ReportLifecycleService, ReportQueryService,
};
use crate::tests::support::auth_helper::{test_token_provider, test_user};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Stubs every use case except the environment and report services. Environment
/// services run against upstreams that are always offline; report services run
/// over an in-memory store whose reports never advance on their own.
pub struct TestAppStateBuilder {
    users: Vec<User>,
    token_provider: Arc<dyn TokenProvider>,
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_user_profile: Option<Arc<dyn FetchUserProfileUseCase + Send + Sync>>,
    project: ProjectUseCases,
    environment: EnvironmentUseCases,
    analysis: AnalysisUseCases,
    report: ReportUseCases,
}

fn idle_reports(store: InMemoryReportStore) -> ReportUseCases {
    let queries = Arc::new(ReportQueryService::new(store.clone()));
    let lifecycle = Arc::new(ReportLifecycleService::new(store.clone()));
    ReportUseCases {
        create: Arc::new(CreateReportService::new(store, Arc::new(IdleReportScheduler))),
        list: queries.clone(),
        get: queries.clone(),
        stats: queries,
        delete: lifecycle.clone(),
        finalize: lifecycle.clone(),
        cancel: lifecycle,
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let weather = Arc::new(OfflineWeather);
        let analyses = Arc::new(StubAnalysisUseCases);

        Self {
            users: vec![],
            token_provider: Arc::new(RejectingTokenProvider),
            create_user: Arc::new(StubCreateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_user_profile: None,
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
                stats: Arc::new(StubProjectStatsUseCase),
            },
            environment: EnvironmentUseCases {
                weather: Arc::new(WeatherService::new(weather.clone())),
                heat_map: Arc::new(HeatMapService::new(weather)),
                vegetation: Arc::new(VegetationService),
                irradiance: Arc::new(IrradianceService),
                locations: Arc::new(LocationService::new(Arc::new(OfflineLocations))),
            },
            analysis: AnalysisUseCases {
                create: analyses.clone(),
                list: analyses.clone(),
                get: analyses.clone(),
                delete: analyses,
            },
            report: idle_reports(InMemoryReportStore::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token_provider = Arc::new(provider);
        self
    }

    /// Seeds the user table the auth extractor and profile lookup read from.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Real token verification plus a stored user, so `test_token(user_id)` authenticates.
    pub fn with_signed_in_user(mut self, user_id: &str) -> Self {
        self.token_provider = Arc::new(test_token_provider());
        self.users
            .push(test_user(user_id, &format!("user{}@example.com", user_id)));
        self
    }

    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(mut self, uc: impl FetchUserProfileUseCase + 'static) -> Self {
        self.fetch_user_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(mut self, uc: impl GetSingleProjectUseCase + 'static) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_project_stats(mut self, uc: impl GetProjectStatsUseCase + 'static) -> Self {
        self.project.stats = Arc::new(uc);
        self
    }

    pub fn with_locations(mut self, uc: impl LocationUseCase + 'static) -> Self {
        self.environment.locations = Arc::new(uc);
        self
    }

    pub fn with_create_analysis(mut self, uc: impl CreateAnalysisUseCase + 'static) -> Self {
        self.analysis.create = Arc::new(uc);
        self
    }

    pub fn with_list_analyses(mut self, uc: impl ListAnalysesUseCase + 'static) -> Self {
        self.analysis.list = Arc::new(uc);
        self
    }

    pub fn with_get_analysis(mut self, uc: impl GetAnalysisUseCase + 'static) -> Self {
        self.analysis.get = Arc::new(uc);
        self
    }

    pub fn with_delete_analysis(mut self, uc: impl DeleteAnalysisUseCase + 'static) -> Self {
        self.analysis.delete = Arc::new(uc);
        self
    }

    /// Report services over `store`, so tests can seed reports in any status.
    pub fn with_report_store(mut self, store: InMemoryReportStore) -> Self {
        self.report = idle_reports(store);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = InMemoryUserStore::with_users(self.users);
        let fetch_user_profile = self
            .fetch_user_profile
            .unwrap_or_else(|| Arc::new(FetchUserProfileService::new(store.clone())));

        web::Data::new(AppState {
            create_user_use_case: self.create_user,
            login_user_use_case: self.login_user,
            fetch_user_profile_use_case: fetch_user_profile,
            token_provider: self.token_provider,
            user_query: Arc::new(store),
            project: self.project,
            environment: self.environment,
            analysis: self.analysis,
            report: self.report,
            environment_name: "test".to_string(),
        })
    }
}
