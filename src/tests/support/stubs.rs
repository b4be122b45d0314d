use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::analysis::application::domain::entities::{Analysis, AnalysisId};
use crate::modules::analysis::application::ports::incoming::use_cases::{
    AnalysisAccessError, CreateAnalysisError, CreateAnalysisInput, CreateAnalysisUseCase,
    DeleteAnalysisUseCase, GetAnalysisUseCase, ListAnalysesError, ListAnalysesUseCase,
};
use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::locations::{BrazilState, City};
use crate::modules::environment::application::domain::weather::CurrentWeather;
use crate::modules::environment::application::ports::outgoing::{
    LocationDirectory, LocationError, WeatherError, WeatherProvider,
};
use crate::modules::project::application::domain::entities::{Project, ProjectId, ProjectStats};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectStatsError, GetProjectStatsUseCase, GetProjectsError, GetProjectsUseCase,
    GetSingleProjectError, GetSingleProjectUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, ProjectListFilter, UpdateProjectData,
};
use crate::modules::report::application::domain::entities::Report;
use crate::modules::report::application::ports::outgoing::ReportScheduler;

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

/// Rejects every token; swap in `test_token_provider()` to authenticate.
#[derive(Default, Clone)]
pub struct RejectingTokenProvider;

impl TokenProvider for RejectingTokenProvider {
    fn generate_access_token(&self, _user_id: &UserId) -> Result<String, TokenError> {
        Err(TokenError::EncodingError("not used in this test".to_string()))
    }

    fn verify_access_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::InvalidSignature)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        Err(CreateUserError::RepositoryError("not used in this test".to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: CreateProjectData) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError("not used in this test".to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(
        &self,
        _owner: &UserId,
        _filter: ProjectListFilter,
    ) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(
        &self,
        _owner: &UserId,
        _project_id: ProjectId,
    ) -> Result<Project, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _owner: &UserId,
        _project_id: ProjectId,
        _data: UpdateProjectData,
    ) -> Result<Project, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _owner: &UserId, _project_id: ProjectId) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubProjectStatsUseCase;

#[async_trait]
impl GetProjectStatsUseCase for StubProjectStatsUseCase {
    async fn execute(&self, _owner: &UserId) -> Result<ProjectStats, GetProjectStatsError> {
        Ok(ProjectStats::default())
    }
}

//
// ──────────────────────────────────────────────────────────
// Analyses
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubAnalysisUseCases;

#[async_trait]
impl CreateAnalysisUseCase for StubAnalysisUseCases {
    async fn execute(
        &self,
        _owner: &UserId,
        _input: CreateAnalysisInput,
    ) -> Result<Analysis, CreateAnalysisError> {
        Err(CreateAnalysisError::RepositoryError("not used in this test".to_string()))
    }
}

#[async_trait]
impl ListAnalysesUseCase for StubAnalysisUseCases {
    async fn execute(&self, _owner: &UserId) -> Result<Vec<Analysis>, ListAnalysesError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetAnalysisUseCase for StubAnalysisUseCases {
    async fn execute(&self, _owner: &UserId, _id: AnalysisId) -> Result<Analysis, AnalysisAccessError> {
        Err(AnalysisAccessError::NotFound)
    }
}

#[async_trait]
impl DeleteAnalysisUseCase for StubAnalysisUseCases {
    async fn execute(&self, _owner: &UserId, _id: AnalysisId) -> Result<(), AnalysisAccessError> {
        Err(AnalysisAccessError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Reports
// ──────────────────────────────────────────────────────────
//

/// Never advances, so stored reports keep the status a test gave them.
#[derive(Default, Clone)]
pub struct IdleReportScheduler;

impl ReportScheduler for IdleReportScheduler {
    fn schedule(&self, _report: &Report) {}
}

//
// ──────────────────────────────────────────────────────────
// Upstream services
// ──────────────────────────────────────────────────────────
//

/// Weather API that is always unreachable, so services answer from fallbacks.
#[derive(Default, Clone)]
pub struct OfflineWeather;

#[async_trait]
impl WeatherProvider for OfflineWeather {
    async fn current(&self, _at: Coordinates) -> Result<CurrentWeather, WeatherError> {
        Err(WeatherError::Request("offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub struct OfflineLocations;

#[async_trait]
impl LocationDirectory for OfflineLocations {
    async fn states(&self) -> Result<Vec<BrazilState>, LocationError> {
        Err(LocationError::Request("offline".to_string()))
    }

    async fn cities(&self, _state_id: u32) -> Result<Vec<City>, LocationError> {
        Err(LocationError::Request("offline".to_string()))
    }

    async fn geocode(&self, _city: &str, _state: &str) -> Result<Option<Coordinates>, LocationError> {
        Err(LocationError::Request("offline".to_string()))
    }
}
