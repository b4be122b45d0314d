use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::analysis::application::domain::entities::{Analysis, AnalysisId};
use crate::modules::analysis::application::ports::incoming::use_cases::{
    AnalysisAccessError, GetAnalysisUseCase, ListAnalysesError, ListAnalysesUseCase,
};
use crate::modules::analysis::application::ports::outgoing::AnalysisRepository;

use super::to_access_error;

pub struct AnalysisQueryService<R>
where
    R: AnalysisRepository,
{
    repository: R,
}

impl<R> AnalysisQueryService<R>
where
    R: AnalysisRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListAnalysesUseCase for AnalysisQueryService<R>
where
    R: AnalysisRepository + Send + Sync,
{
    async fn execute(&self, owner: &UserId) -> Result<Vec<Analysis>, ListAnalysesError> {
        self.repository
            .list(owner)
            .await
            .map_err(|e| ListAnalysesError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<R> GetAnalysisUseCase for AnalysisQueryService<R>
where
    R: AnalysisRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<Analysis, AnalysisAccessError> {
        self.repository
            .get(owner, analysis_id)
            .await
            .map_err(to_access_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::analysis::application::ports::outgoing::AnalysisRepositoryError;
    use crate::modules::analysis::application::service::test_support::{
        processing, MockAnalysisRepo,
    };
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_list_passes_owner_through() {
        let mut repo = MockAnalysisRepo::new();
        repo.expect_list()
            .with(eq(UserId::from("3")))
            .returning(|_| Ok(vec![processing(2, "3"), processing(1, "3")]));

        let service = AnalysisQueryService::new(repo);
        let list = ListAnalysesUseCase::execute(&service, &UserId::from("3"))
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id.value(), 2);
    }

    #[tokio::test]
    async fn test_get_maps_ownership_errors() {
        let mut repo = MockAnalysisRepo::new();
        repo.expect_get()
            .with(always(), eq(AnalysisId::new(1)))
            .returning(|_, _| Err(AnalysisRepositoryError::NotOwner));
        repo.expect_get()
            .with(always(), eq(AnalysisId::new(2)))
            .returning(|_, _| Err(AnalysisRepositoryError::NotFound));

        let service = AnalysisQueryService::new(repo);
        let owner = UserId::from("3");

        let foreign = GetAnalysisUseCase::execute(&service, &owner, AnalysisId::new(1)).await;
        assert!(matches!(foreign, Err(AnalysisAccessError::Forbidden)));

        let missing = GetAnalysisUseCase::execute(&service, &owner, AnalysisId::new(2)).await;
        assert!(matches!(missing, Err(AnalysisAccessError::NotFound)));
    }
}
