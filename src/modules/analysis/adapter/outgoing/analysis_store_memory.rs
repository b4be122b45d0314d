use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::UserId;
use crate::modules::analysis::application::domain::entities::{
    Analysis, AnalysisId, AnalysisStatus,
};
use crate::modules::analysis::application::domain::results::AnalysisResults;
use crate::modules::analysis::application::ports::outgoing::{
    AnalysisRepository, AnalysisRepositoryError, NewAnalysis,
};

#[derive(Debug, Default)]
struct AnalysisTable {
    next_id: u64,
    rows: BTreeMap<AnalysisId, Analysis>,
}

impl AnalysisTable {
    fn owned(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<&Analysis, AnalysisRepositoryError> {
        let analysis = self
            .rows
            .get(&analysis_id)
            .ok_or(AnalysisRepositoryError::NotFound)?;
        if !analysis.is_owned_by(owner) {
            return Err(AnalysisRepositoryError::NotOwner);
        }
        Ok(analysis)
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryAnalysisStore {
    table: Arc<RwLock<AnalysisTable>>,
}

impl InMemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisStore {
    async fn create(&self, data: NewAnalysis) -> Result<Analysis, AnalysisRepositoryError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let id = AnalysisId::new(table.next_id);

        let analysis = Analysis {
            id,
            kind: data.kind,
            name: data.name,
            description: data.description,
            location: data.location,
            priority: data.priority,
            tags: data.tags,
            status: AnalysisStatus::Processing,
            progress: 0,
            results: None,
            created_by: data.owner,
            created_at: Utc::now(),
            completed_at: None,
        };

        table.rows.insert(id, analysis.clone());
        Ok(analysis)
    }

    async fn get(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<Analysis, AnalysisRepositoryError> {
        let table = self.table.read().await;
        table.owned(owner, analysis_id).cloned()
    }

    async fn list(&self, owner: &UserId) -> Result<Vec<Analysis>, AnalysisRepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .filter(|a| a.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn delete(
        &self,
        owner: &UserId,
        analysis_id: AnalysisId,
    ) -> Result<(), AnalysisRepositoryError> {
        let mut table = self.table.write().await;
        table.owned(owner, analysis_id)?;
        table.rows.remove(&analysis_id);
        Ok(())
    }

    async fn record_progress(
        &self,
        analysis_id: AnalysisId,
        progress: u8,
    ) -> Result<(), AnalysisRepositoryError> {
        let mut table = self.table.write().await;
        let analysis = table
            .rows
            .get_mut(&analysis_id)
            .ok_or(AnalysisRepositoryError::NotFound)?;
        if analysis.status == AnalysisStatus::Processing {
            analysis.progress = progress.min(99);
        }
        Ok(())
    }

    async fn complete(
        &self,
        analysis_id: AnalysisId,
        results: Option<AnalysisResults>,
    ) -> Result<Analysis, AnalysisRepositoryError> {
        let mut table = self.table.write().await;
        let analysis = table
            .rows
            .get_mut(&analysis_id)
            .ok_or(AnalysisRepositoryError::NotFound)?;

        analysis.status = AnalysisStatus::Completed;
        analysis.progress = 100;
        analysis.results = results;
        analysis.completed_at = Some(Utc::now());
        Ok(analysis.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::analysis::application::domain::entities::{AnalysisKind, Priority};
    use crate::modules::analysis::application::domain::results::MobilityResults;

    fn new_analysis(owner: &str, name: &str) -> NewAnalysis {
        NewAnalysis {
            owner: UserId::from(owner),
            kind: AnalysisKind::Mobility,
            name: name.to_string(),
            description: String::new(),
            location: "Curitiba".to_string(),
            priority: Priority::Low,
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_starts_processing_with_sequential_ids() {
        let store = InMemoryAnalysisStore::new();
        let first = store.create(new_analysis("1", "a")).await.unwrap();
        let second = store.create(new_analysis("1", "b")).await.unwrap();

        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
        assert_eq!(first.status, AnalysisStatus::Processing);
        assert_eq!(first.progress, 0);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_scoped() {
        let store = InMemoryAnalysisStore::new();
        store.create(new_analysis("1", "old")).await.unwrap();
        store.create(new_analysis("2", "other")).await.unwrap();
        store.create(new_analysis("1", "new")).await.unwrap();

        let names: Vec<_> = store
            .list(&UserId::from("1"))
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_owner_checks() {
        let store = InMemoryAnalysisStore::new();
        let a = store.create(new_analysis("1", "a")).await.unwrap();

        assert_eq!(
            store.get(&UserId::from("2"), a.id).await,
            Err(AnalysisRepositoryError::NotOwner)
        );
        assert_eq!(
            store.delete(&UserId::from("2"), a.id).await,
            Err(AnalysisRepositoryError::NotOwner)
        );
        assert_eq!(
            store.get(&UserId::from("1"), AnalysisId::new(99)).await,
            Err(AnalysisRepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_progress_and_completion() {
        let store = InMemoryAnalysisStore::new();
        let a = store.create(new_analysis("1", "a")).await.unwrap();

        store.record_progress(a.id, 42).await.unwrap();
        assert_eq!(store.get(&UserId::from("1"), a.id).await.unwrap().progress, 42);

        let results = AnalysisResults::Mobility(MobilityResults {
            accessibility: 80,
            traffic: 30,
            recommendations: 3,
        });
        let done = store.complete(a.id, Some(results.clone())).await.unwrap();
        assert_eq!(done.status, AnalysisStatus::Completed);
        assert_eq!(done.progress, 100);
        assert_eq!(done.results, Some(results));
        assert!(done.completed_at.is_some());

        // Late ticks do not roll a completed analysis back.
        store.record_progress(a.id, 50).await.unwrap();
        assert_eq!(store.get(&UserId::from("1"), a.id).await.unwrap().progress, 100);
    }

    #[tokio::test]
    async fn test_background_updates_after_delete_report_not_found() {
        let store = InMemoryAnalysisStore::new();
        let a = store.create(new_analysis("1", "a")).await.unwrap();
        store.delete(&UserId::from("1"), a.id).await.unwrap();

        assert_eq!(
            store.record_progress(a.id, 10).await,
            Err(AnalysisRepositoryError::NotFound)
        );
        assert!(store.complete(a.id, None).await.is_err());
    }
}
