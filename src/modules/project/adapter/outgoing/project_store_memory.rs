use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{
    object_or_empty, Project, ProjectId, ProjectStats,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchField, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

#[derive(Debug, Default)]
struct ProjectTable {
    next_id: u64,
    rows: BTreeMap<ProjectId, Project>,
}

impl ProjectTable {
    fn allocate_id(&mut self) -> ProjectId {
        self.next_id += 1;
        ProjectId::new(self.next_id)
    }

    fn owned_mut(
        &mut self,
        owner: &UserId,
        project_id: ProjectId,
    ) -> Result<&mut Project, ProjectRepositoryError> {
        let project = self
            .rows
            .get_mut(&project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        if !project.is_owned_by(owner) {
            return Err(ProjectRepositoryError::NotOwner);
        }
        Ok(project)
    }
}

/// Volatile project storage. Ids start at 1 and are never reused, even after deletes.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProjectStore {
    table: Arc<RwLock<ProjectTable>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn merge_json(target: &mut serde_json::Value, field: PatchField<serde_json::Value>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = object_or_empty(None),
        PatchField::Value(v) => *target = object_or_empty(Some(v)),
    }
}

fn apply_update(project: &mut Project, data: UpdateProjectData) {
    if let PatchField::Value(title) = data.title {
        project.title = title;
    }
    if let PatchField::Value(description) = data.description {
        project.description = description;
    }
    if let PatchField::Value(category) = data.category {
        project.category = category;
    }
    if let PatchField::Value(status) = data.status {
        project.status = status;
    }

    merge_json(&mut project.location, data.location);
    merge_json(&mut project.budget, data.budget);
    merge_json(&mut project.timeline, data.timeline);

    match data.tags {
        PatchField::Unset => {}
        PatchField::Null => project.tags.clear(),
        PatchField::Value(tags) => project.tags = tags,
    }

    project.updated_at = Utc::now();
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let now = Utc::now();

        let project = Project {
            id,
            title: data.title,
            description: data.description,
            category: data.category,
            location: object_or_empty(Some(data.location)),
            budget: object_or_empty(Some(data.budget)),
            timeline: object_or_empty(Some(data.timeline)),
            tags: data.tags,
            created_by: data.owner,
            status: Default::default(),
            created_at: now,
            updated_at: now,
        };

        table.rows.insert(id, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        owner: &UserId,
        project_id: ProjectId,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut table = self.table.write().await;
        let project = table.owned_mut(owner, project_id)?;
        apply_update(project, data.normalized()?);
        Ok(project.clone())
    }

    async fn delete_project(
        &self,
        owner: &UserId,
        project_id: ProjectId,
    ) -> Result<(), ProjectRepositoryError> {
        let mut table = self.table.write().await;
        table.owned_mut(owner, project_id)?;
        table.rows.remove(&project_id);
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectStore {
    async fn get_by_id(
        &self,
        owner: &UserId,
        project_id: ProjectId,
    ) -> Result<Project, ProjectQueryError> {
        let table = self.table.read().await;
        let project = table
            .rows
            .get(&project_id)
            .ok_or(ProjectQueryError::NotFound)?;
        if !project.is_owned_by(owner) {
            return Err(ProjectQueryError::NotOwner);
        }
        Ok(project.clone())
    }

    async fn list(
        &self,
        owner: &UserId,
        filter: &ProjectListFilter,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| p.is_owned_by(owner) && filter.matches(p))
            .cloned()
            .collect())
    }

    async fn stats(&self, owner: &UserId) -> Result<ProjectStats, ProjectQueryError> {
        let table = self.table.read().await;
        let mut stats = ProjectStats::default();
        for project in table.rows.values().filter(|p| p.is_owned_by(owner)) {
            stats.record(project.status);
        }
        Ok(stats)
    }
}
