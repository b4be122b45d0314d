// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{
    Project, ProjectId, ProjectStats, ProjectStatus,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectListFilter {
    pub status: Option<ProjectStatus>,
    /// Case-insensitive, over title/description/category/tags.
    pub search: Option<String>,
    /// Exact match.
    pub category: Option<String>,
}

impl ProjectListFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &project.category != category {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => project.matches_search(&needle.to_lowercase()),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Access denied to this project")]
    NotOwner,

    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Owner-scoped read: `NotFound` when absent, `NotOwner` when someone else's.
    async fn get_by_id(
        &self,
        owner: &UserId,
        project_id: ProjectId,
    ) -> Result<Project, ProjectQueryError>;

    /// Owner's projects in ascending id order.
    async fn list(
        &self,
        owner: &UserId,
        filter: &ProjectListFilter,
    ) -> Result<Vec<Project>, ProjectQueryError>;

    async fn stats(&self, owner: &UserId) -> Result<ProjectStats, ProjectQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn project(status: ProjectStatus, category: &str) -> Project {
        Project {
            id: ProjectId::new(1),
            title: "Rain gardens".to_string(),
            description: "Bioswales for flood control".to_string(),
            category: category.to_string(),
            location: json!({}),
            budget: json!({}),
            timeline: json!({}),
            tags: vec![],
            created_by: UserId::from("1"),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ProjectListFilter::default().matches(&project(ProjectStatus::Active, "water")));
    }

    #[test]
    fn test_category_is_exact() {
        let filter = ProjectListFilter::by_category("water");
        assert!(filter.matches(&project(ProjectStatus::Draft, "water")));
        assert!(!filter.matches(&project(ProjectStatus::Draft, "Water")));
    }

    #[test]
    fn test_status_and_search_combine() {
        let filter = ProjectListFilter {
            status: Some(ProjectStatus::Active),
            search: Some("  FLOOD ".to_string()),
            category: None,
        };
        assert!(filter.matches(&project(ProjectStatus::Active, "water")));
        assert!(!filter.matches(&project(ProjectStatus::Draft, "water")));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = ProjectListFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&project(ProjectStatus::Draft, "water")));
    }
}
