// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{Project, ProjectId, ProjectStatus};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit update semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicitly null => reset to the field's empty value
// - Value(v): replace with v
//
// omitted field => Unset (needs #[serde(default)] on the field)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: JsonValue,
    pub budget: JsonValue,
    pub timeline: JsonValue,
    pub tags: Vec<String>,
}

/// Shallow merge. `id`, owner and `createdAt` are not representable here, so they never change.
/// - title/description/category: Unset => keep, Value => replace, blank or Null => rejected
/// - status: Null => keep
/// - location/budget/timeline: Null => `{}`
/// - tags: Null => `[]`
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub category: PatchField<String>,
    pub location: PatchField<JsonValue>,
    pub budget: PatchField<JsonValue>,
    pub timeline: PatchField<JsonValue>,
    pub tags: PatchField<Vec<String>>,
    pub status: PatchField<ProjectStatus>,
}

/// Required text fields may be left out, but never cleared.
fn normalize_required(
    field: PatchField<String>,
    name: &'static str,
) -> Result<PatchField<String>, ProjectRepositoryError> {
    match field {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err(ProjectRepositoryError::BlankField(name)),
        PatchField::Value(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Err(ProjectRepositoryError::BlankField(name))
            } else {
                Ok(PatchField::Value(trimmed.to_string()))
            }
        }
    }
}

impl UpdateProjectData {
    /// Trims required text fields and drops a null status.
    /// Stores call this only once the caller is known to own the project.
    pub fn normalized(mut self) -> Result<Self, ProjectRepositoryError> {
        self.title = normalize_required(self.title, "Title")?;
        self.description = normalize_required(self.description, "Description")?;
        self.category = normalize_required(self.category, "Category")?;
        if matches!(self.status, PatchField::Null) {
            self.status = PatchField::Unset;
        }
        Ok(self)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Exists, but belongs to another user.
    #[error("Access denied to this project")]
    NotOwner,

    /// A required text field was sent blank or null.
    #[error("{0} cannot be empty")]
    BlankField(&'static str),

    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Assigns the next id, `draft` status and both timestamps.
    async fn create_project(&self, data: CreateProjectData)
        -> Result<Project, ProjectRepositoryError>;

    /// Existence, ownership, [`UpdateProjectData::normalized`] and the merge happen
    /// under one lock, in that order.
    async fn update_project(
        &self,
        owner: &UserId,
        project_id: ProjectId,
        data: UpdateProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete_project(
        &self,
        owner: &UserId,
        project_id: ProjectId,
    ) -> Result<(), ProjectRepositoryError>;
}
