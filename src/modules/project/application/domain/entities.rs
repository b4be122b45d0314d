use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Planned,
    Active,
    Completed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A planning project owned by the user who created it.
///
/// `location`, `budget` and `timeline` are free-form JSON objects supplied by the client.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(value_type = u64, example = 1)]
    pub id: ProjectId,
    #[schema(example = "Green corridor on Avenida Paulista")]
    pub title: String,
    pub description: String,
    #[schema(example = "urban-greening")]
    pub category: String,
    #[schema(value_type = Object)]
    pub location: JsonValue,
    #[schema(value_type = Object)]
    pub budget: JsonValue,
    #[schema(value_type = Object)]
    pub timeline: JsonValue,
    pub tags: Vec<String>,
    #[schema(value_type = String, example = "1717171717171")]
    pub created_by: UserId,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }

    /// Case-insensitive match against title, description, category and tags.
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Per-status project counters for one owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectStats {
    pub total: usize,
    pub draft: usize,
    pub planned: usize,
    pub active: usize,
    pub completed: usize,
}

impl ProjectStats {
    pub fn record(&mut self, status: ProjectStatus) {
        self.total += 1;
        match status {
            ProjectStatus::Draft => self.draft += 1,
            ProjectStatus::Planned => self.planned += 1,
            ProjectStatus::Active => self.active += 1,
            ProjectStatus::Completed => self.completed += 1,
        }
    }
}

/// Absent and falsy JSON blobs (`null`, `false`, `0`, `""`) all become `{}`.
pub fn object_or_empty(value: Option<JsonValue>) -> JsonValue {
    match value {
        Some(v) if !is_falsy(&v) => v,
        _ => JsonValue::Object(Default::default()),
    }
}

fn is_falsy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project() -> Project {
        Project {
            id: ProjectId::new(1),
            title: "Green Corridor".to_string(),
            description: "Tree planting along the river".to_string(),
            category: "urban-greening".to_string(),
            location: json!({}),
            budget: json!({}),
            timeline: json!({}),
            tags: vec!["Trees".to_string(), "shade".to_string()],
            created_by: UserId::from("1"),
            status: ProjectStatus::Draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let p = project();
        assert!(p.matches_search("corridor"));
        assert!(p.matches_search("river"));
        assert!(p.matches_search("greening"));
        assert!(p.matches_search("trees"));
        assert!(!p.matches_search("parking"));
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_value(ProjectStatus::Planned).unwrap(), "planned");
        let parsed: ProjectStatus = serde_json::from_value(json!("completed")).unwrap();
        assert_eq!(parsed, ProjectStatus::Completed);
        assert!(serde_json::from_value::<ProjectStatus>(json!("rascunho")).is_err());
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let value = serde_json::to_value(project()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["createdBy"], "1");
        assert_eq!(value["status"], "draft");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_stats_record_each_status() {
        let mut stats = ProjectStats::default();
        stats.record(ProjectStatus::Draft);
        stats.record(ProjectStatus::Draft);
        stats.record(ProjectStatus::Completed);

        assert_eq!(
            stats,
            ProjectStats {
                total: 3,
                draft: 2,
                planned: 0,
                active: 0,
                completed: 1,
            }
        );
    }

    #[test]
    fn test_object_or_empty() {
        assert_eq!(object_or_empty(None), json!({}));
        assert_eq!(object_or_empty(Some(JsonValue::Null)), json!({}));
        assert_eq!(object_or_empty(Some(json!({"city": "Recife"}))), json!({"city": "Recife"}));
    }

    #[test]
    fn test_object_or_empty_clears_falsy_scalars() {
        assert_eq!(object_or_empty(Some(json!(""))), json!({}));
        assert_eq!(object_or_empty(Some(json!(0))), json!({}));
        assert_eq!(object_or_empty(Some(json!(0.0))), json!({}));
        assert_eq!(object_or_empty(Some(json!(false))), json!({}));

        assert_eq!(object_or_empty(Some(json!("Recife"))), json!("Recife"));
        assert_eq!(object_or_empty(Some(json!(1500))), json!(1500));
        assert_eq!(object_or_empty(Some(json!(true))), json!(true));
        assert_eq!(object_or_empty(Some(json!([]))), json!([]));
    }
}
