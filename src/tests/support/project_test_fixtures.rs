use chrono::Utc;
use serde_json::json;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{Project, ProjectId, ProjectStatus};

pub fn sample_project(id: u64, owner: &str) -> Project {
    let now = Utc::now();
    Project {
        id: ProjectId::new(id),
        title: "Green Corridor".to_string(),
        description: "Tree planting along the Capibaribe".to_string(),
        category: "urban-greening".to_string(),
        location: json!({"city": "Recife", "state": "PE"}),
        budget: json!({}),
        timeline: json!({}),
        tags: vec!["trees".to_string()],
        created_by: UserId::from(owner),
        status: ProjectStatus::Draft,
        created_at: now,
        updated_at: now,
    }
}
