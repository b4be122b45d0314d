use std::fmt;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

use super::output::ReportOutput;

pub const DEFAULT_PROJECT: &str = "Multiple projects";
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(u64);

impl ReportId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Report template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Executive,
    Technical,
    Project,
    Sustainability,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Docx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Generating,
    Draft,
    Completed,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportStatus::Generating => "generating",
            ReportStatus::Draft => "draft",
            ReportStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Creation window used by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Since midnight UTC
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
}

impl ReportPeriod {
    pub fn since(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            ReportPeriod::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc())
                .unwrap_or(now),
            ReportPeriod::Week => now - Duration::days(7),
            ReportPeriod::Month => now - Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[schema(value_type = u64, example = 1)]
    pub id: ReportId,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    #[schema(example = "Executive report - Green corridor")]
    pub title: String,
    pub description: String,
    #[schema(example = "Green corridor")]
    pub project: String,
    pub status: ReportStatus,
    /// 0 to 100
    pub progress: u8,
    pub format: ReportFormat,
    #[schema(example = "pt-BR")]
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2.4 MB")]
    pub file_size: Option<String>,
    #[schema(value_type = String)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Report {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }

    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.project.to_lowercase().contains(needle)
    }

    /// Stamps the output and moves the report to `completed`.
    pub fn finish(&mut self, output: ReportOutput, at: DateTime<Utc>) {
        self.status = ReportStatus::Completed;
        self.progress = 100;
        self.pages = Some(output.pages);
        self.charts = Some(output.charts);
        self.file_size = Some(output.file_size);
        self.completed_at = Some(at);
    }
}

/// Dashboard counters for one owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: usize,
    /// Created in the current calendar month
    pub this_month: usize,
    pub generating: usize,
    pub draft: usize,
    pub completed: usize,
}

impl ReportStats {
    pub fn tally(reports: &[Report], now: DateTime<Utc>) -> Self {
        let mut stats = Self::default();
        for report in reports {
            stats.total += 1;
            if report.created_at.year() == now.year() && report.created_at.month() == now.month() {
                stats.this_month += 1;
            }
            match report.status {
                ReportStatus::Generating => stats.generating += 1,
                ReportStatus::Draft => stats.draft += 1,
                ReportStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }
}
