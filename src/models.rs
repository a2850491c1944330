use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day as reported by the contributions API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

/// Sunday first; `None` marks a day outside the queried range.
pub type Week = [Option<DayCell>; 7];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub label: String,
    pub column: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributionCalendar {
    pub total: u64,
    pub weeks: Vec<Week>,
    pub months: Vec<MonthLabel>,
}

#[derive(Debug, Clone, Default)]
pub struct Contributions {
    pub total: u64,
    pub days: Vec<DayActivity>,
}

#[derive(Debug, Deserialize)]
pub struct ContributionsPayload {
    #[serde(default)]
    pub total: BTreeMap<String, u64>,
    #[serde(default)]
    pub contributions: Vec<DayActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
}

/// Admin form input. A present `slug` means "edit that post".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: EventRepo,
    pub created_at: String,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Option<Vec<EventCommit>>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub ref_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventCommit {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub kind: String,
    pub repo: String,
    pub description: String,
    pub created_at: String,
    pub ago: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub repos_available: bool,
    pub events_available: bool,
    pub repos: Vec<GithubRepo>,
    pub events: Vec<EventSummary>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub y: Option<String>,
}
