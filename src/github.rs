//! Best-effort reads from the public GitHub and contributions APIs.
//!
//! Every call resolves to [`Fetched::Unavailable`] on any failure; nothing is
//! retried and no error reaches the caller.

use crate::calendar::YearSelector;
use crate::config::Config;
use crate::models::{
    Contributions, ContributionsPayload, EventSummary, GithubEvent, GithubRepo,
};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

const USER_AGENT: &str = concat!("portfolio/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const REPO_LIMIT: &str = "5";
const EVENT_LIMIT: &str = "10";

#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Available(T),
    Unavailable,
}

impl<T> Fetched<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Fetched::Available(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Available(value) => Some(value),
            Fetched::Unavailable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Available(value) => Fetched::Available(f(value)),
            Fetched::Unavailable => Fetched::Unavailable,
        }
    }
}

impl<T: Default> Fetched<T> {
    pub fn unwrap_or_default(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    account: String,
    api_url: String,
    contributions_url: String,
}

impl GithubClient {
    pub fn new(
        account: impl Into<String>,
        api_url: impl Into<String>,
        contributions_url: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            account: account.into(),
            api_url: api_url.into(),
            contributions_url: contributions_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.github_account.clone(),
            config.github_api_url.clone(),
            config.contributions_api_url.clone(),
        )
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Most recently updated repositories.
    pub async fn repos(&self) -> Fetched<Vec<GithubRepo>> {
        let url = format!("{}/users/{}/repos", self.api_url, self.account);
        let request = self
            .http
            .get(url)
            .query(&[("sort", "updated"), ("per_page", REPO_LIMIT)]);
        fetch_json("repos", request).await
    }

    pub async fn events(&self) -> Fetched<Vec<GithubEvent>> {
        let url = format!("{}/users/{}/events", self.api_url, self.account);
        let request = self.http.get(url).query(&[("per_page", EVENT_LIMIT)]);
        fetch_json("events", request).await
    }

    pub async fn contributions(&self, selector: YearSelector) -> Fetched<Contributions> {
        let url = format!("{}/v4/{}", self.contributions_url, self.account);
        let request = self.http.get(url).query(&[("y", selector.to_string())]);
        let payload: Fetched<ContributionsPayload> = fetch_json("contributions", request).await;
        payload.map(|payload| {
            let total = payload
                .total
                .get(&selector.total_key())
                .copied()
                .unwrap_or_else(|| payload.contributions.iter().map(|day| u64::from(day.count)).sum());
            Contributions {
                total,
                days: payload.contributions,
            }
        })
    }

    /// Repositories and events, fetched concurrently and independently.
    pub async fn activity(&self) -> (Fetched<Vec<GithubRepo>>, Fetched<Vec<GithubEvent>>) {
        tokio::join!(self.repos(), self.events())
    }
}

async fn fetch_json<T: DeserializeOwned>(source: &'static str, request: RequestBuilder) -> Fetched<T> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(source, "github request failed: {err}");
            return Fetched::Unavailable;
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!(source, %status, "github request returned non-success status");
        return Fetched::Unavailable;
    }

    match response.json::<T>().await {
        Ok(value) => Fetched::Available(value),
        Err(err) => {
            warn!(source, "github response did not decode: {err}");
            Fetched::Unavailable
        }
    }
}

pub fn summarize_event(event: &GithubEvent, now: DateTime<Utc>) -> EventSummary {
    EventSummary {
        id: event.id.clone(),
        kind: event.kind.clone(),
        repo: event.repo.name.clone(),
        description: describe_event(event),
        created_at: event.created_at.clone(),
        ago: time_ago(&event.created_at, now),
    }
}

pub fn describe_event(event: &GithubEvent) -> String {
    let repo = short_repo_name(&event.repo.name);
    let payload = &event.payload;
    let action = payload.action.as_deref().unwrap_or("updated");

    match event.kind.as_str() {
        "PushEvent" => {
            let message = payload
                .commits
                .as_ref()
                .and_then(|commits| commits.first())
                .map(|commit| commit.message.as_str())
                .filter(|message| !message.is_empty())
                .unwrap_or("code changes");
            format!("Pushed to {repo}: \"{message}\"")
        }
        "CreateEvent" => {
            let ref_type = payload.ref_type.as_deref().unwrap_or("ref");
            match payload.git_ref.as_deref().filter(|git_ref| !git_ref.is_empty()) {
                Some(git_ref) => format!("Created {ref_type} {git_ref} in {repo}"),
                None => format!("Created {ref_type} in {repo}"),
            }
        }
        "WatchEvent" => format!("Starred {repo}"),
        "ForkEvent" => format!("Forked {repo}"),
        "IssuesEvent" => format!("{action} issue in {repo}"),
        "PullRequestEvent" => format!("{action} PR in {repo}"),
        other => format!("{} in {repo}", other.replacen("Event", "", 1)),
    }
}

/// Coarse relative age: minutes under an hour, hours under a day, then days.
pub fn time_ago(created_at: &str, now: DateTime<Utc>) -> String {
    let Ok(created) = DateTime::parse_from_rfc3339(created_at) else {
        return String::new();
    };
    let minutes = (now - created.with_timezone(&Utc)).num_minutes().max(0);
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

fn short_repo_name(full: &str) -> &str {
    full.split_once('/').map(|(_, name)| name).unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventCommit, EventPayload, EventRepo};

    fn event(kind: &str, payload: EventPayload) -> GithubEvent {
        GithubEvent {
            id: "1".into(),
            kind: kind.into(),
            repo: EventRepo {
                name: "shrssrhs/habit-tracker".into(),
            },
            created_at: "2025-03-01T12:00:00Z".into(),
            payload,
        }
    }

    #[test]
    fn push_event_uses_first_commit_message() {
        let payload = EventPayload {
            commits: Some(vec![
                EventCommit { message: "fix streaks".into() },
                EventCommit { message: "later".into() },
            ]),
            ..Default::default()
        };
        assert_eq!(
            describe_event(&event("PushEvent", payload)),
            "Pushed to habit-tracker: \"fix streaks\""
        );
        assert_eq!(
            describe_event(&event("PushEvent", EventPayload::default())),
            "Pushed to habit-tracker: \"code changes\""
        );
    }

    #[test]
    fn create_and_action_events() {
        let create = EventPayload {
            ref_type: Some("branch".into()),
            git_ref: Some("main".into()),
            ..Default::default()
        };
        assert_eq!(
            describe_event(&event("CreateEvent", create)),
            "Created branch main in habit-tracker"
        );

        let repo_created = EventPayload {
            ref_type: Some("repository".into()),
            ..Default::default()
        };
        assert_eq!(
            describe_event(&event("CreateEvent", repo_created)),
            "Created repository in habit-tracker"
        );

        let opened = EventPayload {
            action: Some("opened".into()),
            ..Default::default()
        };
        assert_eq!(
            describe_event(&event("IssuesEvent", opened.clone())),
            "opened issue in habit-tracker"
        );
        assert_eq!(
            describe_event(&event("PullRequestEvent", opened)),
            "opened PR in habit-tracker"
        );
    }

    #[test]
    fn simple_and_unknown_events() {
        assert_eq!(describe_event(&event("WatchEvent", Default::default())), "Starred habit-tracker");
        assert_eq!(describe_event(&event("ForkEvent", Default::default())), "Forked habit-tracker");
        assert_eq!(
            describe_event(&event("DeleteEvent", Default::default())),
            "Delete in habit-tracker"
        );
    }

    #[test]
    fn time_ago_buckets() {
        let now = DateTime::parse_from_rfc3339("2025-03-02T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(time_ago("2025-03-02T11:15:00Z", now), "45m ago");
        assert_eq!(time_ago("2025-03-02T07:00:00Z", now), "5h ago");
        assert_eq!(time_ago("2025-02-27T12:00:00Z", now), "3d ago");
        assert_eq!(time_ago("2025-03-02T12:30:00Z", now), "0m ago");
        assert_eq!(time_ago("yesterday", now), "");
    }

    #[test]
    fn fetched_helpers() {
        let available: Fetched<Vec<u8>> = Fetched::Available(vec![1]);
        assert!(available.is_available());
        assert_eq!(available.map(|v| v.len()), Fetched::Available(1));
        let missing: Fetched<Vec<u8>> = Fetched::Unavailable;
        assert!(missing.unwrap_or_default().is_empty());
    }
}
