pub mod github;
pub mod trello;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::ItemState;

#[derive(Debug, Clone, Deserialize)]
pub struct NamedLabel {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Badges {
    #[serde(default)]
    pub comments: u32,
}

/// A card as the Trello API returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub id: String,
    pub name: String,
    pub id_list: String,
    pub due: Option<DateTime<Utc>>,
    pub short_url: Option<String>,
    pub short_link: Option<String>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub badges: Badges,
    #[serde(default)]
    pub labels: Vec<NamedLabel>,
}

/// An issue as the GitHub API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub title: String,
    pub number: u64,
    pub state: ItemState,
    #[serde(default)]
    pub labels: Vec<NamedLabel>,
    /// Present only when the entry is a pull request.
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

#[async_trait]
pub trait BoardSource: Send + Sync {
    async fn fetch_board_cards(&self, board_id: &str) -> Result<Vec<RawCard>>;
}

#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// All issues in `state`, requested `page_size` at a time.
    async fn fetch_issues(&self, state: ItemState, page_size: u32) -> Result<Vec<RawIssue>>;
    async fn create_issue(&self, title: &str, labels: &[String]) -> Result<()>;
    async fn edit_issue(
        &self,
        number: u64,
        title: &str,
        labels: &[String],
        state: ItemState,
    ) -> Result<()>;
}

/// Turns a non-success response into an error carrying the status and body.
pub(crate) async fn check_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    anyhow::bail!("{what} returned {status}: {}", body.trim())
}
