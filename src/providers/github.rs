use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use super::{check_status, IssueTracker, RawIssue};
use crate::config::GitHubConfig;
use crate::model::ItemState;

const DEFAULT_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("trello-github-sync/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    owner: String,
    repo: String,
    token: String,
    base: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CreateIssueBody<'a> {
    title: &'a str,
    labels: &'a [String],
}

#[derive(Serialize)]
struct EditIssueBody<'a> {
    title: &'a str,
    labels: &'a [String],
    state: ItemState,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        Self::with_base_url(config, DEFAULT_BASE)
    }

    pub fn with_base_url(config: &GitHubConfig, base: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .context("Failed to build GitHub HTTP client")?;
        Ok(Self {
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token: config.token.clone(),
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn issues_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", self.base, self.owner, self.repo)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn fetch_issues(&self, state: ItemState, page_size: u32) -> Result<Vec<RawIssue>> {
        let per_page = page_size.to_string();
        let mut issues = Vec::new();
        let mut page: u32 = 1;

        loop {
            let page_str = page.to_string();
            let resp = self
                .request(reqwest::Method::GET, self.issues_url())
                .query(&[
                    ("state", state.as_str()),
                    ("per_page", per_page.as_str()),
                    ("page", page_str.as_str()),
                ])
                .send()
                .await
                .with_context(|| format!("GitHub issues request failed ({state}, page {page})"))?;

            let batch: Vec<RawIssue> = check_status(resp, "GitHub list issues")
                .await?
                .json()
                .await
                .context("Failed to parse GitHub issues")?;

            let fetched = batch.len();
            issues.extend(batch.into_iter().filter(|i| i.pull_request.is_none()));

            if fetched == 0 || fetched < page_size as usize {
                break;
            }
            page += 1;
        }

        tracing::debug!(%state, count = issues.len(), pages = page, "fetched GitHub issues");
        Ok(issues)
    }

    async fn create_issue(&self, title: &str, labels: &[String]) -> Result<()> {
        let resp = self
            .request(reqwest::Method::POST, self.issues_url())
            .json(&CreateIssueBody { title, labels })
            .send()
            .await
            .context("GitHub create issue request failed")?;
        check_status(resp, "GitHub create issue").await?;
        Ok(())
    }

    async fn edit_issue(
        &self,
        number: u64,
        title: &str,
        labels: &[String],
        state: ItemState,
    ) -> Result<()> {
        let resp = self
            .request(reqwest::Method::PATCH, format!("{}/{number}", self.issues_url()))
            .json(&EditIssueBody {
                title,
                labels,
                state,
            })
            .send()
            .await
            .with_context(|| format!("GitHub edit issue #{number} request failed"))?;
        check_status(resp, "GitHub edit issue").await?;
        Ok(())
    }
}
