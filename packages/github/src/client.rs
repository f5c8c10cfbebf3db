use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use hoa_news_fetch::{FetchClient, PageSource, collect_pages};
use hoa_news_fetch_models::{Item, ItemKind, RawCommit};
use hoa_news_github_models::{GithubCommitResponse, GithubSearchResponse};

use crate::pages::LinkPages;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// File on a repository's default branch holding its course metadata.
pub const TAG_FILE: &str = "tag.txt";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_PER_PAGE: usize = 100;

pub struct GitHubClient {
    http_client: reqwest::Client,
    auth_token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client without authentication.
    ///
    /// # Errors
    ///
    /// * If the `reqwest::Client` fails to build
    pub fn new() -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent("hoa-news")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http_client,
            auth_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn pages<B: crate::pages::PageBody>(&self, first_url: reqwest::Url) -> LinkPages<B> {
        LinkPages::new(
            self.http_client.clone(),
            self.auth_token.clone(),
            first_url.into(),
        )
    }
}

#[async_trait::async_trait]
impl FetchClient for GitHubClient {
    async fn search_open_items(
        &self,
        kind: ItemKind,
        org: &str,
        limit: usize,
    ) -> Result<Vec<Item>> {
        if limit == 0 {
            return Ok(vec![]);
        }

        let query = format!("org:{org} is:{kind} is:open");
        let url = reqwest::Url::parse_with_params(
            &format!("{}/search/issues", self.base_url),
            &[
                ("q", query),
                ("per_page", limit.min(MAX_PER_PAGE).to_string()),
            ],
        )?;

        let mut pages = self.pages::<GithubSearchResponse>(url);
        let mut items = Vec::new();
        while items.len() < limit {
            let Some(page) = pages.next_page().await? else {
                break;
            };
            items.extend(page.into_iter().map(Item::from));
        }
        items.truncate(limit);

        log::debug!("found {} open {kind} item(s) in {org}", items.len());

        Ok(items)
    }

    async fn list_commits_since(
        &self,
        org: &str,
        repo: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<RawCommit>> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/repos/{org}/{repo}/commits", self.base_url),
            &[
                ("since", since.to_rfc3339_opts(SecondsFormat::Secs, true)),
                ("per_page", MAX_PER_PAGE.to_string()),
            ],
        )?;

        let commits = collect_pages(self.pages::<Vec<GithubCommitResponse>>(url)).await?;

        Ok(commits
            .into_iter()
            .map(|commit| commit.into_raw(repo))
            .collect())
    }

    async fn fetch_repo_tag(&self, org: &str, repo: &str) -> Result<String> {
        let url = format!("{}/repos/{org}/{repo}/contents/{TAG_FILE}", self.base_url);
        log::debug!("GET {url}");
        let mut request = self
            .http_client
            .get(&url)
            .header("Accept", "application/vnd.github.raw");

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("{TAG_FILE} not found in {org}/{repo}");
        }
        if !status.is_success() {
            log::error!("GitHub API error: {}", response.text().await?);
            anyhow::bail!("GitHub API error: {status}");
        }

        Ok(response.text().await?)
    }

    fn provider_name(&self) -> &'static str {
        "github"
    }
}
