#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use hoa_news_fetch_models::{Item, RawCommit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GithubAccount {
    #[serde(default)]
    pub login: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubLabel {
    pub name: String,
}

/// `GET /search/issues` response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubSearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<GithubSearchItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubSearchItem {
    pub title: String,
    pub html_url: String,
    /// API URL of the owning repository, e.g.
    /// `https://api.github.com/repos/{owner}/{repo}`.
    pub repository_url: String,
    pub created_at: String,
    #[serde(default)]
    pub user: Option<GithubAccount>,
    #[serde(default)]
    pub labels: Vec<GithubLabel>,
}

impl GithubSearchItem {
    /// Repository name taken from the last segment of `repository_url`.
    #[must_use]
    pub fn repository_name(&self) -> &str {
        self.repository_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

impl From<GithubSearchItem> for Item {
    fn from(value: GithubSearchItem) -> Self {
        Self {
            repository: value.repository_name().to_string(),
            title: value.title,
            url: value.html_url,
            created_at: value.created_at,
            author: value.user.map(|user| user.login).unwrap_or_default(),
            labels: value.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}

/// One entry of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubCommitResponse {
    pub commit: GithubCommitDetail,
    /// Linked account. `null` when the author email has no account.
    #[serde(default)]
    pub author: Option<GithubAccount>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubCommitDetail {
    #[serde(default)]
    pub author: Option<GithubCommitAuthor>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GithubCommitAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
}

impl GithubCommitResponse {
    #[must_use]
    pub fn into_raw(self, repo: &str) -> RawCommit {
        let author = self.commit.author.unwrap_or_default();
        RawCommit {
            repo: repo.to_string(),
            author_name: author.name,
            author_login: self
                .author
                .map(|account| account.login)
                .filter(|login| !login.is_empty()),
            date: author.date,
            message: self.commit.message,
        }
    }
}
