use anyhow::Result;
use chrono::{DateTime, Utc};
use hoa_news_fetch_models::{Item, ItemKind, RawCommit};

#[async_trait::async_trait]
pub trait FetchClient: Send + Sync {
    /// Open issues or pull requests across the organization, at most `limit`.
    async fn search_open_items(&self, kind: ItemKind, org: &str, limit: usize)
    -> Result<Vec<Item>>;

    /// Every commit in `repo` authored at or after `since`.
    async fn list_commits_since(
        &self,
        org: &str,
        repo: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<RawCommit>>;

    /// Raw text of the repository's tag file on its default branch.
    async fn fetch_repo_tag(&self, org: &str, repo: &str) -> Result<String>;

    fn provider_name(&self) -> &str;
}
