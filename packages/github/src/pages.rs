//! `Link` header pagination.

use anyhow::Result;
use hoa_news_fetch::PageSource;
use hoa_news_github_models::GithubSearchResponse;
use serde::de::DeserializeOwned;

/// A response body that carries one page of entries.
pub trait PageBody: DeserializeOwned + Send {
    type Entry: Send;

    fn into_entries(self) -> Vec<Self::Entry>;
}

impl<T: DeserializeOwned + Send> PageBody for Vec<T> {
    type Entry = T;

    fn into_entries(self) -> Vec<T> {
        self
    }
}

impl PageBody for GithubSearchResponse {
    type Entry = hoa_news_github_models::GithubSearchItem;

    fn into_entries(self) -> Vec<Self::Entry> {
        log::debug!("{} of {} search result(s) on this page", self.items.len(), self.total_count);
        self.items
    }
}

/// Pages of a GitHub list endpoint, following `rel="next"` links until the
/// server stops sending one.
pub struct LinkPages<B> {
    http_client: reqwest::Client,
    auth_token: Option<String>,
    next_url: Option<String>,
    _body: std::marker::PhantomData<fn() -> B>,
}

impl<B: PageBody> LinkPages<B> {
    pub(crate) fn new(
        http_client: reqwest::Client,
        auth_token: Option<String>,
        first_url: String,
    ) -> Self {
        Self {
            http_client,
            auth_token,
            next_url: Some(first_url),
            _body: std::marker::PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<B: PageBody> PageSource for LinkPages<B> {
    type Item = B::Entry;

    async fn next_page(&mut self) -> Result<Option<Vec<B::Entry>>> {
        let Some(url) = self.next_url.take() else {
            return Ok(None);
        };

        log::debug!("GET {url}");
        let mut request = self
            .http_client
            .get(&url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("GitHub API error: {}", response.text().await?);
            anyhow::bail!("GitHub API error: {status}");
        }

        let next_url = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_next_link);

        let body: B = response.json().await?;
        self.next_url = next_url;

        Ok(Some(body.into_entries()))
    }
}

/// Extract the `rel="next"` target from a `Link` header value.
#[must_use]
pub fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut sections = part.split(';').map(str::trim);
        let target = sections.next()?;
        sections
            .any(|param| param == r#"rel="next""#)
            .then(|| target.trim_start_matches('<').trim_end_matches('>').to_string())
    })
}
