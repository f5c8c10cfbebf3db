#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Orchestration for the `hoa-news` binary.

pub mod config;
mod news;
mod summary;

pub use config::{Config, ConfigError, LlmConfig, ReportType};
pub use news::{SEARCH_LIMIT, run_news};
pub use summary::run_summary;

use hoa_news_github::GitHubClient;
use hoa_news_summarizer::{OpenAiSummarizer, SummarizerError};

/// GitHub client authenticated with the configured token.
///
/// # Errors
///
/// * If the HTTP client can't be built
pub fn github_client(config: &Config) -> anyhow::Result<GitHubClient> {
    Ok(GitHubClient::new()?.with_token(config.token.clone()))
}

/// Summarizer for the configured endpoint, if an API key is set.
///
/// # Errors
///
/// * If the HTTP client can't be built
pub fn summarizer(config: &Config) -> Result<Option<OpenAiSummarizer>, SummarizerError> {
    let Some(llm) = &config.llm else {
        return Ok(None);
    };

    let mut summarizer = OpenAiSummarizer::new(llm.api_key.clone())?;
    if let Some(base_url) = &llm.base_url {
        summarizer = summarizer.with_base_url(base_url.clone());
    }
    if let Some(model) = &llm.model {
        summarizer = summarizer.with_model(model.clone());
    }
    log::debug!("Summarizing with model {}", summarizer.model());

    Ok(Some(summarizer))
}
