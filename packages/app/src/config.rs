//! Run configuration read from the environment.

use std::collections::BTreeSet;
use std::path::PathBuf;

use hoa_news_report::ReportPaths;
use hoa_news_report::paths::DEFAULT_ROOT;
use strum_macros::{AsRefStr, Display, EnumString};

pub const ORG_NAME: &str = "ORG_NAME";
pub const PERSONAL_ACCESS_TOKEN: &str = "PERSONAL_ACCESS_TOKEN";
pub const REPOS_ARRAY: &str = "repos_array";
pub const NEWS_TYPE: &str = "NEWS_TYPE";
pub const NEWS_DIR: &str = "NEWS_DIR";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";

/// Errors that can occur when reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    /// `repos_array` is not a JSON array of strings.
    #[error("repos_array must be a JSON array of repository names: {0}")]
    InvalidRepos(#[from] serde_json::Error),

    /// `NEWS_TYPE` is neither `daily` nor `weekly`.
    #[error("NEWS_TYPE must be daily or weekly, got {0:?}")]
    InvalidReportType(String),
}

/// Which digest the `summary` command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReportType {
    Daily,
    Weekly,
}

/// Endpoint settings for the weekly summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub org: String,
    pub token: String,
    /// Repositories to digest. Also the allow-list for issues and pull
    /// requests; empty means no filtering.
    pub repos: BTreeSet<String>,
    news_type: Option<String>,
    pub news_dir: PathBuf,
    /// `None` when no API key is configured.
    pub llm: Option<LlmConfig>,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// * If a required variable is missing or a value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// * If a required variable is missing or a value is malformed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let repos = match get(REPOS_ARRAY) {
            Some(json) => serde_json::from_str::<Vec<String>>(&json)?
                .into_iter()
                .map(|repo| repo.trim().to_string())
                .filter(|repo| !repo.is_empty())
                .collect(),
            None => BTreeSet::new(),
        };

        let llm = get(OPENAI_API_KEY).map(|api_key| LlmConfig {
            api_key,
            base_url: get(OPENAI_BASE_URL),
            model: get(OPENAI_MODEL),
        });

        Ok(Self {
            org: require(ORG_NAME)?,
            token: require(PERSONAL_ACCESS_TOKEN)?,
            repos,
            news_type: get(NEWS_TYPE),
            news_dir: get(NEWS_DIR).map_or_else(|| PathBuf::from(DEFAULT_ROOT), PathBuf::from),
            llm,
        })
    }

    /// The report type requested through `NEWS_TYPE`.
    ///
    /// # Errors
    ///
    /// * If `NEWS_TYPE` is unset or not a known report type
    pub fn report_type(&self) -> Result<ReportType, ConfigError> {
        let value = self
            .news_type
            .as_deref()
            .ok_or(ConfigError::Missing(NEWS_TYPE))?;
        value
            .trim()
            .to_lowercase()
            .parse()
            .map_err(|_| ConfigError::InvalidReportType(value.to_string()))
    }

    #[must_use]
    pub fn paths(&self) -> ReportPaths {
        ReportPaths::new(self.news_dir.clone())
    }
}
