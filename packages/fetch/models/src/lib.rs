#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Issue,
    #[strum(serialize = "pr")]
    #[serde(rename = "pr")]
    PullRequest,
}

/// An open issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub url: String,
    pub repository: String,
    /// Creation time as reported by the API, normally RFC 3339 UTC.
    pub created_at: String,
    pub author: String,
    pub labels: Vec<String>,
}

/// A commit as listed by the API, before any classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    pub repo: String,
    pub author_name: String,
    /// Account handle. Missing when the commit email isn't linked to an
    /// account.
    pub author_login: Option<String>,
    /// Author date as reported by the API, normally RFC 3339 UTC.
    pub date: String,
    pub message: String,
}
