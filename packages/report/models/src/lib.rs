#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Data produced by commit aggregation and consumed by report rendering.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Repository name to human-readable course title.
pub type RepoTitleMap = BTreeMap<String, String>;

/// Display title for `repo`, falling back to the repository name.
#[must_use]
pub fn title_or_repo<'a>(titles: &'a RepoTitleMap, repo: &'a str) -> &'a str {
    titles.get(repo).map_or(repo, String::as_str)
}

/// One commit, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEntry {
    pub author_name: String,
    pub author_login: Option<String>,
    /// Author date already shifted to display time.
    pub date: NaiveDateTime,
    /// Full commit message; renderers only show the first line.
    pub message: String,
    pub repo: String,
}

impl CommitEntry {
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.message.split('\n').next().unwrap_or_default()
    }
}

/// Commits of every repository in a window, plus what was learned about the
/// repositories while collecting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAggregate {
    /// All commits with a parseable date, bot-authored ones included.
    pub commits: Vec<CommitEntry>,
    /// Titles of repositories with manual activity whose tag file resolved.
    pub repo_titles: RepoTitleMap,
    /// Repositories with at least one commit by a non-bot author.
    pub manual_activity: BTreeSet<String>,
}

impl CommitAggregate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    #[must_use]
    pub fn has_manual_activity(&self, repo: &str) -> bool {
        self.manual_activity.contains(repo)
    }

    /// Display title for `repo`, falling back to the repository name.
    #[must_use]
    pub fn title_of<'a>(&'a self, repo: &'a str) -> &'a str {
        title_or_repo(&self.repo_titles, repo)
    }

    /// Keep only commits whose author `is_bot` rejects.
    #[must_use]
    pub fn without_commits_by(mut self, is_bot: impl Fn(&CommitEntry) -> bool) -> Self {
        self.commits.retain(|commit| !is_bot(commit));
        self
    }

    /// Keep only commits from repositories with manual activity.
    #[must_use]
    pub fn manual_only(mut self) -> Self {
        let manual = &self.manual_activity;
        self.commits.retain(|commit| manual.contains(&commit.repo));
        self
    }
}
