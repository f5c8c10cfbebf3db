#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Classification of commit authors as automation accounts.
//!
//! The registry is built once at startup and handed to whatever needs to
//! classify authors, so the known-bot list is never mutated mid-run.

use std::collections::BTreeSet;

/// Suffix GitHub appends to app/bot account names and logins.
pub const BOT_SUFFIX: &str = "[bot]";

const DEFAULT_BOTS: &[&str] = &[
    "github actions",
    "github-actions",
    "actions-user",
    "github-actions[bot]",
    "dependabot",
    "dependabot[bot]",
    "renovate",
    "renovate[bot]",
];

/// Immutable set of known automation account names and logins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotRegistry {
    names: BTreeSet<String>,
}

impl BotRegistry {
    /// Registry with no known names. Only the `[bot]` suffix rule applies.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add extra names on top of the current set.
    ///
    /// Names are normalized the same way author fields are, so callers can
    /// pass them in any case.
    #[must_use]
    pub fn with_extra<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(|name| normalize(name.as_ref()))
                .filter(|name| !name.is_empty()),
        );
        self
    }

    /// Whether a commit author looks like an automation account.
    ///
    /// Either field matching the registry, or ending with [`BOT_SUFFIX`], is
    /// enough. Empty fields never match.
    #[must_use]
    pub fn is_bot(&self, author_name: &str, author_login: &str) -> bool {
        [author_name, author_login]
            .into_iter()
            .map(normalize)
            .any(|field| {
                !field.is_empty() && (self.names.contains(&field) || field.ends_with(BOT_SUFFIX))
            })
    }
}

impl Default for BotRegistry {
    fn default() -> Self {
        Self::empty().with_extra(DEFAULT_BOTS)
    }
}

fn normalize(field: &str) -> String {
    field.trim().to_lowercase()
}
