#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Front matter blocks for generated report documents.

use serde::Serialize;

pub const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub link: String,
    pub image: String,
}

impl Author {
    #[must_use]
    pub fn new(name: impl Into<String>, link: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            image: image.into(),
        }
    }

    /// Author shown on daily digests.
    #[must_use]
    pub fn github_actions() -> Self {
        Self::new(
            "github-actions[bot]",
            "https://github.com/features/actions",
            "https://avatars.githubusercontent.com/in/15368",
        )
    }

    /// Author shown on LLM-summarized weekly reports.
    #[must_use]
    pub fn chatgpt() -> Self {
        Self::new(
            "ChatGPT",
            "https://github.com/openai",
            "https://github.com/openai.png",
        )
    }
}

/// Metadata block at the top of every report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub authors: Vec<Author>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub exclude_search: bool,
    pub draft: bool,
}

impl FrontMatter {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
        authors: Vec<Author>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            authors,
            description: description.into(),
            exclude_search: false,
            draft: false,
        }
    }

    /// Render the YAML body, without delimiters.
    ///
    /// # Errors
    ///
    /// * If YAML serialization fails
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Render the YAML body wrapped in `---` delimiter lines.
    ///
    /// # Errors
    ///
    /// * If YAML serialization fails
    pub fn to_block(&self) -> Result<String, serde_yaml::Error> {
        Ok(wrap(&self.to_yaml()?))
    }
}

/// Front matter of the rolling weekly index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexFrontMatter {
    pub title: String,
    pub date: String,
    pub description: String,
}

impl IndexFrontMatter {
    /// # Errors
    ///
    /// * If YAML serialization fails
    pub fn to_block(&self) -> Result<String, serde_yaml::Error> {
        Ok(wrap(&serde_yaml::to_string(self)?))
    }
}

fn wrap(yaml: &str) -> String {
    if yaml.ends_with('\n') {
        format!("{DELIMITER}\n{yaml}{DELIMITER}\n")
    } else {
        format!("{DELIMITER}\n{yaml}\n{DELIMITER}\n")
    }
}
