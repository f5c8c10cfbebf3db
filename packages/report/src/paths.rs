//! Output locations under the news root.

use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "news";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    root: PathBuf,
}

impl ReportPaths {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `news/daily.mdx`
    #[must_use]
    pub fn daily(&self) -> PathBuf {
        self.root.join("daily.mdx")
    }

    /// `news/weekly/weekly-<start>`
    #[must_use]
    pub fn weekly_dir(&self, start_label: &str) -> PathBuf {
        self.root.join("weekly").join(format!("weekly-{start_label}"))
    }

    /// `news/weekly/weekly-<start>/index.mdx`
    #[must_use]
    pub fn weekly_report(&self, start_label: &str) -> PathBuf {
        self.weekly_dir(start_label).join("index.mdx")
    }

    /// `news/weekly/_index.zh-cn.md`
    #[must_use]
    pub fn weekly_index(&self) -> PathBuf {
        self.root.join("weekly").join("_index.zh-cn.md")
    }
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
