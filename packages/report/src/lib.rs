#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Commit aggregation, Markdown rendering and report persistence.

pub mod aggregate;
pub mod daily;
pub mod items;
pub mod markdown;
pub mod paths;
pub mod weekly;

pub use aggregate::{collect_commits, parse_course_name, without_bots};
pub use hoa_news_report_models as models;
pub use markdown::build_markdown;
pub use paths::ReportPaths;

use std::path::{Path, PathBuf};

/// Errors that can occur when writing reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Failed to read an existing report.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a report or create its directory.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to render front matter.
    #[error("Failed to generate front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

/// Overwrite `path` with `content`, creating missing parent directories.
///
/// # Errors
///
/// * If the directory can't be created or the file can't be written
pub fn write_report(path: &Path, content: &str) -> Result<(), ReportError> {
    let write_err = |source: std::io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)?;

    log::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
