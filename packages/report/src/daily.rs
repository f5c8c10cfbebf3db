//! The daily digest file.
//!
//! `daily.mdx` has two halves. The head (front matter and today's commits) is
//! written by the commit digest; everything from [`ISSUES_HEADING`] onward is
//! written by the issue digest. Each writer replaces its own half and keeps
//! the other, so either can be re-run any number of times.

use std::path::Path;

use chrono::{DateTime, Utc};
use hoa_news_fetch_models::Item;
use hoa_news_front_matter::{Author, FrontMatter};
use hoa_news_time::{DATE_FORMAT, to_display};

use crate::items::{ISSUES_HEADING, render_items_section};
use crate::{ReportError, write_report};

pub const DAILY_TITLE: &str = "AUTO 更新速递";
pub const DAILY_DESCRIPTION: &str = "每日更新";

#[must_use]
pub fn daily_front_matter(now: DateTime<Utc>) -> FrontMatter {
    FrontMatter::new(
        DAILY_TITLE,
        to_display(now).format(DATE_FORMAT).to_string(),
        DAILY_DESCRIPTION,
        vec![Author::github_actions()],
    )
}

/// Split a daily file into the part before the issues heading and the part
/// from it onward.
///
/// Only a line consisting of the heading alone counts; the heading text
/// inside a commit message does not.
#[must_use]
pub fn split_at_issues(content: &str) -> (&str, &str) {
    content
        .match_indices(ISSUES_HEADING)
        .map(|(idx, _)| idx)
        .find(|&idx| {
            let starts_line = idx == 0 || content[..idx].ends_with('\n');
            let rest = &content[idx + ISSUES_HEADING.len()..];
            starts_line && (rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n"))
        })
        .map_or((content, ""), |idx| content.split_at(idx))
}

/// Replace the issues and pull requests sections of the daily file.
///
/// A missing file is treated as empty.
///
/// # Errors
///
/// * If the existing file can't be read or the new one can't be written
pub fn update_daily_report(path: &Path, issues: &[Item], prs: &[Item]) -> Result<(), ReportError> {
    let existing = read_existing(path)?;
    let (head, _) = split_at_issues(&existing);

    let mut content = String::with_capacity(head.len() + 1024);
    content.push_str(head);
    content.push_str(&render_items_section(issues, prs));

    write_report(path, &content)
}

/// Replace everything before the issues heading, keeping the issues and pull
/// requests sections if the file already has them.
///
/// # Errors
///
/// * If the existing file can't be read or the new one can't be written
pub fn replace_daily_head(path: &Path, head: &str) -> Result<(), ReportError> {
    let existing = read_existing(path)?;
    let (_, tail) = split_at_issues(&existing);

    write_report(path, &format!("{head}{tail}"))
}

fn read_existing(path: &Path) -> Result<String, ReportError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("{} does not exist yet, starting empty", path.display());
            Ok(String::new())
        }
        Err(source) => Err(ReportError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
