//! The weekly report and the rolling weekly index.

use std::path::Path;

use chrono::{DateTime, Utc};
use hoa_news_front_matter::{Author, FrontMatter, IndexFrontMatter};
use hoa_news_time::{DATE_FORMAT, Window, to_display};

use crate::{ReportError, write_report};

pub const WEEKLY_TITLE: &str = "AUTO 周报";

/// Front matter for the week starting at `window`, ending at `now`.
#[must_use]
pub fn weekly_front_matter(window: &Window, now: DateTime<Utc>) -> FrontMatter {
    let start = window.start_label();
    let end = to_display(now).format(DATE_FORMAT).to_string();

    FrontMatter::new(
        format!("{WEEKLY_TITLE} {start} - {end}"),
        end.clone(),
        format!("涵盖 {start} 至 {end} 的更新"),
        vec![Author::chatgpt()],
    )
}

/// Front matter block, then the summary if there is one, then the body.
#[must_use]
pub fn assemble_report(front_matter_block: &str, summary: Option<&str>, body: &str) -> String {
    let mut output = String::with_capacity(front_matter_block.len() + body.len() + 512);
    output.push_str(front_matter_block);
    output.push('\n');
    if let Some(summary) = summary {
        output.push_str(summary);
        output.push_str("\n\n");
    }
    output.push_str(body);
    output
}

/// Overwrite the rolling weekly index with the latest run's date.
///
/// # Errors
///
/// * If front matter rendering or the write fails
pub fn write_weekly_index(path: &Path, now: DateTime<Utc>) -> Result<(), ReportError> {
    let date = to_display(now).format(DATE_FORMAT).to_string();
    let index = IndexFrontMatter {
        title: WEEKLY_TITLE.to_string(),
        description: format!("AUTO 周报是由 ChatGPT 每周五发布的一份简报，最近更新于 {date}。"),
        date,
    };

    write_report(path, &index.to_block()?)
}
