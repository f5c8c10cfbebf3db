//! Commit list rendering.

use std::fmt::Write;

use hoa_news_report_models::{CommitEntry, RepoTitleMap, title_or_repo};
use hoa_news_time::{DATE_FORMAT, weekday_label};

pub const UPDATES_HEADING: &str = "## 更新内容";
pub const DAILY_UPDATES_HEADING: &str = "## 今日更新";
pub const NO_UPDATES: &str = "暂无更新";

/// Render commits grouped by display day, newest first.
///
/// Returns an empty string when there are no commits.
#[must_use]
pub fn build_markdown(commits: &[CommitEntry], repo_titles: &RepoTitleMap, org: &str) -> String {
    if commits.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str(UPDATES_HEADING);
    output.push_str("\n\n");

    let mut prev_day = String::new();
    for commit in newest_first(commits) {
        let day = commit.date.format(DATE_FORMAT).to_string();
        if day != prev_day {
            write!(
                output,
                "### {} ({})\n\n",
                weekday_label(&commit.date),
                commit.date.format("%-m.%-d")
            )
            .unwrap();
            prev_day = day;
        }
        write!(output, "{}\n\n", commit_line(commit, repo_titles, org)).unwrap();
    }

    output
}

/// Render the commit half of the daily digest, with times instead of day
/// headings.
#[must_use]
pub fn build_daily_markdown(
    commits: &[CommitEntry],
    repo_titles: &RepoTitleMap,
    org: &str,
) -> String {
    let mut output = String::new();
    output.push_str(DAILY_UPDATES_HEADING);
    output.push_str("\n\n");

    if commits.is_empty() {
        output.push_str(NO_UPDATES);
        output.push_str("\n\n");
        return output;
    }

    for commit in newest_first(commits) {
        write!(
            output,
            "{} ({})\n\n",
            commit_line(commit, repo_titles, org),
            commit.date.format("%H:%M")
        )
        .unwrap();
    }

    output
}

fn commit_line(commit: &CommitEntry, repo_titles: &RepoTitleMap, org: &str) -> String {
    let title = title_or_repo(repo_titles, &commit.repo);
    format!(
        "- {} 在 [{title}](https://github.com/{org}/{}) 中提交了信息：{}",
        commit.author_name,
        commit.repo,
        commit.first_line()
    )
}

fn newest_first(commits: &[CommitEntry]) -> Vec<&CommitEntry> {
    let mut sorted: Vec<_> = commits.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
