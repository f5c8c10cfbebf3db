//! Open issue and pull request sections of the daily digest.

use std::collections::BTreeSet;
use std::fmt::Write;

use hoa_news_fetch_models::Item;
use hoa_news_time::utc_to_display;

/// Heading that starts the issues section. Everything from here to the end
/// of the daily file is regenerated on each run.
pub const ISSUES_HEADING: &str = "## 待解决的 Issues";
pub const PULL_REQUESTS_HEADING: &str = "## 待合并的 Pull Requests";

const NO_ISSUES: &str = "暂无待解决的 Issues";
const NO_PULL_REQUESTS: &str = "暂无待合并的 Pull Requests";

/// Keep items from allow-listed repositories. An empty allow-list keeps
/// everything.
#[must_use]
pub fn filter_by_public_repos(items: Vec<Item>, public_repos: &BTreeSet<String>) -> Vec<Item> {
    if public_repos.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| public_repos.contains(&item.repository))
        .collect()
}

/// Render the issues section followed by the pull requests section.
#[must_use]
pub fn render_items_section(issues: &[Item], prs: &[Item]) -> String {
    let mut output = String::new();
    render_items(&mut output, ISSUES_HEADING, NO_ISSUES, issues);
    render_items(&mut output, PULL_REQUESTS_HEADING, NO_PULL_REQUESTS, prs);
    output
}

fn render_items(output: &mut String, heading: &str, empty: &str, items: &[Item]) {
    write!(output, "{heading}\n\n").unwrap();

    if items.is_empty() {
        write!(output, "{empty}\n\n").unwrap();
        return;
    }

    for item in items {
        write!(output, "### [{}]({})\n\n", item.title, item.url).unwrap();
        writeln!(output, "- **仓库**: {}", item.repository).unwrap();
        writeln!(output, "- **创建于**: {}", utc_to_display(&item.created_at)).unwrap();
        writeln!(output, "- **作者**: {}", item.author).unwrap();
        if !item.labels.is_empty() {
            writeln!(output, "- **标签**: {}", item.labels.join(", ")).unwrap();
        }
        output.push('\n');
    }
}
