//! Per-repository commit collection.

use chrono::{DateTime, Utc};
use hoa_news_bot::BotRegistry;
use hoa_news_fetch::FetchClient;
use hoa_news_fetch_models::RawCommit;
use hoa_news_report_models::{CommitAggregate, CommitEntry};

/// Marker preceding the course title in a repository's tag file.
pub const NAME_MARKER: &str = "name:";

/// Collect every commit since `since` across `repos`, one repository at a
/// time.
///
/// Commits authored before `since` are dropped even when the listing returns
/// them. A repository whose commit listing fails is logged and left out; the
/// rest of the run carries on. Repositories with at least one non-bot commit get
/// a best-effort title lookup.
pub async fn collect_commits<'a, I>(
    fetch: &dyn FetchClient,
    bots: &BotRegistry,
    org: &str,
    repos: I,
    since: DateTime<Utc>,
) -> CommitAggregate
where
    I: IntoIterator<Item = &'a str>,
{
    let mut aggregate = CommitAggregate::default();

    for repo in repos {
        let raw_commits = match fetch.list_commits_since(org, repo, since).await {
            Ok(commits) => commits,
            Err(e) => {
                log::warn!("Failed to fetch commits for {repo}: {e}");
                continue;
            }
        };
        log::debug!("{repo}: {} commit(s) since {since}", raw_commits.len());

        let mut manual = false;
        for raw in raw_commits {
            if authored_before(&raw, since) {
                log::debug!("{repo}: skipping commit authored {} before the window", raw.date);
                continue;
            }
            if !bots.is_bot(&raw.author_name, raw.author_login.as_deref().unwrap_or_default()) {
                manual = true;
            }
            if let Some(entry) = to_entry(raw, repo) {
                aggregate.commits.push(entry);
            }
        }

        if manual {
            aggregate.manual_activity.insert(repo.to_string());
            if let Some(title) = resolve_title(fetch, org, repo).await {
                aggregate.repo_titles.insert(repo.to_string(), title);
            }
        }
    }

    aggregate
}

/// Drop bot-authored commits from an aggregate.
#[must_use]
pub fn without_bots(aggregate: CommitAggregate, bots: &BotRegistry) -> CommitAggregate {
    aggregate.without_commits_by(|commit| {
        bots.is_bot(
            &commit.author_name,
            commit.author_login.as_deref().unwrap_or_default(),
        )
    })
}

/// Extract the course title from a tag file.
///
/// The title is whatever follows the first `name:` marker on its line.
#[must_use]
pub fn parse_course_name(text: &str) -> Option<String> {
    let (_, after) = text.split_once(NAME_MARKER)?;
    let name = after.lines().next().unwrap_or_default().trim();
    (!name.is_empty()).then(|| name.to_string())
}

async fn resolve_title(fetch: &dyn FetchClient, org: &str, repo: &str) -> Option<String> {
    match fetch.fetch_repo_tag(org, repo).await {
        Ok(text) => {
            let name = parse_course_name(&text);
            if name.is_none() {
                log::debug!("{repo}: tag file has no {NAME_MARKER} entry");
            }
            name
        }
        Err(e) => {
            log::debug!("{repo}: no title ({e})");
            None
        }
    }
}

/// The listing filters by committer date, so rebased or cherry-picked commits
/// can carry an older author date.
fn authored_before(raw: &RawCommit, since: DateTime<Utc>) -> bool {
    hoa_news_time::parse_rfc3339(&raw.date).is_some_and(|instant| instant < since)
}

fn to_entry(raw: RawCommit, repo: &str) -> Option<CommitEntry> {
    let Some(instant) = hoa_news_time::parse_rfc3339(&raw.date) else {
        log::debug!("{repo}: skipping commit with unparseable date {:?}", raw.date);
        return None;
    };

    Some(CommitEntry {
        author_name: raw.author_name,
        author_login: raw.author_login,
        date: hoa_news_time::to_display(instant),
        message: raw.message,
        repo: repo.to_string(),
    })
}
