//! The issue and pull request half of the daily digest.

use hoa_news_fetch::FetchClient;
use hoa_news_fetch_models::ItemKind;
use hoa_news_report::daily::update_daily_report;
use hoa_news_report::items::filter_by_public_repos;

use crate::config::Config;

/// Most open items listed per kind.
pub const SEARCH_LIMIT: usize = 100;

/// Search open issues and pull requests and rewrite the matching sections of
/// the daily digest.
///
/// # Errors
///
/// * If either search fails
/// * If the daily digest can't be read or written
pub async fn run_news(fetch: &dyn FetchClient, config: &Config) -> anyhow::Result<()> {
    log::info!(
        "Searching open issues and pull requests in {} via {}",
        config.org,
        fetch.provider_name()
    );

    let issues = fetch
        .search_open_items(ItemKind::Issue, &config.org, SEARCH_LIMIT)
        .await?;
    let prs = fetch
        .search_open_items(ItemKind::PullRequest, &config.org, SEARCH_LIMIT)
        .await?;

    let issues = filter_by_public_repos(issues, &config.repos);
    let prs = filter_by_public_repos(prs, &config.repos);
    log::info!(
        "{} open issue(s), {} open pull request(s) in public repositories",
        issues.len(),
        prs.len()
    );

    update_daily_report(&config.paths().daily(), &issues, &prs)?;
    Ok(())
}
