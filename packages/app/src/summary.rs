//! Commit digests: the head of the daily file and the weekly report.

use chrono::{DateTime, Utc};
use hoa_news_bot::BotRegistry;
use hoa_news_fetch::FetchClient;
use hoa_news_report::daily::{daily_front_matter, replace_daily_head};
use hoa_news_report::markdown::build_daily_markdown;
use hoa_news_report::weekly::{assemble_report, weekly_front_matter, write_weekly_index};
use hoa_news_report::{build_markdown, collect_commits, without_bots, write_report};
use hoa_news_summarizer::{Summarizer, summary_section};
use hoa_news_time::{daily_window, weekly_window};

use crate::config::{Config, ReportType};

/// Produce the commit digest of `report_type` as of `now`.
///
/// # Errors
///
/// * If front matter can't be rendered or the report can't be written
pub async fn run_summary(
    fetch: &dyn FetchClient,
    summarizer: Option<&dyn Summarizer>,
    config: &Config,
    report_type: ReportType,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    if config.repos.is_empty() {
        log::warn!("No repositories configured, the {report_type} digest will have no commits");
    }

    match report_type {
        ReportType::Daily => run_daily(fetch, config, now).await,
        ReportType::Weekly => run_weekly(fetch, summarizer, config, now).await,
    }
}

async fn run_daily(fetch: &dyn FetchClient, config: &Config, now: DateTime<Utc>) -> anyhow::Result<()> {
    let bots = BotRegistry::default();
    let window = daily_window(now);
    log::info!("Collecting commits since {} for the daily digest", window.since);

    let aggregate = collect_commits(fetch, &bots, &config.org, repo_names(config), window.since).await;
    let aggregate = without_bots(aggregate, &bots);
    log::info!("{} manual commit(s) in the last day", aggregate.commits.len());

    let head = format!(
        "{}\n{}",
        daily_front_matter(now).to_block()?,
        build_daily_markdown(&aggregate.commits, &aggregate.repo_titles, &config.org)
    );
    replace_daily_head(&config.paths().daily(), &head)?;
    Ok(())
}

async fn run_weekly(
    fetch: &dyn FetchClient,
    summarizer: Option<&dyn Summarizer>,
    config: &Config,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let bots = BotRegistry::default();
    let window = weekly_window(now);
    log::info!("Collecting commits since {} for the weekly report", window.since);

    let aggregate = collect_commits(fetch, &bots, &config.org, repo_names(config), window.since).await;
    for repo in repo_names(config) {
        if aggregate.has_manual_activity(repo) {
            log::debug!("{repo}: manual activity as {}", aggregate.title_of(repo));
        } else {
            log::debug!("{repo}: no manual activity, left out of the weekly report");
        }
    }

    let aggregate = aggregate.manual_only();
    if aggregate.is_empty() {
        log::info!("No commits since {}, skipping the weekly report", window.start_label());
        return Ok(());
    }

    let body = build_markdown(&aggregate.commits, &aggregate.repo_titles, &config.org);
    let summary = match summarizer {
        Some(summarizer) => summary_section(summarizer, &body).await,
        None => {
            log::info!("No summarizer configured, writing the full report only");
            None
        }
    };

    let report = assemble_report(
        &weekly_front_matter(&window, now).to_block()?,
        summary.as_deref(),
        &body,
    );

    let paths = config.paths();
    write_report(&paths.weekly_report(&window.start_label()), &report)?;

    if let Err(e) = write_weekly_index(&paths.weekly_index(), now) {
        log::error!("Failed to update the weekly index: {e}");
    }

    Ok(())
}

fn repo_names(config: &Config) -> impl Iterator<Item = &str> {
    config.repos.iter().map(String::as_str)
}
