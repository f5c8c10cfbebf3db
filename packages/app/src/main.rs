#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hoa_news_app::{Config, run_news, run_summary};
use hoa_news_summarizer::Summarizer;

#[derive(Debug, Parser)]
#[command(name = "hoa-news")]
#[command(about = "Daily and weekly digests of a GitHub organization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Refresh the open issues and pull requests of the daily digest")]
    News,
    #[command(about = "Write the commit digest selected by NEWS_TYPE")]
    Summary,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let fetch = hoa_news_app::github_client(config)?;

    match command {
        Command::News => run_news(&fetch, config).await,
        Command::Summary => {
            let report_type = config.report_type()?;
            let summarizer = hoa_news_app::summarizer(config)?;
            let summarizer = summarizer.as_ref().map(|s| s as &dyn Summarizer);

            run_summary(&fetch, summarizer, config, report_type, chrono::Utc::now()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use hoa_news_app::ConfigError;

    use super::*;

    const USAGE_EXIT_CODE: i32 = 2;

    fn config(vars: &[(&str, &str)]) -> Config {
        Config::from_lookup(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        })
        .unwrap()
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        let err = Cli::try_parse_from(["hoa-news"]).unwrap_err();
        assert_eq!(err.exit_code(), USAGE_EXIT_CODE);
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = Cli::try_parse_from(["hoa-news", "bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), USAGE_EXIT_CODE);
    }

    #[test]
    fn test_known_subcommands() {
        assert!(matches!(
            Cli::try_parse_from(["hoa-news", "news"]).unwrap().command,
            Command::News
        ));
        assert!(matches!(
            Cli::try_parse_from(["hoa-news", "summary"]).unwrap().command,
            Command::Summary
        ));
    }

    #[test]
    fn test_missing_required_variable_fails() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.to_string(), "Missing required environment variable ORG_NAME");
    }

    #[tokio::test]
    async fn test_summary_without_news_type_fails_before_fetching() {
        let config = config(&[("ORG_NAME", "org"), ("PERSONAL_ACCESS_TOKEN", "ghp_test")]);

        let err = run(Command::Summary, &config).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Missing("NEWS_TYPE"))
        ));
        assert_eq!(err.to_string(), "Missing required environment variable NEWS_TYPE");
    }
}
