use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use chrono::{DateTime, Duration, SecondsFormat, TimeZone as _, Utc};
use hoa_news_app::{Config, ReportType, run_news, run_summary};
use hoa_news_fetch::FetchClient;
use hoa_news_fetch_models::{Item, ItemKind, RawCommit};
use hoa_news_summarizer::{NO_SUMMARY, Summarizer, SummarizerError};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct FakeOrg {
    issues: Vec<Item>,
    prs: Vec<Item>,
    commits: BTreeMap<String, Vec<RawCommit>>,
    tags: BTreeMap<String, String>,
    fail_search: bool,
}

impl FakeOrg {
    fn commit(mut self, repo: &str, name: &str, date: DateTime<Utc>, message: &str) -> Self {
        self.commits.entry(repo.to_string()).or_default().push(RawCommit {
            repo: repo.to_string(),
            author_name: name.to_string(),
            author_login: None,
            date: date.to_rfc3339_opts(SecondsFormat::Secs, true),
            message: message.to_string(),
        });
        self
    }

    fn tag(mut self, repo: &str, name: &str) -> Self {
        self.tags.insert(repo.to_string(), format!("name: {name}\n"));
        self
    }
}

#[async_trait::async_trait]
impl FetchClient for FakeOrg {
    async fn search_open_items(&self, kind: ItemKind, _org: &str, limit: usize) -> Result<Vec<Item>> {
        if self.fail_search {
            anyhow::bail!("GitHub API error: 403 Forbidden");
        }
        let items = match kind {
            ItemKind::Issue => &self.issues,
            ItemKind::PullRequest => &self.prs,
        };
        Ok(items.iter().take(limit).cloned().collect())
    }

    async fn list_commits_since(&self, _org: &str, repo: &str, since: DateTime<Utc>) -> Result<Vec<RawCommit>> {
        Ok(self
            .commits
            .get(repo)
            .into_iter()
            .flatten()
            .filter(|c| DateTime::parse_from_rfc3339(&c.date).is_ok_and(|d| d.with_timezone(&Utc) >= since))
            .cloned()
            .collect())
    }

    async fn fetch_repo_tag(&self, _org: &str, repo: &str) -> Result<String> {
        self.tags
            .get(repo)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("tag.txt not found"))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// Returns a fixed answer and records what it was asked to summarize.
struct Canned {
    answer: Result<&'static str, &'static str>,
    seen: Mutex<Vec<String>>,
}

impl Canned {
    fn new(answer: Result<&'static str, &'static str>) -> Self {
        Self {
            answer,
            seen: Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for Canned {
    fn provider_name(&self) -> &'static str {
        "canned"
    }

    async fn summarize(&self, markdown: &str) -> Result<String, SummarizerError> {
        self.seen.lock().unwrap().push(markdown.to_string());
        self.answer
            .map(ToString::to_string)
            .map_err(|e| SummarizerError::Config(e.to_string()))
    }
}

fn item(title: &str, repo: &str) -> Item {
    Item {
        title: title.to_string(),
        url: format!("https://github.com/HITSZ-OpenAuto/{repo}/issues/1"),
        repository: repo.to_string(),
        created_at: "2026-02-12T02:00:00Z".to_string(),
        author: "zhangsan".to_string(),
        labels: vec!["help wanted".to_string()],
    }
}

fn config(news_dir: &Path, repos: &[&str]) -> Config {
    let repos = serde_json::to_string(repos).unwrap();
    let news_dir = news_dir.to_string_lossy().to_string();
    Config::from_lookup(|name| match name {
        "ORG_NAME" => Some("HITSZ-OpenAuto".to_string()),
        "PERSONAL_ACCESS_TOKEN" => Some("ghp_test".to_string()),
        "repos_array" => Some(repos.clone()),
        "NEWS_DIR" => Some(news_dir.clone()),
        _ => None,
    })
    .unwrap()
}

fn now() -> DateTime<Utc> {
    // Friday 2026-02-13 18:00 in display time.
    Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_news_writes_filtered_sections() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &["MATH1002"]);
    let fake = FakeOrg {
        issues: vec![item("Public issue", "MATH1002"), item("Private issue", "secret")],
        prs: vec![],
        ..FakeOrg::default()
    };

    run_news(&fake, &config).await.unwrap();

    let content = std::fs::read_to_string(dir.path().join("daily.mdx")).unwrap();
    assert!(content.starts_with("## 待解决的 Issues\n\n### [Public issue]"));
    assert!(content.contains("- **创建于**: 2026-02-12 10:00:00\n"));
    assert!(content.contains("- **标签**: help wanted\n"));
    assert!(!content.contains("Private issue"));
    assert!(content.ends_with("## 待合并的 Pull Requests\n\n暂无待合并的 Pull Requests\n\n"));
}

#[test_log::test(tokio::test)]
async fn test_news_search_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &[]);
    let fake = FakeOrg {
        fail_search: true,
        ..FakeOrg::default()
    };

    let err = run_news(&fake, &config).await.unwrap_err();

    assert!(err.to_string().contains("403"));
    assert!(!dir.path().join("daily.mdx").exists());
}

#[test_log::test(tokio::test)]
async fn test_daily_summary_and_news_share_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &["MATH1002"]);
    let now = now();
    let fake = FakeOrg {
        issues: vec![item("Open issue", "MATH1002")],
        ..FakeOrg::default()
    }
    .commit("MATH1002", "张三", now - Duration::hours(1), "更新课程资料\n\n详细说明")
    .commit("MATH1002", "github-actions[bot]", now - Duration::hours(2), "chore: sync")
    .tag("MATH1002", "高等数学A（下）");

    run_news(&fake, &config).await.unwrap();
    run_summary(&fake, None, &config, ReportType::Daily, now).await.unwrap();

    let content = std::fs::read_to_string(dir.path().join("daily.mdx")).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("AUTO 更新速递"));
    assert!(content.contains(
        "## 今日更新\n\n- 张三 在 [高等数学A（下）](https://github.com/HITSZ-OpenAuto/MATH1002) 中提交了信息：更新课程资料 (17:00)\n\n"
    ));
    assert!(!content.contains("chore: sync"));
    assert!(!content.contains("详细说明"));
    assert!(content.contains("### [Open issue]"));

    let head_end = content.find("## 待解决的 Issues").unwrap();
    assert!(content.find("## 今日更新").unwrap() < head_end);

    run_summary(&fake, None, &config, ReportType::Daily, now).await.unwrap();
    assert_eq!(std::fs::read_to_string(dir.path().join("daily.mdx")).unwrap(), content);
}

#[test_log::test(tokio::test)]
async fn test_daily_summary_without_commits() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &["MATH1002"]);

    run_summary(&FakeOrg::default(), None, &config, ReportType::Daily, now())
        .await
        .unwrap();

    let content = std::fs::read_to_string(dir.path().join("daily.mdx")).unwrap();
    assert!(content.ends_with("## 今日更新\n\n暂无更新\n\n"));
}

#[test_log::test(tokio::test)]
async fn test_weekly_report_with_summary() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &["CS1001", "MATH1002", "PHYS1001A"]);
    let now = now();
    let fake = FakeOrg::default()
        .commit("MATH1002", "张三", now - Duration::days(1), "更新第一章")
        .commit("CS1001", "李四", now - Duration::days(3), "添加实验")
        .commit("PHYS1001A", "dependabot[bot]", now - Duration::days(2), "bump")
        .commit("MATH1002", "王五", now - Duration::days(9), "too old")
        .tag("MATH1002", "高等数学A（下）")
        .tag("CS1001", "程序设计基础");
    let summarizer = Canned::new(Ok("## 本周更新摘要\n\n- 两门课程有更新"));

    run_summary(&fake, Some(&summarizer), &config, ReportType::Weekly, now)
        .await
        .unwrap();

    let report = std::fs::read_to_string(
        dir.path().join("weekly").join("weekly-2026-02-06").join("index.mdx"),
    )
    .unwrap();
    assert!(report.starts_with("---\n"));
    assert!(report.contains("AUTO 周报 2026-02-06 - 2026-02-13"));

    let summary_at = report.find("## 本周更新摘要").unwrap();
    let body_at = report.find("## 更新内容").unwrap();
    assert!(summary_at < body_at);
    assert!(report.contains("### 周四 (2.12)\n\n- 张三 在 [高等数学A（下）]"));
    assert!(report.contains("### 周二 (2.10)\n\n- 李四 在 [程序设计基础]"));
    assert!(!report.contains("bump"));
    assert!(!report.contains("too old"));

    let seen = summarizer.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("## 更新内容"));

    let index = std::fs::read_to_string(dir.path().join("weekly").join("_index.zh-cn.md")).unwrap();
    assert!(index.contains("最近更新于 2026-02-13。"));
}

#[test_log::test(tokio::test)]
async fn test_weekly_report_degrades_without_summary() {
    let now = now();
    let fake = FakeOrg::default()
        .commit("MATH1002", "张三", now - Duration::days(1), "更新第一章")
        .tag("MATH1002", "高等数学A（下）");

    for summarizer in [Canned::new(Ok(NO_SUMMARY)), Canned::new(Err("connection refused"))] {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), &["MATH1002"]);

        run_summary(&fake, Some(&summarizer), &config, ReportType::Weekly, now)
            .await
            .unwrap();

        let report = std::fs::read_to_string(
            dir.path().join("weekly").join("weekly-2026-02-06").join("index.mdx"),
        )
        .unwrap();
        assert!(!report.contains(NO_SUMMARY));
        assert!(!report.contains("## 本周更新摘要"));
        assert!(report.contains("---\n\n## 更新内容\n\n"));
    }
}

#[test_log::test(tokio::test)]
async fn test_weekly_without_manual_commits_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), &["PHYS1001A"]);
    let now = now();
    let fake = FakeOrg::default().commit("PHYS1001A", "renovate[bot]", now - Duration::days(1), "update");

    run_summary(&fake, None, &config, ReportType::Weekly, now).await.unwrap();

    assert!(!dir.path().join("weekly").exists());
}
