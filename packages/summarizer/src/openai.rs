//! OpenAI-compatible `/responses` summarizer.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::prompt::weekly_prompt;
use crate::provider::{Summarizer, SummarizerError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-5-mini";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output_text: String,
}

pub struct OpenAiSummarizer {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiSummarizer {
    /// # Errors
    ///
    /// * If `api_key` is empty
    /// * If the `reqwest::Client` fails to build
    pub fn new(api_key: String) -> Result<Self, SummarizerError> {
        if api_key.trim().is_empty() {
            return Err(SummarizerError::Config("API key is empty".to_string()));
        }
        let http_client = reqwest::Client::builder()
            .user_agent("hoa-news")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http_client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    async fn summarize(&self, markdown: &str) -> Result<String, SummarizerError> {
        let url = format!("{}/responses", self.base_url);
        let prompt = weekly_prompt(markdown);
        log::debug!("POST {url} (model {})", self.model);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ResponsesRequest {
                model: &self.model,
                input: &prompt,
            })
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(SummarizerError::Api { status, body });
        }

        let out: ResponsesResponse = response.json().await?;
        Ok(out.output_text)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn summarizer(mock_server: &MockServer) -> OpenAiSummarizer {
        OpenAiSummarizer::new("sk-test".to_string())
            .unwrap()
            .with_base_url(format!("{}/v1/", mock_server.uri()))
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({ "model": "gpt-5-mini" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "resp_1",
                "output_text": "## 本周更新摘要\n\n- 程序设计基础：新增课件"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = summarizer(&mock_server)
            .summarize("## 更新内容\n\n- 李四 在 [程序设计基础](https://github.com/org/CS1001) 中提交了信息：添加课件")
            .await
            .unwrap();

        assert_eq!(text, "## 本周更新摘要\n\n- 程序设计基础：新增课件");
    }

    #[tokio::test]
    async fn test_summarize_returns_sentinel_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "output_text": crate::NO_SUMMARY })),
            )
            .mount(&mock_server)
            .await;

        let text = summarizer(&mock_server).summarize("body").await.unwrap();

        assert_eq!(text, crate::NO_SUMMARY);
    }

    #[tokio::test]
    async fn test_summarize_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/responses"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&mock_server)
            .await;

        let err = summarizer(&mock_server).summarize("body").await.unwrap_err();

        match err {
            SummarizerError::Api { status, body } => {
                assert_eq!(status.as_u16(), 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            OpenAiSummarizer::new("  ".to_string()),
            Err(SummarizerError::Config(_))
        ));
    }

    #[test]
    fn test_with_model() {
        let summarizer = OpenAiSummarizer::new("sk-test".to_string())
            .unwrap()
            .with_model("gpt-4.1-mini".to_string());

        assert_eq!(summarizer.model(), "gpt-4.1-mini");
    }
}
