//! Summarizer trait definition.

use async_trait::async_trait;

/// Answer the model gives when a summary would add nothing.
pub const NO_SUMMARY: &str = "__NO_SUMMARY__";

/// Errors that can occur when summarizing a report.
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("LLM API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Condenses a rendered report into a short prose summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Get the provider name.
    fn provider_name(&self) -> &'static str;

    /// Summarize a Markdown report body.
    ///
    /// Returns the model output verbatim, which may be [`NO_SUMMARY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint can't be reached or rejects the
    /// request.
    async fn summarize(&self, markdown: &str) -> Result<String, SummarizerError>;
}

/// Summary text to place above a report body, if any.
///
/// Failures are logged and treated like an absent summary, so the report is
/// still written with its full body.
pub async fn summary_section(summarizer: &dyn Summarizer, markdown: &str) -> Option<String> {
    match summarizer.summarize(markdown).await {
        Ok(text) if text == NO_SUMMARY => {
            log::info!("{} asked to skip the summary", summarizer.provider_name());
            None
        }
        Ok(text) if text.trim().is_empty() => {
            log::warn!("{} returned an empty summary", summarizer.provider_name());
            None
        }
        Ok(text) => Some(text),
        Err(e) => {
            log::error!("Summary generation failed: {e}, using full report instead.");
            None
        }
    }
}
