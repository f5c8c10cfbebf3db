#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! LLM summarization for `hoa-news` weekly reports.
//!
//! This crate provides the `Summarizer` trait and an implementation backed by
//! an OpenAI-compatible `/responses` endpoint.

mod openai;
mod prompt;
mod provider;

pub use openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiSummarizer};
pub use prompt::weekly_prompt;
pub use provider::{NO_SUMMARY, Summarizer, SummarizerError, summary_section};
