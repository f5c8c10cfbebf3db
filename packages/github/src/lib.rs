#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod pages;

pub use client::{DEFAULT_BASE_URL, GitHubClient, TAG_FILE};
pub use hoa_news_github_models as models;
pub use pages::{LinkPages, PageBody, parse_next_link};
