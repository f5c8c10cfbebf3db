#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Fetch boundary used by the report pipeline.

mod pages;
mod provider;

pub use hoa_news_fetch_models as models;
pub use pages::{PageSource, collect_pages};
pub use provider::FetchClient;
