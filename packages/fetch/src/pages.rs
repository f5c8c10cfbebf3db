//! Lazy page sequences.

use anyhow::Result;

/// A finite sequence of result pages, fetched one at a time.
///
/// Once `next_page` yields `None` the source is exhausted and keeps yielding
/// `None`. Sources are consumed as they go and cannot be restarted.
#[async_trait::async_trait]
pub trait PageSource: Send {
    type Item: Send;

    async fn next_page(&mut self) -> Result<Option<Vec<Self::Item>>>;
}

/// Drain a page source into a single list, in page order.
///
/// # Errors
///
/// * If fetching any page fails; pages fetched before the failure are dropped
pub async fn collect_pages<P: PageSource>(mut pages: P) -> Result<Vec<P::Item>> {
    let mut items = Vec::new();
    while let Some(page) = pages.next_page().await? {
        items.extend(page);
    }
    Ok(items)
}
