use crate::ScraperResult;
use async_trait::async_trait;
use url::Url;

/// A rendered DOM node. Selectors are XPath expressions evaluated relative to
/// the node.
#[async_trait]
pub trait Element: Send + Sync {
    async fn text(&self) -> ScraperResult<String>;

    async fn attribute(&self, name: &str) -> ScraperResult<Option<String>>;

    /// `Ok(None)` when nothing matches.
    async fn find_one(&self, selector: &str) -> ScraperResult<Option<Box<dyn Element>>>;

    async fn find_all(&self, selector: &str) -> ScraperResult<Vec<Box<dyn Element>>>;
}

/// One browser session.
#[async_trait]
pub trait Driver: Send + Sync {
    async fn navigate(&self, url: &Url) -> ScraperResult<()>;

    /// Scrolls to the bottom of the page and returns the vertical offset
    /// reached.
    async fn scroll_to_bottom(&self) -> ScraperResult<i64>;

    /// `Ok(None)` when nothing matches.
    async fn find_one(&self, selector: &str) -> ScraperResult<Option<Box<dyn Element>>>;

    async fn find_all(&self, selector: &str) -> ScraperResult<Vec<Box<dyn Element>>>;

    async fn quit(&self) -> ScraperResult<()>;
}
