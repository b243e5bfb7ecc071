use crate::ScraperResult;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Fixed pause after every scroll that moved the page, before cards are
    /// read. There is no readiness check; a slow page loses tweets.
    pub settle_duration: Duration,
    /// Search endpoint; `None` means [`crate::query::TWITTER_SEARCH_URL`].
    pub search_url: Option<Url>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            settle_duration: DEFAULT_SETTLE_DURATION,
            search_url: None,
        }
    }
}

impl ScraperConfig {
    pub fn with_settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration = duration;
        self
    }

    pub fn with_search_url(mut self, url: &str) -> ScraperResult<Self> {
        self.search_url = Some(Url::parse(url)?);
        Ok(self)
    }
}
