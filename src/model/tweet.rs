use crate::ScraperResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One post as rendered in the search feed. Counts are kept exactly as displayed
/// (`"15.1K"`), they are not normalized to numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub tweet_id: String,
    pub tweet_url: String,
    pub display_name: String,
    pub username: String,
    pub created_date: String,
    pub text: String,
    pub embedded: String,
    pub reply_count: String,
    pub retweet_count: String,
    pub like_count: String,
    pub emojis: Vec<String>,
    pub image_links: Vec<String>,
}

impl Tweet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tweet_id: impl Into<String>,
        tweet_url: impl Into<String>,
        display_name: impl Into<String>,
        username: impl Into<String>,
        created_date: impl Into<String>,
        text: impl Into<String>,
        embedded: impl Into<String>,
        reply_count: impl Into<String>,
        retweet_count: impl Into<String>,
        like_count: impl Into<String>,
        emojis: Vec<String>,
        image_links: Vec<String>,
    ) -> Self {
        Self {
            tweet_id: tweet_id.into(),
            tweet_url: tweet_url.into(),
            display_name: display_name.into(),
            username: username.into(),
            created_date: created_date.into(),
            text: text.into(),
            embedded: embedded.into(),
            reply_count: reply_count.into(),
            retweet_count: retweet_count.into(),
            like_count: like_count.into(),
            emojis,
            image_links,
        }
    }

    pub fn to_json(&self) -> ScraperResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> ScraperResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PartialEq for Tweet {
    fn eq(&self, other: &Self) -> bool {
        self.tweet_id == other.tweet_id
    }
}

impl Eq for Tweet {}

impl Hash for Tweet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tweet_id.hash(state);
    }
}

impl fmt::Display for Tweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// A scrape result as a JSON array.
pub fn tweets_to_json(tweets: &[Tweet]) -> ScraperResult<String> {
    Ok(serde_json::to_string(tweets)?)
}
