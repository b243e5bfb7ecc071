use super::emoji::EmojiDecoder;
use super::selectors::*;
use crate::driver::Element;
use crate::model::Tweet;
use crate::ScraperResult;
use log::{debug, trace};
use std::fmt;
use url::Url;

const DEFAULT_COUNT: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardReason {
    MissingLink,
    Promoted,
    MissingDisplayName,
    MissingUsername,
    MissingTimestamp,
}

impl DiscardReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscardReason::MissingLink => "missing_link",
            DiscardReason::Promoted => "promoted",
            DiscardReason::MissingDisplayName => "missing_display_name",
            DiscardReason::MissingUsername => "missing_username",
            DiscardReason::MissingTimestamp => "missing_timestamp",
        }
    }
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum CardOutcome {
    Parsed(Tweet),
    Discarded(DiscardReason),
}

/// Turns one rendered `article` into a [`Tweet`].
///
/// Optional fields that cannot be found fall back to defaults. A card without a
/// status link, display name, username or timestamp is discarded, and so is a
/// promoted one. Errors are only returned for driver failures.
#[derive(Debug, Clone)]
pub struct TweetCardParser {
    emoji: EmojiDecoder,
}

impl TweetCardParser {
    pub fn new() -> ScraperResult<Self> {
        Ok(Self {
            emoji: EmojiDecoder::new()?,
        })
    }

    pub async fn parse(&self, card: &dyn Element) -> ScraperResult<CardOutcome> {
        let outcome = self.parse_card(card).await?;
        if let CardOutcome::Discarded(reason) = &outcome {
            debug!("Discarding card: {}", reason);
        }
        Ok(outcome)
    }

    async fn parse_card(&self, card: &dyn Element) -> ScraperResult<CardOutcome> {
        let link = non_empty(attribute_of(card, STATUS_LINK, "href").await?);
        let Some((tweet_url, tweet_id)) = link.and_then(|url| {
            let id = tweet_id_from_url(&url)?;
            Some((url, id))
        }) else {
            return Ok(CardOutcome::Discarded(DiscardReason::MissingLink));
        };

        if text_of(card, PROMOTED_LABEL).await?.as_deref() == Some(PROMOTED_TEXT) {
            return Ok(CardOutcome::Discarded(DiscardReason::Promoted));
        }

        let display_name = non_empty(text_of(card, DISPLAY_NAME).await?);
        let username = non_empty(text_of(card, USERNAME).await?);
        let created_date = non_empty(attribute_of(card, TIMESTAMP, "datetime").await?);

        let (display_name, username, created_date) = match (display_name, username, created_date) {
            (Some(name), Some(user), Some(date)) => (name, user, date),
            (None, _, _) => return Ok(CardOutcome::Discarded(DiscardReason::MissingDisplayName)),
            (_, None, _) => return Ok(CardOutcome::Discarded(DiscardReason::MissingUsername)),
            (_, _, None) => return Ok(CardOutcome::Discarded(DiscardReason::MissingTimestamp)),
        };

        let text = text_of(card, TEXT).await?.unwrap_or_default();
        let embedded = text_of(card, EMBEDDED).await?.unwrap_or_default();
        let reply_count = count_of(card, REPLY_COUNT).await?;
        let retweet_count = count_of(card, RETWEET_COUNT).await?;
        let like_count = count_of(card, LIKE_COUNT).await?;
        let emojis = self.emojis(card).await?;
        let image_links = attributes_of(card, MEDIA_IMAGE, "src").await?;

        trace!("Parsed tweet {} by {}", tweet_id, username);

        Ok(CardOutcome::Parsed(Tweet::new(
            tweet_id,
            tweet_url,
            display_name,
            username,
            created_date,
            text,
            embedded,
            reply_count,
            retweet_count,
            like_count,
            emojis,
            image_links,
        )))
    }

    async fn emojis(&self, card: &dyn Element) -> ScraperResult<Vec<String>> {
        let sources = attributes_of(card, EMOJI_IMAGE, "src").await?;
        Ok(sources
            .iter()
            .filter_map(|src| self.emoji.decode(src))
            .map(String::from)
            .collect())
    }
}

/// Last path segment of a status link, ignoring query and fragment.
pub fn tweet_id_from_url(tweet_url: &str) -> Option<String> {
    let path = match Url::parse(tweet_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => tweet_url
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    path.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn text_of(card: &dyn Element, selector: &str) -> ScraperResult<Option<String>> {
    match card.find_one(selector).await? {
        Some(element) => Ok(Some(element.text().await?)),
        None => Ok(None),
    }
}

async fn attribute_of(card: &dyn Element, selector: &str, name: &str) -> ScraperResult<Option<String>> {
    match card.find_one(selector).await? {
        Some(element) => element.attribute(name).await,
        None => Ok(None),
    }
}

async fn attributes_of(card: &dyn Element, selector: &str, name: &str) -> ScraperResult<Vec<String>> {
    let mut values = Vec::new();
    for element in card.find_all(selector).await? {
        if let Some(value) = element.attribute(name).await? {
            values.push(value);
        }
    }
    Ok(values)
}

async fn count_of(card: &dyn Element, selector: &str) -> ScraperResult<String> {
    Ok(text_of(card, selector)
        .await?
        .unwrap_or_else(|| DEFAULT_COUNT.to_string()))
}
