mod card;
mod emoji;
pub mod selectors;

pub use card::{tweet_id_from_url, CardOutcome, DiscardReason, TweetCardParser};
pub use emoji::EmojiDecoder;

#[cfg(test)]
pub(crate) mod fixtures;
