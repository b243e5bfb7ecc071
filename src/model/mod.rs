mod tweet;

pub use tweet::{tweets_to_json, Tweet};
