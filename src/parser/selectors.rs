//! XPath expressions pinned to the search page markup. They break whenever
//! the site changes its layout; extraction then degrades to field defaults.

pub const TWEET_CARD: &str = r#"//article[@data-testid="tweet"]"#;

pub const STATUS_LINK: &str = r#".//a[contains(@href, "/status/")]"#;
pub const PROMOTED_LABEL: &str = ".//div[2]/div[2]/*[last()]//span";
pub const DISPLAY_NAME: &str = ".//span";
pub const USERNAME: &str = r#".//span[contains(text(), "@")]"#;
pub const TIMESTAMP: &str = ".//time";

pub const TEXT: &str = ".//div[2]/div[2]/div[2]/div[1]";
pub const EMBEDDED: &str = ".//div[2]/div[2]/div[2]";
pub const REPLY_COUNT: &str = r#".//div[@data-testid="reply"]"#;
pub const RETWEET_COUNT: &str = r#".//div[@data-testid="retweet"]"#;
pub const LIKE_COUNT: &str = r#".//div[@data-testid="like"]"#;
pub const EMOJI_IMAGE: &str = r#".//img[contains(@src, "emoji")]"#;
pub const MEDIA_IMAGE: &str = r#".//div[2]/div[2]//img[contains(@src, "https://pbs.twimg.com/")]"#;

pub const PROMOTED_TEXT: &str = "Promoted";
