use crate::ScraperResult;
use regex::Regex;

/// Emoji are rendered as `<img>` tags pointing at `.../svg/<hex codepoint>.svg`.
#[derive(Debug, Clone)]
pub struct EmojiDecoder {
    pattern: Regex,
}

impl EmojiDecoder {
    pub fn new() -> ScraperResult<Self> {
        Ok(Self {
            pattern: Regex::new(r"svg/([a-z0-9]+)\.svg")?,
        })
    }

    /// `None` when the source does not name a single valid codepoint.
    pub fn decode(&self, src: &str) -> Option<char> {
        let hex = self.pattern.captures(src)?.get(1)?.as_str();
        let codepoint = u32::from_str_radix(hex, 16).ok()?;
        char::from_u32(codepoint)
    }
}
