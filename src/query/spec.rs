use crate::{ScraperError, ScraperResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result ordering offered by the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayType {
    #[default]
    Top,
    Latest,
    Image,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Top => "Top",
            DisplayType::Latest => "Latest",
            DisplayType::Image => "Image",
        }
    }

    /// Value of the `f` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            DisplayType::Top => "top",
            DisplayType::Latest => "live",
            DisplayType::Image => "image",
        }
    }
}

impl FromStr for DisplayType {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Top" => Ok(DisplayType::Top),
            "Latest" => Ok(DisplayType::Latest),
            "Image" => Ok(DisplayType::Image),
            other => Err(ScraperError::InvalidDisplayType(other.to_string())),
        }
    }
}

impl TryFrom<String> for DisplayType {
    type Error = ScraperError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayType> for String {
    fn from(value: DisplayType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that goes into one search. List fields take a single value or a list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSpec {
    #[serde(deserialize_with = "one_or_many")]
    pub words: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub words_any: Vec<String>,
    #[serde(deserialize_with = "one_or_many", alias = "hashtag")]
    pub hashtags: Vec<String>,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub to_account: Option<String>,
    pub from_account: Option<String>,
    #[serde(deserialize_with = "one_or_many", alias = "mention_account")]
    pub mention_accounts: Vec<String>,
    pub lang: Option<String>,
    pub display_type: DisplayType,
    pub filter_replies: bool,
    pub min_replies: Option<u32>,
    pub min_likes: Option<u32>,
    pub min_retweets: Option<u32>,
    pub geocode: Option<String>,
    pub limit: Option<NonZeroUsize>,
    pub proximity: bool,
}

impl SearchSpec {
    /// Loads a spec from JSON. A bad display type or date fails with the same
    /// error the matching `with_*` method gives.
    pub fn from_json(json: &str) -> ScraperResult<Self> {
        let value: Value = serde_json::from_str(json)?;

        if let Some(display_type) = value.get("display_type").and_then(Value::as_str) {
            display_type.parse::<DisplayType>()?;
        }
        for key in ["since", "until"] {
            if let Some(date) = value.get(key).and_then(Value::as_str) {
                parse_date(date)?;
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_words_any<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words_any = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = hashtags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mention_accounts<I, S>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mention_accounts = accounts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_from_account(mut self, account: impl Into<String>) -> Self {
        self.from_account = Some(account.into());
        self
    }

    pub fn with_to_account(mut self, account: impl Into<String>) -> Self {
        self.to_account = Some(account.into());
        self
    }

    /// Accepts `YYYY-MM-DD`.
    pub fn with_since(mut self, date: &str) -> ScraperResult<Self> {
        self.since = Some(parse_date(date)?);
        Ok(self)
    }

    /// Accepts `YYYY-MM-DD`.
    pub fn with_until(mut self, date: &str) -> ScraperResult<Self> {
        self.until = Some(parse_date(date)?);
        Ok(self)
    }

    pub fn with_since_date(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn with_until_date(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_display_type(mut self, display_type: &str) -> ScraperResult<Self> {
        self.display_type = display_type.parse()?;
        Ok(self)
    }

    pub fn with_display(mut self, display_type: DisplayType) -> Self {
        self.display_type = display_type;
        self
    }

    pub fn with_filter_replies(mut self, filter_replies: bool) -> Self {
        self.filter_replies = filter_replies;
        self
    }

    pub fn with_min_replies(mut self, min: u32) -> Self {
        self.min_replies = Some(min);
        self
    }

    pub fn with_min_likes(mut self, min: u32) -> Self {
        self.min_likes = Some(min);
        self
    }

    pub fn with_min_retweets(mut self, min: u32) -> Self {
        self.min_retweets = Some(min);
        self
    }

    pub fn with_geocode(mut self, geocode: impl Into<String>) -> Self {
        self.geocode = Some(geocode.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> ScraperResult<Self> {
        let limit = NonZeroUsize::new(limit)
            .ok_or_else(|| ScraperError::ConfigError("limit must be positive".to_string()))?;
        self.limit = Some(limit);
        Ok(self)
    }

    pub fn with_proximity(mut self, proximity: bool) -> Self {
        self.proximity = proximity;
        self
    }

    /// Upper bound on collected tweets, `usize::MAX` when unbounded.
    pub fn max_results(&self) -> usize {
        self.limit.map(NonZeroUsize::get).unwrap_or(usize::MAX)
    }
}

fn parse_date(value: &str) -> ScraperResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| ScraperError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_type_parsing() {
        assert_eq!("Top".parse::<DisplayType>().unwrap(), DisplayType::Top);
        assert_eq!("Latest".parse::<DisplayType>().unwrap(), DisplayType::Latest);
        assert_eq!("Image".parse::<DisplayType>().unwrap(), DisplayType::Image);

        for invalid in ["top", "Video", "", "LATEST"] {
            let err = invalid.parse::<DisplayType>().unwrap_err();
            assert!(matches!(err, ScraperError::InvalidDisplayType(ref v) if v == invalid));
        }
    }

    #[test]
    fn test_invalid_display_type_fails_construction() {
        let result = SearchSpec::default()
            .with_words(["rust"])
            .with_display_type("Newest");
        assert!(matches!(result, Err(ScraperError::InvalidDisplayType(_))));

        let result = SearchSpec::from_json(r#"{"words": "rust", "display_type": "Newest"}"#);
        assert!(matches!(result, Err(ScraperError::InvalidDisplayType(ref v)) if v == "Newest"));
    }

    #[test]
    fn test_dates_from_strings() {
        let spec = SearchSpec::default()
            .with_since("2022-01-01")
            .unwrap()
            .with_until("2022-01-07")
            .unwrap();

        assert_eq!(spec.since, NaiveDate::from_ymd_opt(2022, 1, 1));
        assert_eq!(spec.until, NaiveDate::from_ymd_opt(2022, 1, 7));

        let err = SearchSpec::default().with_since("01/07/2022").unwrap_err();
        assert!(matches!(err, ScraperError::InvalidDate { ref value, .. } if value == "01/07/2022"));
    }

    #[test]
    fn test_json_dates() {
        let spec = SearchSpec::from_json(r#"{"since": "2022-01-01", "until": null}"#).unwrap();
        assert_eq!(spec.since, NaiveDate::from_ymd_opt(2022, 1, 1));
        assert_eq!(spec.until, None);

        let err = SearchSpec::from_json(r#"{"since": "01/07/2022"}"#).unwrap_err();
        assert!(matches!(err, ScraperError::InvalidDate { ref value, .. } if value == "01/07/2022"));

        let err = SearchSpec::from_json(r#"{"until": "2022-13-01"}"#).unwrap_err();
        assert!(matches!(err, ScraperError::InvalidDate { ref value, .. } if value == "2022-13-01"));

        assert!(matches!(
            SearchSpec::from_json("{not json"),
            Err(ScraperError::JsonError(_))
        ));
    }

    #[test]
    fn test_limit_must_be_positive() {
        assert!(matches!(
            SearchSpec::default().with_limit(0),
            Err(ScraperError::ConfigError(_))
        ));

        let spec = SearchSpec::default().with_limit(25).unwrap();
        assert_eq!(spec.max_results(), 25);
        assert_eq!(SearchSpec::default().max_results(), usize::MAX);
    }

    #[test]
    fn test_json_accepts_single_value_or_list() {
        let spec = SearchSpec::from_json(
            r#"{
                "words": ["aplikasi", "tokopedia"],
                "hashtag": "ai",
                "mention_account": ["TokopediaCare", "Tokopedia"],
                "since": "2022-01-01",
                "display_type": "Latest",
                "limit": 10
            }"#,
        )
        .unwrap();

        assert_eq!(spec.words, vec!["aplikasi", "tokopedia"]);
        assert_eq!(spec.hashtags, vec!["ai"]);
        assert_eq!(spec.mention_accounts, vec!["TokopediaCare", "Tokopedia"]);
        assert_eq!(spec.since, NaiveDate::from_ymd_opt(2022, 1, 1));
        assert_eq!(spec.display_type, DisplayType::Latest);
        assert_eq!(spec.max_results(), 10);
        assert!(!spec.filter_replies);
    }

    #[test]
    fn test_json_rejects_zero_limit_and_unknown_fields() {
        assert!(SearchSpec::from_json(r#"{"limit": 0}"#).is_err());
        assert!(SearchSpec::from_json(r#"{"wordz": "typo"}"#).is_err());
    }
}
