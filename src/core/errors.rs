use fantoccini::error::{CmdError, NewSessionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("WebDriver command error: {0}")]
    WebDriverError(#[from] CmdError),

    #[error("WebDriver session error: {0}")]
    SessionError(#[from] NewSessionError),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("'{0}' is not recognized as valid display type")]
    InvalidDisplayType(String),

    #[error("Invalid date '{value}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Driver error: {0}")]
    DriverError(String),
}

pub type ScraperResult<T> = Result<T, ScraperError>;
