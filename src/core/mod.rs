pub mod config;
mod errors;
pub mod scraping;

pub use config::{ScraperConfig, DEFAULT_SETTLE_DURATION};
pub use errors::{ScraperError, ScraperResult};
pub use scraping::FeedScraper;
