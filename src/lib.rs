pub mod core;
pub mod driver;
pub mod model;
pub mod parser;
pub mod query;
pub mod stats;
pub mod storage;

pub use self::core::{FeedScraper, ScraperConfig, ScraperError, ScraperResult};
pub use driver::{Driver, DriverOptions, Element, WebDriver};
pub use model::{tweets_to_json, Tweet};
pub use query::{build_url, DisplayType, SearchSpec};
pub use stats::StatsTracker;
pub use storage::DiskStorage;
