use anyhow::Context;
use log::warn;
use std::env;
use std::fs;
use tweetcrate::{
    tweets_to_json, DiskStorage, DriverOptions, FeedScraper, ScraperConfig, SearchSpec, WebDriver,
};

/// Usage: `tweetcrate [search.json]`
///
/// Needs a WebDriver endpoint (chromedriver) listening on
/// `TWEETCRATE_WEBDRIVER_URL`, default `http://localhost:9515`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("tweetcrate", log::LevelFilter::Info)
        .filter_module("hyper", log::LevelFilter::Error)
        .filter_module("fantoccini", log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let spec = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("reading search spec {path}"))?;
            SearchSpec::from_json(&json).with_context(|| format!("parsing search spec {path}"))?
        }
        None => SearchSpec::default()
            .with_from_account("whataweekhuh")
            .with_since("2022-01-01")?
            .with_until("2022-01-07")?,
    };
    let output_dir = env::var("TWEETCRATE_OUTPUT").unwrap_or_else(|_| "data".to_string());

    let driver = WebDriver::connect(&DriverOptions::from_env()).await?;
    let mut scraper = FeedScraper::new(Box::new(driver), ScraperConfig::default())?;

    let result = scraper.scrape(&spec).await;
    scraper.stats().log_summary();
    let closed = scraper.close().await;
    let tweets = result?;
    closed?;

    if tweets.is_empty() {
        warn!("No tweets found; the page markup may have changed");
    }

    let storage = DiskStorage::new(&output_dir)?;
    storage.save_tweets(&tweets, "search_")?;

    println!("{}", tweets_to_json(&tweets)?);
    Ok(())
}
