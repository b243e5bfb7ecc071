use crate::core::config::{ScraperConfig, DEFAULT_SETTLE_DURATION};
use crate::core::scraping::FeedScraper;
use crate::driver::{MockDriver, MockElement, MockScroll};
use crate::parser::fixtures::{promoted_card, tweet_card};
use crate::parser::selectors::{STATUS_LINK, TWEET_CARD};
use crate::query::{build_url, SearchSpec};
use crate::ScraperError;
use std::collections::HashSet;
use std::time::Duration;

fn scroll(offset: i64, ids: &[&str]) -> MockScroll {
    MockScroll::new(offset).with_elements(TWEET_CARD, ids.iter().map(|id| tweet_card(id)).collect())
}

fn scraper_for(driver: &MockDriver) -> FeedScraper {
    let config = ScraperConfig::default().with_settle_duration(Duration::ZERO);
    FeedScraper::new(Box::new(driver.clone()), config).unwrap()
}

fn ids(tweets: &[crate::Tweet]) -> Vec<&str> {
    tweets.iter().map(|t| t.tweet_id.as_str()).collect()
}

#[tokio::test]
async fn test_collects_across_scrolls_without_duplicates() {
    let driver = MockDriver::new(vec![
        scroll(1000, &["1", "2"]),
        scroll(2000, &["2", "3"]),
        scroll(3000, &["3", "4", "1"]),
    ]);
    let mut scraper = scraper_for(&driver);

    let spec = SearchSpec::default().with_from_account("whataweekhuh");
    let tweets = scraper.scrape(&spec).await.unwrap();

    assert_eq!(ids(&tweets), vec!["1", "2", "3", "4"]);
    assert_eq!(driver.navigations(), vec![build_url(&spec).unwrap()]);
    // three moving scrolls plus the one that detects the end
    assert_eq!(driver.scroll_count(), 4);

    let stats = scraper.stats().get_stats();
    assert_eq!(stats.scrolls, 4);
    assert_eq!(stats.cards_seen, 7);
    assert_eq!(stats.tweets_collected, 4);
    assert_eq!(stats.duplicates, 3);
    assert!(stats.end_time.is_some());
}

#[tokio::test]
async fn test_limit_is_never_exceeded() {
    let driver = MockDriver::new(vec![scroll(1000, &["1", "2", "3"]), scroll(2000, &["4"])]);
    let mut scraper = scraper_for(&driver);

    let spec = SearchSpec::default().with_limit(2).unwrap();
    let tweets = scraper.scrape(&spec).await.unwrap();

    assert_eq!(ids(&tweets), vec!["1", "2"]);
    assert_eq!(driver.scroll_count(), 1);
}

#[tokio::test]
async fn test_limit_reached_on_later_scroll() {
    let driver = MockDriver::new(vec![
        scroll(1000, &["1", "2"]),
        scroll(2000, &["2", "3", "4"]),
        scroll(3000, &["5"]),
    ]);
    let mut scraper = scraper_for(&driver);

    let spec = SearchSpec::default().with_limit(3).unwrap();
    let tweets = scraper.scrape(&spec).await.unwrap();

    assert_eq!(ids(&tweets), vec!["1", "2", "3"]);
    assert_eq!(driver.scroll_count(), 2);
}

#[tokio::test]
async fn test_unchanged_offset_ends_feed() {
    let driver = MockDriver::new(vec![scroll(0, &[])]);
    let mut scraper = scraper_for(&driver);

    let tweets = scraper.scrape(&SearchSpec::default()).await.unwrap();

    assert!(tweets.is_empty());
    assert_eq!(driver.scroll_count(), 2);
}

#[tokio::test]
async fn test_missing_link_and_promoted_cards_are_dropped() {
    let without_link = tweet_card("10").without_children(STATUS_LINK);
    let driver = MockDriver::new(vec![MockScroll::new(1000).with_elements(
        TWEET_CARD,
        vec![without_link, promoted_card("11"), tweet_card("12")],
    )]);
    let mut scraper = scraper_for(&driver);

    let tweets = scraper.scrape(&SearchSpec::default()).await.unwrap();

    assert_eq!(ids(&tweets), vec!["12"]);
    let stats = scraper.stats().get_stats();
    assert_eq!(stats.discarded.get("missing_link"), Some(&1));
    assert_eq!(stats.discarded.get("promoted"), Some(&1));
}

#[tokio::test]
async fn test_results_are_unique_and_bounded() {
    let script: Vec<MockScroll> = (0..6)
        .map(|step| {
            let window: Vec<String> = (step * 3..step * 3 + 6).map(|n| n.to_string()).collect();
            let cards = window.iter().map(|id| tweet_card(id)).collect();
            MockScroll::new((step as i64 + 1) * 900).with_elements(TWEET_CARD, cards)
        })
        .collect();

    for limit in [1, 4, 10, 50] {
        let driver = MockDriver::new(script.clone());
        let mut scraper = scraper_for(&driver);
        let spec = SearchSpec::default().with_limit(limit).unwrap();

        let tweets = scraper.scrape(&spec).await.unwrap();

        assert!(tweets.len() <= limit);
        let unique: HashSet<_> = tweets.iter().map(|t| t.tweet_id.clone()).collect();
        assert_eq!(unique.len(), tweets.len());
    }
}

#[tokio::test]
async fn test_navigation_error_is_fatal() {
    let driver = MockDriver::new(vec![scroll(1000, &["1"])]).with_navigation_error();
    let mut scraper = scraper_for(&driver);

    let result = scraper.scrape(&SearchSpec::default()).await;

    assert!(matches!(result, Err(ScraperError::DriverError(_))));
    assert_eq!(driver.scroll_count(), 0);
}

#[tokio::test]
async fn test_custom_search_url() {
    let driver = MockDriver::new(vec![scroll(0, &[])]);
    let config = ScraperConfig::default()
        .with_settle_duration(Duration::ZERO)
        .with_search_url("https://x.com/search?stale=1")
        .unwrap();
    let mut scraper = FeedScraper::new(Box::new(driver.clone()), config).unwrap();

    scraper
        .scrape(&SearchSpec::default().with_words(["rust"]))
        .await
        .unwrap();

    assert_eq!(
        driver.navigations()[0].as_str(),
        "https://x.com/search?q=rust&src=typed_query&f=top"
    );
}

#[tokio::test]
async fn test_default_search_url() {
    let driver = MockDriver::new(vec![scroll(0, &[])]);
    let mut scraper = scraper_for(&driver);

    let spec = SearchSpec::default().with_words(["rust"]);
    scraper.scrape(&spec).await.unwrap();

    assert_eq!(driver.navigations(), vec![build_url(&spec).unwrap()]);
}

#[tokio::test(start_paused = true)]
async fn test_settles_after_each_moving_scroll() {
    let driver = MockDriver::new(vec![scroll(1000, &["1"]), scroll(2000, &["2"])]);
    let mut scraper = FeedScraper::new(Box::new(driver.clone()), ScraperConfig::default()).unwrap();
    assert_eq!(scraper.config().settle_duration, DEFAULT_SETTLE_DURATION);

    let start = tokio::time::Instant::now();
    let tweets = scraper.scrape(&SearchSpec::default()).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(tweets.len(), 2);
    assert!(elapsed >= DEFAULT_SETTLE_DURATION * 2);
    assert!(elapsed < DEFAULT_SETTLE_DURATION * 3);
}

#[tokio::test]
async fn test_scrape_resets_stats_and_close_quits() {
    let driver = MockDriver::new(vec![scroll(1000, &["1"])]);
    let mut scraper = scraper_for(&driver);

    scraper.scrape(&SearchSpec::default()).await.unwrap();
    assert_eq!(scraper.stats().get_stats().scrolls, 2);

    let tweets = scraper.scrape(&SearchSpec::default()).await.unwrap();
    assert_eq!(tweets.len(), 1);
    let stats = scraper.stats().get_stats();
    assert_eq!(stats.scrolls, 2);
    assert_eq!(stats.tweets_collected, 1);

    scraper.close().await.unwrap();
    assert!(driver.is_closed());
}

#[tokio::test]
async fn test_empty_card_list_on_moving_scroll() {
    let driver = MockDriver::new(vec![
        scroll(1000, &[]),
        MockScroll::new(2000).with_elements(TWEET_CARD, vec![MockElement::new()]),
    ]);
    let mut scraper = scraper_for(&driver);

    let tweets = scraper.scrape(&SearchSpec::default()).await.unwrap();

    assert!(tweets.is_empty());
    assert_eq!(scraper.stats().get_stats().cards_seen, 1);
}
