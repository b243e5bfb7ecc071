use crate::core::config::ScraperConfig;
use crate::driver::Driver;
use crate::model::Tweet;
use crate::parser::selectors::TWEET_CARD;
use crate::parser::{CardOutcome, TweetCardParser};
use crate::query::{build_url_from, SearchSpec, TWITTER_SEARCH_URL};
use crate::stats::StatsTracker;
use crate::ScraperResult;
use log::{debug, info};
use std::collections::HashSet;
use tokio::time::sleep;
use url::Url;

/// Owns one browser session and scrapes search feeds through it, one search
/// at a time.
pub struct FeedScraper {
    driver: Box<dyn Driver>,
    parser: TweetCardParser,
    config: ScraperConfig,
    search_url: Url,
    stats: StatsTracker,
}

impl FeedScraper {
    pub fn new(driver: Box<dyn Driver>, config: ScraperConfig) -> ScraperResult<Self> {
        info!("Initializing feed scraper");
        let search_url = match &config.search_url {
            Some(url) => url.clone(),
            None => Url::parse(TWITTER_SEARCH_URL)?,
        };

        Ok(Self {
            driver,
            parser: TweetCardParser::new()?,
            config,
            search_url,
            stats: StatsTracker::new(),
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Counters of the most recent [`FeedScraper::scrape`].
    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Scrolls the feed for `spec` until the limit is reached or the page
    /// stops growing. Tweets come back in feed order, each id at most once.
    pub async fn scrape(&mut self, spec: &SearchSpec) -> ScraperResult<Vec<Tweet>> {
        self.stats = StatsTracker::new();

        let url = build_url_from(&self.search_url, spec);
        let limit = spec.max_results();

        info!("Starting scrape: {}", url);
        debug!(
            "Limit: {:?}, settle duration: {:?}",
            spec.limit, self.config.settle_duration
        );

        self.driver.navigate(&url).await?;

        let mut tweets = Vec::new();
        let mut seen = HashSet::new();
        let mut last_offset = None;

        while tweets.len() < limit {
            let offset = self.driver.scroll_to_bottom().await?;
            self.stats.record_scroll(offset);

            if last_offset == Some(offset) {
                info!("Scroll offset unchanged at {}, end of feed", offset);
                break;
            }
            last_offset = Some(offset);
            debug!("Scrolled to offset {}", offset);

            sleep(self.config.settle_duration).await;
            self.collect_rendered(&mut tweets, &mut seen, limit).await?;
        }

        self.stats.finish();
        info!("Collected {} tweets from {}", tweets.len(), url);
        Ok(tweets)
    }

    async fn collect_rendered(
        &self,
        tweets: &mut Vec<Tweet>,
        seen: &mut HashSet<String>,
        limit: usize,
    ) -> ScraperResult<()> {
        let cards = self.driver.find_all(TWEET_CARD).await?;
        debug!("Found {} rendered cards", cards.len());
        self.stats.record_cards(cards.len());

        for card in cards {
            if tweets.len() >= limit {
                debug!("Limit of {} tweets reached", limit);
                break;
            }

            match self.parser.parse(card.as_ref()).await? {
                CardOutcome::Parsed(tweet) => {
                    if seen.insert(tweet.tweet_id.clone()) {
                        self.stats.record_tweet();
                        tweets.push(tweet);
                    } else {
                        self.stats.record_duplicate();
                    }
                }
                CardOutcome::Discarded(reason) => self.stats.record_discard(reason),
            }
        }

        Ok(())
    }

    /// Ends the browser session.
    pub async fn close(self) -> ScraperResult<()> {
        self.driver.quit().await
    }
}
