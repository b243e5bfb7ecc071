use crate::parser::DiscardReason;
use chrono::{DateTime, Utc};
use log::info;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ScrapingStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub scrolls: usize,
    pub last_offset: Option<i64>,
    pub cards_seen: usize,
    pub tweets_collected: usize,
    pub duplicates: usize,
    pub discarded: HashMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<ScrapingStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(ScrapingStats {
                start_time: Utc::now(),
                end_time: None,
                scrolls: 0,
                last_offset: None,
                cards_seen: 0,
                tweets_collected: 0,
                duplicates: 0,
                discarded: HashMap::new(),
            })),
        }
    }

    pub fn record_scroll(&self, offset: i64) {
        let mut stats = self.stats.write();
        stats.scrolls += 1;
        stats.last_offset = Some(offset);
    }

    pub fn record_cards(&self, count: usize) {
        self.stats.write().cards_seen += count;
    }

    pub fn record_tweet(&self) {
        self.stats.write().tweets_collected += 1;
    }

    pub fn record_duplicate(&self) {
        self.stats.write().duplicates += 1;
    }

    pub fn record_discard(&self, reason: DiscardReason) {
        *self
            .stats
            .write()
            .discarded
            .entry(reason.as_str().to_string())
            .or_insert(0) += 1;
    }

    pub fn finish(&self) {
        self.stats.write().end_time = Some(Utc::now());
    }

    pub fn get_stats(&self) -> ScrapingStats {
        self.stats.read().clone()
    }

    pub fn log_summary(&self) {
        let stats = self.stats.read();
        let duration = stats
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(stats.start_time);

        info!(
            "Scrape finished in {}s: {} scrolls, {} cards seen, {} tweets collected, {} duplicates",
            duration.num_seconds(),
            stats.scrolls,
            stats.cards_seen,
            stats.tweets_collected,
            stats.duplicates
        );

        for (reason, count) in &stats.discarded {
            info!("  discarded ({}): {}", reason, count);
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
