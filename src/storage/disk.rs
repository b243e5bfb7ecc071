use crate::model::Tweet;
use crate::ScraperResult;
use chrono::Utc;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Writes scrape results as JSON array files under a base directory.
#[derive(Clone, Debug)]
pub struct DiskStorage {
    base_path: PathBuf,
}

impl DiskStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> ScraperResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn save_tweets(&self, tweets: &[Tweet], prefix: &str) -> ScraperResult<PathBuf> {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}{}_{}.json", prefix, timestamp, Uuid::now_v7());
        let path = self.base_path.join(filename);

        fs::write(&path, serde_json::to_string_pretty(tweets)?)?;
        info!("Saved {} tweets to {}", tweets.len(), path.display());
        Ok(path)
    }

    pub fn load_tweets<P: AsRef<Path>>(path: P) -> ScraperResult<Vec<Tweet>> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
