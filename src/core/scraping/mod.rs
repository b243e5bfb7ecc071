mod feed;

pub use feed::FeedScraper;

#[cfg(test)]
mod tests;
