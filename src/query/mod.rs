mod builder;
mod spec;

pub use builder::{build_url, build_url_from, search_query, TWITTER_SEARCH_URL};
pub use spec::{DisplayType, SearchSpec};
