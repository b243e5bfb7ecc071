use super::spec::{SearchSpec, DATE_FORMAT};
use crate::ScraperResult;
use url::Url;

pub const TWITTER_SEARCH_URL: &str = "https://twitter.com/search";

pub fn build_url(spec: &SearchSpec) -> ScraperResult<Url> {
    let base = Url::parse(TWITTER_SEARCH_URL)?;
    Ok(build_url_from(&base, spec))
}

/// Same as [`build_url`] against another search endpoint. Any query already on
/// `base` is replaced.
pub fn build_url_from(base: &Url, spec: &SearchSpec) -> Url {
    let query = search_query(spec);
    let mut url = base.clone();

    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .clear()
            .append_pair("q", &query)
            .append_pair("src", "typed_query")
            .append_pair("f", spec.display_type.query_value());

        if spec.proximity {
            pairs.append_pair("lf", "on");
        }
    }

    url
}

/// The `q` parameter text. Clause order is fixed; omitted clauses leave no gaps.
pub fn search_query(spec: &SearchSpec) -> String {
    let fragments = [
        spec.words.join(" "),
        any_of(&spec.words_any, ""),
        any_of(&spec.hashtags, "#"),
        present(&spec.from_account, |account| format!("(from:{account})")),
        present(&spec.to_account, |account| format!("(to:{account})")),
        any_of(&spec.mention_accounts, "@"),
        present(&spec.lang, |lang| format!("lang:{lang}")),
        spec.since
            .map(|date| format!("since:{}", date.format(DATE_FORMAT)))
            .unwrap_or_default(),
        spec.until
            .map(|date| format!("until:{}", date.format(DATE_FORMAT)))
            .unwrap_or_default(),
        threshold("min_replies", spec.min_replies),
        threshold("min_likes", spec.min_likes),
        threshold("min_retweets", spec.min_retweets),
        present(&spec.geocode, |geocode| format!("geocode:{geocode}")),
        if spec.filter_replies {
            "-filter:replies".to_string()
        } else {
            String::new()
        },
    ];

    collapse_whitespace(&fragments.join(" "))
}

fn any_of(items: &[String], prefix: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let alternatives: Vec<String> = items.iter().map(|item| format!("{prefix}{item}")).collect();
    format!("({})", alternatives.join(" OR "))
}

fn present(value: &Option<String>, render: impl Fn(&str) -> String) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => render(v),
        _ => String::new(),
    }
}

fn threshold(name: &str, value: Option<u32>) -> String {
    value
        .filter(|n| *n > 0)
        .map(|n| format!("{name}:{n}"))
        .unwrap_or_default()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
