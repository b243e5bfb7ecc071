use super::selectors::*;
use crate::driver::MockElement;

pub(crate) fn tweet_url(id: &str) -> String {
    format!("https://twitter.com/whataweekhuh/status/{id}")
}

/// A card with only the mandatory fields rendered.
pub(crate) fn tweet_card(id: &str) -> MockElement {
    MockElement::new()
        .with_child(
            STATUS_LINK,
            MockElement::new().with_attribute("href", tweet_url(id)),
        )
        .with_child(
            DISPLAY_NAME,
            MockElement::new().with_text("What a week, huh? all Wednesdays"),
        )
        .with_child(USERNAME, MockElement::new().with_text("@whataweekhuh"))
        .with_child(
            TIMESTAMP,
            MockElement::new().with_attribute("datetime", "2022-01-05T11:55:00.000Z"),
        )
}

pub(crate) fn promoted_card(id: &str) -> MockElement {
    tweet_card(id).with_child(PROMOTED_LABEL, MockElement::new().with_text(PROMOTED_TEXT))
}
