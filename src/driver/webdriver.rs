use super::{Driver, DriverOptions, Element};
use crate::{ScraperError, ScraperResult};
use async_trait::async_trait;
use fantoccini::elements::Element as RemoteElement;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use log::{debug, info, trace};
use serde_json::{json, Map, Value};
use url::Url;

const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight);";
const OFFSET_SCRIPT: &str = "return window.pageYOffset;";

/// [`Driver`] backed by a Chrome session on a running WebDriver endpoint
/// (chromedriver or compatible).
#[derive(Clone)]
pub struct WebDriver {
    client: Client,
}

impl WebDriver {
    pub async fn connect(options: &DriverOptions) -> ScraperResult<Self> {
        info!("Connecting to WebDriver at {}", options.webdriver_url);
        debug!("Browser arguments: {:?}", options.browser_args());

        let client = ClientBuilder::native()
            .capabilities(chrome_capabilities(options))
            .connect(&options.webdriver_url)
            .await?;

        Ok(Self { client })
    }
}

pub fn chrome_capabilities(options: &DriverOptions) -> Map<String, Value> {
    let mut chrome_opts = Map::new();
    chrome_opts.insert("args".to_string(), json!(options.browser_args()));

    if !options.show_images {
        chrome_opts.insert(
            "prefs".to_string(),
            json!({ "profile.managed_default_content_settings.images": 2 }),
        );
    }

    let mut caps = Map::new();
    caps.insert("goog:chromeOptions".to_string(), Value::Object(chrome_opts));
    caps
}

fn wrap(element: RemoteElement) -> Box<dyn Element> {
    Box::new(WebElement { element })
}

fn optional(result: Result<RemoteElement, CmdError>) -> ScraperResult<Option<Box<dyn Element>>> {
    match result {
        Ok(element) => Ok(Some(wrap(element))),
        Err(e) if e.is_no_such_element() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl Driver for WebDriver {
    async fn navigate(&self, url: &Url) -> ScraperResult<()> {
        info!("Navigating to {}", url);
        self.client.goto(url.as_str()).await?;
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> ScraperResult<i64> {
        self.client.execute(SCROLL_SCRIPT, vec![]).await?;
        let offset = self.client.execute(OFFSET_SCRIPT, vec![]).await?;
        trace!("pageYOffset after scroll: {}", offset);

        offset
            .as_f64()
            .map(|y| y.round() as i64)
            .ok_or_else(|| ScraperError::DriverError(format!("unexpected scroll offset: {offset}")))
    }

    async fn find_one(&self, selector: &str) -> ScraperResult<Option<Box<dyn Element>>> {
        optional(self.client.find(Locator::XPath(selector)).await)
    }

    async fn find_all(&self, selector: &str) -> ScraperResult<Vec<Box<dyn Element>>> {
        let elements = self.client.find_all(Locator::XPath(selector)).await?;
        Ok(elements.into_iter().map(wrap).collect())
    }

    async fn quit(&self) -> ScraperResult<()> {
        info!("Closing browser session");
        self.client.clone().close().await?;
        Ok(())
    }
}

struct WebElement {
    element: RemoteElement,
}

#[async_trait]
impl Element for WebElement {
    async fn text(&self) -> ScraperResult<String> {
        Ok(self.element.text().await?)
    }

    // Properties first so `href` and `src` come back absolute, attributes for
    // everything without a matching DOM property (`datetime`).
    async fn attribute(&self, name: &str) -> ScraperResult<Option<String>> {
        if let Some(value) = self.element.prop(name).await? {
            return Ok(Some(value));
        }
        Ok(self.element.attr(name).await?)
    }

    async fn find_one(&self, selector: &str) -> ScraperResult<Option<Box<dyn Element>>> {
        optional(self.element.find(Locator::XPath(selector)).await)
    }

    async fn find_all(&self, selector: &str) -> ScraperResult<Vec<Box<dyn Element>>> {
        let elements = self.element.find_all(Locator::XPath(selector)).await?;
        Ok(elements.into_iter().map(wrap).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fantoccini::error::{ErrorStatus, WebDriver as WebDriverError};

    #[test]
    fn test_capabilities_block_images_by_default() {
        let caps = chrome_capabilities(&DriverOptions::default());
        assert_eq!(
            caps["goog:chromeOptions"],
            json!({
                "args": ["--log-level=3", "--headless", "--disable-gpu"],
                "prefs": { "profile.managed_default_content_settings.images": 2 }
            })
        );
    }

    #[test]
    fn test_missing_element_is_none() {
        let missing = CmdError::Standard(WebDriverError::new(
            ErrorStatus::NoSuchElement,
            "no such element: Unable to locate element",
        ));
        assert!(matches!(optional(Err(missing)), Ok(None)));
    }

    #[test]
    fn test_other_lookup_errors_propagate() {
        let stale = CmdError::Standard(WebDriverError::new(
            ErrorStatus::StaleElementReference,
            "stale element reference: element is not attached to the page document",
        ));
        assert!(matches!(
            optional(Err(stale)),
            Err(ScraperError::WebDriverError(_))
        ));
    }

    #[test]
    fn test_capabilities_with_images() {
        let caps = chrome_capabilities(&DriverOptions::default().with_show_images(true));
        assert!(caps["goog:chromeOptions"].get("prefs").is_none());
    }
}
