use super::{Driver, Element};
use crate::{ScraperError, ScraperResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

/// In-memory DOM node. Children are keyed by the exact selector that finds them.
#[derive(Clone, Debug, Default)]
pub struct MockElement {
    text: String,
    attributes: HashMap<String, String>,
    children: HashMap<String, Vec<MockElement>>,
}

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn with_child(mut self, selector: &str, child: MockElement) -> Self {
        self.children
            .entry(selector.to_string())
            .or_default()
            .push(child);
        self
    }

    pub fn without_children(mut self, selector: &str) -> Self {
        self.children.remove(selector);
        self
    }
}

fn boxed(element: &MockElement) -> Box<dyn Element> {
    Box::new(element.clone())
}

#[async_trait]
impl Element for MockElement {
    async fn text(&self) -> ScraperResult<String> {
        Ok(self.text.clone())
    }

    async fn attribute(&self, name: &str) -> ScraperResult<Option<String>> {
        Ok(self.attributes.get(name).cloned())
    }

    async fn find_one(&self, selector: &str) -> ScraperResult<Option<Box<dyn Element>>> {
        Ok(self
            .children
            .get(selector)
            .and_then(|children| children.first())
            .map(boxed))
    }

    async fn find_all(&self, selector: &str) -> ScraperResult<Vec<Box<dyn Element>>> {
        Ok(self
            .children
            .get(selector)
            .map(|children| children.iter().map(boxed).collect())
            .unwrap_or_default())
    }
}

/// Page state reached by one scroll: the offset reported back and what is
/// rendered at that point.
#[derive(Clone, Debug, Default)]
pub struct MockScroll {
    pub offset: i64,
    pub page: MockElement,
}

impl MockScroll {
    pub fn new(offset: i64) -> Self {
        Self {
            offset,
            page: MockElement::new(),
        }
    }

    pub fn with_elements(mut self, selector: &str, elements: Vec<MockElement>) -> Self {
        for element in elements {
            self.page = self.page.with_child(selector, element);
        }
        self
    }
}

/// Scripted [`Driver`]. Each scroll advances to the next [`MockScroll`]; once
/// the script runs out the last state repeats, which reads as end of feed.
/// Clones share state so a test can keep a handle after boxing one.
#[derive(Clone, Default)]
pub struct MockDriver {
    scrolls: Arc<Vec<MockScroll>>,
    position: Arc<AtomicUsize>,
    navigations: Arc<Mutex<Vec<Url>>>,
    fail_navigation: bool,
    closed: Arc<AtomicBool>,
}

impl MockDriver {
    pub fn new(scrolls: Vec<MockScroll>) -> Self {
        Self {
            scrolls: Arc::new(scrolls),
            ..Default::default()
        }
    }

    pub fn with_navigation_error(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    pub fn navigations(&self) -> Vec<Url> {
        self.navigations.lock().clone()
    }

    pub fn scroll_count(&self) -> usize {
        self.position.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn current(&self) -> Option<&MockScroll> {
        let reached = self.scroll_count().saturating_sub(1);
        self.scrolls
            .get(reached)
            .or_else(|| self.scrolls.last())
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn navigate(&self, url: &Url) -> ScraperResult<()> {
        if self.fail_navigation {
            return Err(ScraperError::DriverError(format!(
                "navigation to {url} failed"
            )));
        }
        self.navigations.lock().push(url.clone());
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> ScraperResult<i64> {
        self.position.fetch_add(1, Ordering::SeqCst);
        Ok(self.current().map(|scroll| scroll.offset).unwrap_or(0))
    }

    async fn find_one(&self, selector: &str) -> ScraperResult<Option<Box<dyn Element>>> {
        match self.current() {
            Some(scroll) => scroll.page.find_one(selector).await,
            None => Ok(None),
        }
    }

    async fn find_all(&self, selector: &str) -> ScraperResult<Vec<Box<dyn Element>>> {
        match self.current() {
            Some(scroll) => scroll.page.find_all(selector).await,
            None => Ok(Vec::new()),
        }
    }

    async fn quit(&self) -> ScraperResult<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
