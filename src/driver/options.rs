use log::warn;
use std::env;

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub webdriver_url: String,
    pub headless: bool,
    pub proxy: Option<String>,
    pub show_images: bool,
    pub extra_args: Vec<String>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            headless: true,
            proxy: None,
            show_images: false,
            extra_args: Vec::new(),
        }
    }
}

impl DriverOptions {
    /// Defaults overridden by `TWEETCRATE_WEBDRIVER_URL`, `TWEETCRATE_HEADLESS`,
    /// `TWEETCRATE_PROXY` and `TWEETCRATE_SHOW_IMAGES`.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(url) = env::var("TWEETCRATE_WEBDRIVER_URL") {
            options.webdriver_url = url;
        }
        if let Some(headless) = env_flag("TWEETCRATE_HEADLESS") {
            options.headless = headless;
        }
        if let Ok(proxy) = env::var("TWEETCRATE_PROXY") {
            if !proxy.is_empty() {
                options.proxy = Some(proxy);
            }
        }
        if let Some(show_images) = env_flag("TWEETCRATE_SHOW_IMAGES") {
            options.show_images = show_images;
        }

        options
    }

    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_show_images(mut self, show_images: bool) -> Self {
        self.show_images = show_images;
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Chrome command line for these options.
    pub fn browser_args(&self) -> Vec<String> {
        let mut args = vec!["--log-level=3".to_string()];

        if self.headless {
            args.push("--headless".to_string());
            args.push("--disable-gpu".to_string());
        }

        if let Some(proxy) = &self.proxy {
            args.push(format!("--proxy-server={proxy}"));
        }

        args.extend(self.extra_args.iter().cloned());
        args
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring {}={:?}, expected a boolean", name, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let options = DriverOptions::default();
        assert_eq!(options.webdriver_url, DEFAULT_WEBDRIVER_URL);
        assert_eq!(
            options.browser_args(),
            vec!["--log-level=3", "--headless", "--disable-gpu"]
        );
    }

    #[test]
    fn test_custom_args() {
        let options = DriverOptions::default()
            .with_headless(false)
            .with_proxy("socks5://127.0.0.1:9050")
            .with_arg("--window-size=1280,2000");

        assert_eq!(
            options.browser_args(),
            vec![
                "--log-level=3",
                "--proxy-server=socks5://127.0.0.1:9050",
                "--window-size=1280,2000"
            ]
        );
    }
}
