mod driver;
pub mod mock_driver;
mod options;
pub mod webdriver;

pub use driver::{Driver, Element};
pub use mock_driver::{MockDriver, MockElement, MockScroll};
pub use options::{DriverOptions, DEFAULT_WEBDRIVER_URL};
pub use webdriver::WebDriver;
