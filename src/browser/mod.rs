//! Remote browser plumbing: capability traits, the `thirtyfour`-backed
//! implementation, the session manager and the element accessor.

pub mod accessor;
pub mod driver;
pub mod session;
pub mod webdriver;

pub use accessor::ElementAccessor;
pub use driver::{BrowserConnector, BrowserElement, Locator, RemoteBrowser};
pub use session::SessionManager;
pub use webdriver::WebDriverConnector;
