#[cfg(feature = "browser")]
mod browser;
mod handler;
mod memory;
mod provider;

#[cfg(feature = "browser")]
pub use browser::BrowserNavigation;
pub use handler::{CallbackDispatcher, Dispatched, Dispatcher, HashRouter, not_found_message};
pub use memory::MemoryNavigation;
pub use provider::{ChangeListener, NavigationProvider, navigate_to};
