pub mod navigation;
pub mod pages;
pub mod path;
pub mod pattern;
pub mod readonly;
pub mod registry;
pub mod router;
pub mod types;

pub use navigation::{
    CallbackDispatcher, Dispatched, Dispatcher, HashRouter, MemoryNavigation, NavigationProvider,
    navigate_to,
};
pub use pages::{Page, PageDispatcher, PageRenderer, app_router, app_routes};
pub use path::{decode_fragment, join_path, parse_path};
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use types::{PathComponent, PathComponents, RouteKey, RouteMatch};
