mod errors;
mod options;
mod service;

pub use crate::readonly::RouteTable;
pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_WILDCARD, RouterConfig, RouterConfigBuilder, RouterConfigError, RouterOptions,
    RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
