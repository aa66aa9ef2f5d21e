mod error;
mod store;

pub use error::{RegistryError, RegistryResult};
pub use store::{MAX_ROUTES, RouteRegistry};
