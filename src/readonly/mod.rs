mod snapshot;

pub use snapshot::{Resolved, RouteEntry, RouteTable};
