mod compiled;
mod error;
mod matcher;

pub use compiled::{ComponentPattern, KeyPattern, RoutePattern};
pub use error::{PatternError, PatternResult};
pub use matcher::{component_matches, is_path_match};
