mod decode;
mod error;
mod parse;

pub use decode::{decode_fragment, fragment_to_path};
pub use error::{PathError, PathResult};
pub use parse::{join_path, parse_path};
