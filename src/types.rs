use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub type RouteKey = u16;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathComponent {
    pub resource: String,
    pub key: String,
}

impl PathComponent {
    pub fn new<R: Into<String>, K: Into<String>>(resource: R, key: K) -> Self {
        Self {
            resource: resource.into(),
            key: key.into(),
        }
    }
}

pub type PathComponents = SmallVec<[PathComponent; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub key: RouteKey,
    pub pattern: String,
    pub components: PathComponents,
}
