use crate::path::parse_path;
use crate::pattern::{RoutePattern, is_path_match};
use crate::router::RouterOptions;
use crate::types::{PathComponents, RouteKey, RouteMatch};

#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub key: RouteKey,
    pub pattern: RoutePattern,
    pub handler: H,
}

/// A route resolved against a path, borrowing its handler from the table.
#[derive(Debug)]
pub struct Resolved<'a, H> {
    pub key: RouteKey,
    pub pattern: &'a str,
    pub handler: &'a H,
    pub components: PathComponents,
}

impl<H> Resolved<'_, H> {
    pub fn to_match(&self) -> RouteMatch {
        RouteMatch {
            key: self.key,
            pattern: self.pattern.to_string(),
            components: self.components.clone(),
        }
    }
}

/// Sealed, read-only route table. Lookups walk the entries in declaration
/// order and stop at the first match.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
    options: RouterOptions,
}

impl<H> RouteTable<H> {
    pub(crate) fn new(entries: Vec<RouteEntry<H>>, options: RouterOptions) -> Self {
        Self { entries, options }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    #[tracing::instrument(level = "trace", skip(self), fields(path_len = path.len() as u64))]
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_, H>> {
        let components = parse_path(path);
        let entry = self.entries.iter().find(|entry| {
            is_path_match(&entry.pattern, &components, self.options.case_sensitive)
        })?;

        Some(Resolved {
            key: entry.key,
            pattern: entry.pattern.raw(),
            handler: &entry.handler,
            components,
        })
    }
}
