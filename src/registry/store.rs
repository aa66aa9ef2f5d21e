use crate::pattern::RoutePattern;
use crate::readonly::{RouteEntry, RouteTable};
use crate::registry::{RegistryError, RegistryResult};
use crate::router::RouterOptions;
use crate::types::RouteKey;
use hashbrown::HashMap;

pub const MAX_ROUTES: RouteKey = RouteKey::MAX;

/// Ordered registration table. Keys follow declaration order.
#[derive(Debug)]
pub struct RouteRegistry<H> {
    options: RouterOptions,
    entries: Vec<RouteEntry<H>>,
    by_pattern: HashMap<Box<str>, RouteKey>,
}

impl<H> RouteRegistry<H> {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
            by_pattern: HashMap::new(),
        }
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

    #[tracing::instrument(level = "trace", skip(self, handler), fields(pattern = %pattern))]
    pub fn insert(&mut self, pattern: &str, handler: H) -> RegistryResult<RouteKey> {
        let key = self.next_key(pattern, 0)?;
        self.check_duplicate(pattern)?;
        let compiled = RoutePattern::compile(pattern, &self.options)?;
        self.push(key, compiled, handler);
        Ok(key)
    }

    /// Inserts every entry or none of them.
    pub fn insert_bulk(&mut self, entries: Vec<(String, H)>) -> RegistryResult<Vec<RouteKey>> {
        let mut staged = Vec::with_capacity(entries.len());
        let mut seen: HashMap<&str, RouteKey> = HashMap::with_capacity(entries.len());

        for (offset, (pattern, _)) in entries.iter().enumerate() {
            let key = self.next_key(pattern, offset)?;
            self.check_duplicate(pattern)?;
            if let Some(&existing_key) = seen.get(pattern.as_str()) {
                return Err(RegistryError::DuplicatePattern {
                    pattern: pattern.clone(),
                    existing_key,
                });
            }
            seen.insert(pattern.as_str(), key);
            staged.push((key, RoutePattern::compile(pattern, &self.options)?));
        }
        drop(seen);

        let keys = staged.iter().map(|(key, _)| *key).collect();
        for ((key, compiled), (_, handler)) in staged.into_iter().zip(entries) {
            self.push(key, compiled, handler);
        }
        tracing::debug!(count = self.entries.len(), "bulk routes registered");
        Ok(keys)
    }

    /// Moves the registered routes into a read-only table and leaves the
    /// registry empty.
    pub fn take_table(&mut self) -> RouteTable<H> {
        let entries = std::mem::take(&mut self.entries);
        self.by_pattern.clear();
        RouteTable::new(entries, self.options.clone())
    }

    fn next_key(&self, pattern: &str, offset: usize) -> RegistryResult<RouteKey> {
        let next = self.entries.len() + offset;
        if next >= MAX_ROUTES as usize {
            return Err(RegistryError::MaxRoutesExceeded {
                pattern: pattern.to_string(),
                limit: MAX_ROUTES,
            });
        }
        Ok(next as RouteKey)
    }

    fn check_duplicate(&self, pattern: &str) -> RegistryResult<()> {
        match self.by_pattern.get(pattern) {
            Some(&existing_key) => Err(RegistryError::DuplicatePattern {
                pattern: pattern.to_string(),
                existing_key,
            }),
            None => Ok(()),
        }
    }

    fn push(&mut self, key: RouteKey, pattern: RoutePattern, handler: H) {
        self.by_pattern.insert(pattern.raw().into(), key);
        self.entries.push(RouteEntry {
            key,
            pattern,
            handler,
        });
    }
}
