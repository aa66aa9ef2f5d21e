use crate::readonly::RouteTable;
use crate::registry::RouteRegistry;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::types::{RouteKey, RouteMatch};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

#[derive(Debug)]
struct RouterState<H> {
    registry: RouteRegistry<H>,
    readonly: OnceLock<Arc<RouteTable<H>>>,
}

impl<H> RouterState<H> {
    fn new(options: RouterOptions) -> Self {
        Self {
            registry: RouteRegistry::new(options),
            readonly: OnceLock::new(),
        }
    }
}

#[derive(Debug)]
pub struct Router<H> {
    inner: RwLock<RouterState<H>>,
}

impl<H> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(RouterState::new(options.unwrap_or_default())),
        }
    }

    /// Builds a router from options that have not been validated yet.
    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn add(&self, pattern: &str, handler: H) -> RouterResult<RouteKey> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            });
        }

        Ok(guard.registry.insert(pattern, handler)?)
    }

    pub fn add_bulk<I, S>(&self, entries: I) -> RouterResult<Vec<RouteKey>>
    where
        I: IntoIterator<Item = (S, H)>,
        S: Into<String>,
    {
        let entries: Vec<(String, H)> = entries
            .into_iter()
            .map(|(pattern, handler)| (pattern.into(), handler))
            .collect();
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::BulkAddWhileSealed {
                count: entries.len(),
            });
        }

        Ok(guard.registry.insert_bulk(entries)?)
    }

    pub fn seal(&self) {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return;
        }

        let table = guard.registry.take_table();
        tracing::debug!(routes = table.len(), "router sealed");
        let _ = guard.readonly.set(Arc::new(table));
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn find(&self, path: &str) -> RouterResult<RouteMatch> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(table) => table
                .resolve(path)
                .map(|resolved| resolved.to_match())
                .ok_or_else(|| RouterError::RouteNotFound {
                    path: path.to_string(),
                }),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouteTable<H>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(table) => Ok(Arc::clone(table)),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }
}
