use crate::navigation::{NavigationProvider, navigate_to};
use crate::path::{decode_fragment, fragment_to_path};
use crate::readonly::RouteTable;
use crate::router::{Router, RouterError, RouterResult};
use crate::types::{PathComponent, RouteKey};
use std::rc::Rc;
use std::sync::Arc;

/// Hands a resolved route to its collaborator.
pub trait Dispatcher<H> {
    fn dispatch(&self, handler: &H, params: &[PathComponent]);

    fn not_found(&self, message: &str);
}

/// Dispatcher for routers whose handlers are plain callbacks.
#[derive(Debug, Clone)]
pub struct CallbackDispatcher<E> {
    on_not_found: E,
}

impl<E> CallbackDispatcher<E>
where
    E: Fn(&str),
{
    pub fn new(on_not_found: E) -> Self {
        Self { on_not_found }
    }
}

impl<H, E> Dispatcher<H> for CallbackDispatcher<E>
where
    H: Fn(&[PathComponent]),
    E: Fn(&str),
{
    fn dispatch(&self, handler: &H, params: &[PathComponent]) {
        handler(params)
    }

    fn not_found(&self, message: &str) {
        (self.on_not_found)(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Matched { key: RouteKey, pattern: String },
    NotFound { message: String },
}

pub fn not_found_message(path: &str) -> String {
    RouterError::RouteNotFound {
        path: path.to_string(),
    }
    .to_string()
}

/// Glue between a navigation provider and a sealed route table.
#[derive(Debug)]
pub struct HashRouter<H, D, N> {
    table: Arc<RouteTable<H>>,
    dispatcher: D,
    navigation: N,
}

impl<H, D, N> HashRouter<H, D, N>
where
    D: Dispatcher<H>,
    N: NavigationProvider,
{
    /// Fails with `ReadOnlyUnavailable` unless `router` has been sealed.
    pub fn new(router: &Router<H>, dispatcher: D, navigation: N) -> RouterResult<Self> {
        Ok(Self::from_table(router.get_readonly()?, dispatcher, navigation))
    }

    pub fn from_table(table: Arc<RouteTable<H>>, dispatcher: D, navigation: N) -> Self {
        Self {
            table,
            dispatcher,
            navigation,
        }
    }

    pub fn table(&self) -> &RouteTable<H> {
        &self.table
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn navigate_to(&self, path: &str) {
        navigate_to(&self.navigation, path);
    }

    /// Reads the current fragment and renders the route it names. An
    /// undecodable fragment renders nothing.
    pub fn handle_hash_change(&self) -> RouterResult<Dispatched> {
        let hash = self.navigation.current_fragment();
        let raw = fragment_to_path(&hash);

        let path = if self.table.options().decode_uri {
            decode_fragment(raw).inspect_err(|err| {
                tracing::warn!(error = %err, "ignoring undecodable fragment");
            })?
        } else {
            raw.to_string()
        };

        Ok(self.render_route(&path))
    }

    pub fn render_route(&self, path: &str) -> Dispatched {
        match self.table.resolve(path) {
            Some(resolved) => {
                tracing::debug!(path, pattern = resolved.pattern, key = resolved.key, "route matched");
                self.dispatcher
                    .dispatch(resolved.handler, &resolved.components);
                Dispatched::Matched {
                    key: resolved.key,
                    pattern: resolved.pattern.to_string(),
                }
            }
            None => {
                let message = not_found_message(path);
                tracing::warn!(path, "no route matched");
                self.dispatcher.not_found(&message);
                Dispatched::NotFound { message }
            }
        }
    }
}

impl<H, D, N> HashRouter<H, D, N>
where
    H: 'static,
    D: Dispatcher<H> + 'static,
    N: NavigationProvider + 'static,
{
    /// Subscribes `router` to fragment changes. The subscription holds a weak
    /// reference, so dropping the last `Rc` stops rendering.
    pub fn attach(router: &Rc<Self>) {
        let weak = Rc::downgrade(router);
        router.navigation.on_change(Box::new(move || {
            if let Some(router) = weak.upgrade() {
                let _ = router.handle_hash_change();
            }
        }));
    }
}
