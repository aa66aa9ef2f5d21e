use crate::navigation::{ChangeListener, NavigationProvider};
use parking_lot::Mutex;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const HASH_CHANGE: &str = "hashchange";

/// `window.location` backed provider. Registered `hashchange` listeners are
/// removed when the provider is dropped.
pub struct BrowserNavigation {
    window: web_sys::Window,
    listeners: Mutex<Vec<Closure<dyn FnMut()>>>,
}

impl BrowserNavigation {
    /// Returns `None` outside a browser window context.
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self {
            window,
            listeners: Mutex::new(Vec::new()),
        })
    }
}

impl NavigationProvider for BrowserNavigation {
    fn current_fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn set_fragment(&self, fragment: &str) {
        if let Err(err) = self.window.location().set_hash(fragment) {
            tracing::warn!(?err, fragment, "failed to set location hash");
        }
    }

    fn on_change(&self, listener: ChangeListener) {
        let closure = Closure::<dyn FnMut()>::new(move || listener());
        let registered = self
            .window
            .add_event_listener_with_callback(HASH_CHANGE, closure.as_ref().unchecked_ref());

        match registered {
            Ok(()) => self.listeners.lock().push(closure),
            Err(err) => tracing::warn!(?err, "failed to register hashchange listener"),
        }
    }
}

impl Drop for BrowserNavigation {
    fn drop(&mut self) {
        for closure in self.listeners.get_mut().drain(..) {
            let _ = self
                .window
                .remove_event_listener_with_callback(HASH_CHANGE, closure.as_ref().unchecked_ref());
        }
    }
}

impl std::fmt::Debug for BrowserNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserNavigation")
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
