use crate::navigation::{ChangeListener, NavigationProvider};
use crate::path::fragment_to_path;
use parking_lot::Mutex;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MemoryState {
    hash: String,
    pending: usize,
    notifying: bool,
}

/// In-process stand-in for `window.location`.
///
/// Listeners run synchronously inside `set_fragment`. A fragment set from a
/// listener is delivered once the running notification returns, so
/// navigations never interleave.
#[derive(Default)]
pub struct MemoryNavigation {
    state: Mutex<MemoryState>,
    listeners: Mutex<Vec<Rc<dyn Fn()>>>,
}

impl MemoryNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fragment(fragment: &str) -> Self {
        let navigation = Self::default();
        navigation.state.lock().hash = normalize_hash(fragment);
        navigation
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn notify_pending(&self) {
        loop {
            {
                let mut state = self.state.lock();
                if state.pending == 0 {
                    state.notifying = false;
                    return;
                }
                state.pending -= 1;
            }

            let listeners: Vec<Rc<dyn Fn()>> = self.listeners.lock().clone();
            for listener in listeners {
                listener();
            }
        }
    }
}

impl NavigationProvider for MemoryNavigation {
    fn current_fragment(&self) -> String {
        self.state.lock().hash.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let hash = normalize_hash(fragment);
        {
            let mut state = self.state.lock();
            if state.hash == hash {
                return;
            }
            state.hash = hash;
            state.pending += 1;
            if state.notifying {
                return;
            }
            state.notifying = true;
        }

        self.notify_pending();
    }

    fn on_change(&self, listener: ChangeListener) {
        self.listeners.lock().push(Rc::from(listener));
    }
}

impl fmt::Debug for MemoryNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryNavigation")
            .field("hash", &self.state.lock().hash)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

// `location.hash = "#"` leaves the hash empty.
fn normalize_hash(fragment: &str) -> String {
    let path = fragment_to_path(fragment);
    if path.is_empty() {
        String::new()
    } else {
        format!("#{path}")
    }
}
