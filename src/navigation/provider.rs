/// Callback fired after the current fragment changed.
pub type ChangeListener = Box<dyn Fn()>;

/// Access to the fragment part of the current location.
///
/// `current_fragment` returns the raw `location.hash`: either empty or
/// starting with `#`.
pub trait NavigationProvider {
    fn current_fragment(&self) -> String;

    fn set_fragment(&self, fragment: &str);

    fn on_change(&self, listener: ChangeListener);
}

impl<N: NavigationProvider + ?Sized> NavigationProvider for std::rc::Rc<N> {
    fn current_fragment(&self) -> String {
        (**self).current_fragment()
    }

    fn set_fragment(&self, fragment: &str) {
        (**self).set_fragment(fragment)
    }

    fn on_change(&self, listener: ChangeListener) {
        (**self).on_change(listener)
    }
}

/// Moves the application to `path` by rewriting the fragment.
pub fn navigate_to<N: NavigationProvider + ?Sized>(navigation: &N, path: &str) {
    tracing::trace!(path, "navigate");
    navigation.set_fragment(&format!("#{path}"));
}
