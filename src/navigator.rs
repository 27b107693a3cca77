//! Current-location tracking for the action handlers.

use std::sync::{Arc, Mutex};

/// Shared current-location cell with replace semantics.
///
/// Models history-replacing navigation: [`Navigator::replace`] swaps the
/// current location and keeps nothing to go back to. Cloning shares the
/// underlying cell, so concurrent action handlers observe one location.
#[derive(Clone)]
pub struct Navigator {
    location: Arc<Mutex<Option<String>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            location: Arc::new(Mutex::new(None)),
        }
    }

    /// Start out at a known location instead of nowhere.
    pub fn at(path: &str) -> Self {
        let navigator = Self::new();
        navigator.replace(path);
        navigator
    }

    /// Replace the current location.
    pub fn replace(&self, path: &str) {
        if let Ok(mut location) = self.location.lock() {
            *location = Some(path.to_string());
        }
    }

    /// The current location, if any navigation has happened.
    pub fn location(&self) -> Option<String> {
        self.location.lock().ok().and_then(|location| location.clone())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
