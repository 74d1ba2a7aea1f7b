//! Navigation is a collaborator of the session: login and logout end in a
//! full navigation so every view re-initialises against the new identity.

use std::sync::Mutex;

use tracing::info;

use crate::routes::Route;

pub trait Navigator {
    /// Replace the current view with `route`, discarding view state.
    fn navigate(&self, route: &Route);
}

/// Remembers every navigation; the CLI reports the last one.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        info!(route = %route, "navigate");
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route.clone());
    }
}
