//! Host router boundary.
//!
//! The navigation core never owns the address history. It is told about
//! completed navigations and asks the host to push new ones.

use std::collections::VecDeque;
use tracing::{debug, info};

/// Operations the navigation core needs from the host router.
pub trait HostRouter {
    /// Navigate to `path`. Fire-and-forget from the caller's point of view.
    fn push(&mut self, path: &str);

    /// Whether the router finished its own initialization.
    fn is_ready(&self) -> bool;

    /// Path currently displayed, if any.
    fn current_path(&self) -> Option<&str>;
}

/// In-process router with one global, linear history.
///
/// Every push, back and forward queues a "navigation completed" notice that
/// the host loop drains and hands to the tracker.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    entries: Vec<String>,
    index: usize,
    ready: bool,
    completed: VecDeque<String>,
}

impl MemoryRouter {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
            index: 0,
            ready: false,
            completed: VecDeque::new(),
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        if self.ready != ready {
            info!(ready, "router readiness changed");
        }
        self.ready = ready;
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.complete_current();
        self.current_path()
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        self.complete_current();
        self.current_path()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Completed navigations since the last drain, oldest first.
    pub fn drain_completed(&mut self) -> Vec<String> {
        self.completed.drain(..).collect()
    }

    /// Global history, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn complete_current(&mut self) {
        if let Some(path) = self.entries.get(self.index) {
            debug!(path = path.as_str(), "navigation completed");
            self.completed.push_back(path.clone());
        }
    }
}

impl HostRouter for MemoryRouter {
    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
        self.complete_current();
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn current_path(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }
}
