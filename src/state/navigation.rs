// Navigation state - per-section histories and the active section
use crate::model::Section;
use crate::state::history::{HistorySnapshot, HistoryStore};
use std::sync::{Arc, Mutex, MutexGuard};

/// Session-wide navigation state.
///
/// Build one at startup and hand it by reference to the tracker (the only
/// writer) and the activator. Outside the crate the state is read-only.
/// Nothing is persisted; a fresh session starts with empty histories.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    history: HistoryStore,
    current_section: Option<Section>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            history: HistoryStore::with_capacity(max_entries),
            current_section: None,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.current_section.as_ref()
    }

    pub fn is_current(&self, section: &Section) -> bool {
        self.current_section.as_ref() == Some(section)
    }

    pub fn last_path(&self, section: &Section) -> Option<&str> {
        self.history.last_path(section)
    }

    pub fn all_histories(&self) -> HistorySnapshot {
        self.history.all_histories()
    }

    pub(crate) fn record_visit(&mut self, section: &Section, path: &str) {
        self.history.record_visit(section, path);
    }

    pub(crate) fn set_current_section(&mut self, section: Section) {
        self.current_section = Some(section);
    }

    pub(crate) fn step_back(&mut self, section: &Section) -> bool {
        self.history.step_back(section)
    }
}

/// `NavigationState` behind one lock, for hosts that deliver navigation
/// events from more than one thread.
#[derive(Debug, Clone, Default)]
pub struct SharedNavigationState {
    inner: Arc<Mutex<NavigationState>>,
}

impl SharedNavigationState {
    pub fn new(state: NavigationState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Recovers from poisoning: stacks are never left half-updated.
    pub fn lock(&self) -> MutexGuard<'_, NavigationState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn last_path(&self, section: &Section) -> Option<String> {
        self.lock().last_path(section).map(str::to_string)
    }

    pub fn all_histories(&self) -> HistorySnapshot {
        self.lock().all_histories()
    }
}
