// History store - one bounded path stack per section
use crate::model::Section;
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::debug;

/// Default number of paths kept per section.
pub const MAX_HISTORY: usize = 20;

/// Visited paths of one section, oldest first.
#[derive(Debug, Clone)]
pub struct SectionStack {
    entries: VecDeque<String>,
    capacity: usize,
}

impl SectionStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns false when `path` was already on top and nothing changed.
    pub fn push(&mut self, path: &str) -> bool {
        if self.last() == Some(path) {
            return false;
        }
        self.entries.push_back(path.to_string());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        true
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Entry just below the top.
    pub fn previous(&self) -> Option<&str> {
        let len = self.entries.len();
        if len < 2 {
            return None;
        }
        self.entries.get(len - 2).map(String::as_str)
    }

    /// Drops the top so the entry below it becomes current. The last
    /// remaining entry is never dropped.
    pub fn retreat(&mut self) -> bool {
        if self.entries.len() < 2 {
            return false;
        }
        self.entries.pop_back();
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// Owned copy of every section's stack, oldest entry first.
pub type HistorySnapshot = BTreeMap<Section, Vec<String>>;

/// Per-section bounded histories. Stacks are created on first visit.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    stacks: HashMap<Section, SectionStack>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// A capacity of 0 is raised to 1 so a visited section always has a top.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stacks: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record_visit(&mut self, section: &Section, path: &str) {
        let capacity = self.capacity;
        let stack = self
            .stacks
            .entry(section.clone())
            .or_insert_with(|| SectionStack::new(capacity));

        if stack.push(path) {
            debug!(%section, path, depth = stack.len(), "recorded visit");
        }
    }

    /// Moves the section back one entry; see `SectionStack::retreat`.
    pub fn step_back(&mut self, section: &Section) -> bool {
        let Some(stack) = self.stacks.get_mut(section) else {
            return false;
        };
        if !stack.retreat() {
            return false;
        }
        debug!(%section, top = stack.last(), "stepped back");
        true
    }

    pub fn last_path(&self, section: &Section) -> Option<&str> {
        self.stacks.get(section).and_then(SectionStack::last)
    }

    pub fn previous_path(&self, section: &Section) -> Option<&str> {
        self.stacks.get(section).and_then(SectionStack::previous)
    }

    pub fn stack(&self, section: &Section) -> Option<&SectionStack> {
        self.stacks.get(section)
    }

    pub fn all_histories(&self) -> HistorySnapshot {
        self.stacks
            .iter()
            .map(|(section, stack)| (section.clone(), stack.to_vec()))
            .collect()
    }

    /// Number of sections visited so far.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
