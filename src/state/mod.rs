pub mod activator;
pub mod classifier;
pub mod history;
pub mod navigation;
pub mod navigator;
pub mod tracker;

pub use activator::{activate, section_back};
pub use classifier::classify;
pub use history::{HistorySnapshot, HistoryStore, SectionStack, MAX_HISTORY};
pub use navigation::{NavigationState, SharedNavigationState};
pub use navigator::{open_section, safe_navigate, step_back_in_section};
pub use tracker::{NavigationTracker, TrackOutcome};
