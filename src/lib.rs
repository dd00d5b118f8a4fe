//! Section-scoped navigation history for a multi-tab client.
//!
//! Each top-level section (feed, community, map, ...) keeps its own bounded
//! history on top of the host's single linear one, so returning to a tab
//! resumes where the user left it.

pub mod app;
pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod router;
pub mod state;
pub mod subscription;

pub use error::{ConfigError, NavError};
pub use model::{RoutePath, Section};
pub use router::{HostRouter, MemoryRouter};
pub use state::{
    activate, classify, open_section, safe_navigate, NavigationState, NavigationTracker,
    TrackOutcome,
};
