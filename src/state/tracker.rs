// Navigation tracker - files completed navigations into section histories
use crate::model::{RoutePath, Section};
use crate::router::HostRouter;
use crate::state::classifier::classify;
use crate::state::navigation::NavigationState;
use tracing::{debug, info, warn};

/// What the tracker did with one navigation notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    Recorded { section: Section, tab_switch: bool },
    /// The section returned to the entry below its top.
    SteppedBack { section: Section },
    /// The router was still initializing; nothing was recorded.
    IgnoredNotReady,
    /// The path still held a `[param]` placeholder; nothing was recorded.
    IgnoredUnresolved,
}

/// The only writer of `NavigationState`.
///
/// Remembers the router readiness it last saw so the current path gets
/// recorded every time the router becomes ready, at startup or after a
/// re-initialization. A pending section-back target lets "up" walk down
/// the stack instead of pushing the previous entry on top again.
#[derive(Debug, Default)]
pub struct NavigationTracker {
    router_was_ready: bool,
    pending_back: Option<String>,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_navigation_completed(
        &mut self,
        state: &mut NavigationState,
        router_ready: bool,
        path: &str,
        current_username: Option<&str>,
    ) -> TrackOutcome {
        if !router_ready {
            debug!(path, "router not ready, ignoring navigation");
            return TrackOutcome::IgnoredNotReady;
        }

        let route = RoutePath::parse(path);
        if !route.is_resolved() {
            warn!(path, "unresolved template path, not recording");
            self.pending_back = None;
            return TrackOutcome::IgnoredUnresolved;
        }

        let section = classify(&route, current_username);
        let tab_switch = !state.is_current(&section);

        if let Some(target) = self.pending_back.take() {
            let returning = !tab_switch
                && target == path
                && state.history().previous_path(&section) == Some(path);
            if returning && state.step_back(&section) {
                return TrackOutcome::SteppedBack { section };
            }
        }

        if tab_switch {
            // Leave the previous section's stack as it is.
            info!(
                from = ?state.current_section().map(Section::name),
                to = section.name(),
                "tab switch"
            );
            state.record_visit(&section, path);
            state.set_current_section(section.clone());
        } else {
            state.record_visit(&section, path);
        }

        TrackOutcome::Recorded {
            section,
            tab_switch,
        }
    }

    /// Marks the next completion of `path` as an in-section step back.
    pub fn expect_section_back(&mut self, path: impl Into<String>) {
        self.pending_back = Some(path.into());
    }

    pub fn cancel_section_back(&mut self) {
        self.pending_back = None;
    }

    /// Records the router's current path when it has just become ready.
    ///
    /// Call at mount and whenever readiness may have changed. Returns `None`
    /// when there was no not-ready to ready transition.
    pub fn sync_readiness<R: HostRouter + ?Sized>(
        &mut self,
        state: &mut NavigationState,
        router: &R,
        current_username: Option<&str>,
    ) -> Option<TrackOutcome> {
        let ready = router.is_ready();
        let became_ready = ready && !self.router_was_ready;
        self.router_was_ready = ready;

        if !became_ready {
            return None;
        }

        let path = router.current_path()?.to_string();
        info!(path = path.as_str(), "router ready, recording initial path");
        Some(self.on_navigation_completed(state, true, &path, current_username))
    }

    /// Delivers a batch of completed navigations in order.
    pub fn track_all<I>(
        &mut self,
        state: &mut NavigationState,
        router_ready: bool,
        paths: I,
        current_username: Option<&str>,
    ) -> Vec<TrackOutcome>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|path| {
                self.on_navigation_completed(state, router_ready, path.as_ref(), current_username)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::MemoryRouter;

    #[test]
    fn test_first_navigation_is_tab_switch() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();

        let outcome = tracker.on_navigation_completed(&mut state, true, "/feed", None);
        assert_eq!(
            outcome,
            TrackOutcome::Recorded {
                section: Section::Feed,
                tab_switch: true
            }
        );
        assert_eq!(state.current_section(), Some(&Section::Feed));
    }

    #[test]
    fn test_in_section_navigation_appends() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        tracker.on_navigation_completed(&mut state, true, "/feed", None);

        let outcome = tracker.on_navigation_completed(&mut state, true, "/feed/post/1", None);
        assert_eq!(
            outcome,
            TrackOutcome::Recorded {
                section: Section::Feed,
                tab_switch: false
            }
        );
        assert_eq!(state.all_histories()[&Section::Feed], vec!["/feed", "/feed/post/1"]);
    }

    #[test]
    fn test_tab_switch_leaves_previous_stack_alone() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        tracker.track_all(&mut state, true, ["/feed", "/feed/post/1"], Some("bob"));
        tracker.track_all(&mut state, true, ["/community", "/community/42"], Some("bob"));
        tracker.on_navigation_completed(&mut state, true, "/feed/post/1", Some("bob"));

        let snapshot = state.all_histories();
        assert_eq!(snapshot[&Section::Feed], vec!["/feed", "/feed/post/1"]);
        assert_eq!(snapshot[&Section::Community], vec!["/community", "/community/42"]);
        assert_eq!(state.current_section(), Some(&Section::Feed));
    }

    #[test]
    fn test_foreign_profile_goes_to_community() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        tracker.on_navigation_completed(&mut state, true, "/profile/alice", Some("bob"));

        assert_eq!(state.last_path(&Section::Community), Some("/profile/alice"));
        assert_eq!(state.last_path(&Section::Profile), None);
    }

    #[test]
    fn test_not_ready_is_ignored() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        let outcome = tracker.on_navigation_completed(&mut state, false, "/feed/[id]", None);

        assert_eq!(outcome, TrackOutcome::IgnoredNotReady);
        assert!(state.all_histories().is_empty());
        assert!(state.current_section().is_none());
    }

    #[test]
    fn test_sync_readiness_records_current_path_once() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        let mut router = MemoryRouter::new("/map");

        assert_eq!(tracker.sync_readiness(&mut state, &router, None), None);

        router.set_ready(true);
        assert_eq!(
            tracker.sync_readiness(&mut state, &router, None),
            Some(TrackOutcome::Recorded {
                section: Section::Map,
                tab_switch: true
            })
        );
        assert_eq!(tracker.sync_readiness(&mut state, &router, None), None);
        assert_eq!(state.last_path(&Section::Map), Some("/map"));
    }

    #[test]
    fn test_reinitialized_router_records_again() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        let mut router = MemoryRouter::new("/feed");
        router.set_ready(true);
        tracker.sync_readiness(&mut state, &router, None);

        router.set_ready(false);
        assert_eq!(tracker.sync_readiness(&mut state, &router, None), None);
        router.push("/search");
        router.set_ready(true);
        tracker.sync_readiness(&mut state, &router, None);

        assert_eq!(state.current_section(), Some(&Section::Search));
        assert_eq!(state.last_path(&Section::Search), Some("/search"));
    }

    #[test]
    fn test_unresolved_path_is_not_recorded() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        tracker.on_navigation_completed(&mut state, true, "/feed", None);

        let outcome = tracker.on_navigation_completed(&mut state, true, "/map/[region]", None);
        assert_eq!(outcome, TrackOutcome::IgnoredUnresolved);
        assert_eq!(state.last_path(&Section::Map), None);
        assert_eq!(state.current_section(), Some(&Section::Feed));
    }

    #[test]
    fn test_unresolved_initial_path_is_not_recorded() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        let mut router = MemoryRouter::new("/map/[region]");
        router.set_ready(true);

        assert_eq!(
            tracker.sync_readiness(&mut state, &router, None),
            Some(TrackOutcome::IgnoredUnresolved)
        );
        assert!(state.all_histories().is_empty());
    }

    #[test]
    fn test_expected_section_back_walks_down_the_stack() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        tracker.track_all(&mut state, true, ["/feed", "/feed/post/1", "/feed/post/2"], None);

        tracker.expect_section_back("/feed/post/1");
        assert_eq!(
            tracker.on_navigation_completed(&mut state, true, "/feed/post/1", None),
            TrackOutcome::SteppedBack {
                section: Section::Feed
            }
        );
        tracker.expect_section_back("/feed");
        tracker.on_navigation_completed(&mut state, true, "/feed", None);

        assert_eq!(state.all_histories()[&Section::Feed], vec!["/feed"]);
    }

    #[test]
    fn test_unexpected_revisit_still_appends() {
        let mut state = NavigationState::new();
        let mut tracker = NavigationTracker::new();
        tracker.track_all(&mut state, true, ["/feed", "/feed/post/1", "/feed"], None);
        assert_eq!(
            state.all_histories()[&Section::Feed],
            vec!["/feed", "/feed/post/1", "/feed"]
        );

        tracker.expect_section_back("/feed/post/1");
        tracker.cancel_section_back();
        tracker.on_navigation_completed(&mut state, true, "/feed/post/1", None);
        assert_eq!(state.history().stack(&Section::Feed).map(|s| s.len()), Some(4));
    }
}
