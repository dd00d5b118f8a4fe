// Safe navigation - every section-initiated navigation passes through here
use crate::error::NavError;
use crate::model::{RoutePath, Section};
use crate::router::HostRouter;
use crate::state::activator::{activate, section_back};
use crate::state::navigation::NavigationState;
use crate::state::tracker::NavigationTracker;
use tracing::{debug, error};

/// Pushes `path` on the router unless it still holds a `[param]` placeholder.
pub fn safe_navigate<R: HostRouter + ?Sized>(router: &mut R, path: &str) -> Result<(), NavError> {
    let route = RoutePath::parse(path);
    if !route.is_resolved() {
        error!(path, "unresolved template path, navigation suppressed");
        return Err(NavError::UnresolvedTemplate {
            path: path.to_string(),
        });
    }

    debug!(path, "navigating");
    router.push(route.as_str());
    Ok(())
}

/// Tab-bar handler: resolve where `target` should land and go there.
///
/// Returns the path that was pushed.
pub fn open_section<R: HostRouter + ?Sized>(
    state: &NavigationState,
    router: &mut R,
    target: &Section,
    requester: Option<&str>,
) -> Result<String, NavError> {
    let path = activate(state, target, requester);
    safe_navigate(router, &path)?;
    Ok(path)
}

/// In-section "up": go to the entry below the top and have the tracker
/// treat its completion as a step back rather than a new visit.
///
/// Returns the path pushed, or `None` when there is nowhere to go.
pub fn step_back_in_section<R: HostRouter + ?Sized>(
    state: &NavigationState,
    tracker: &mut NavigationTracker,
    router: &mut R,
    requester: Option<&str>,
) -> Result<Option<String>, NavError> {
    let Some(path) = section_back(state, requester) else {
        return Ok(None);
    };
    tracker.expect_section_back(path.as_str());
    if let Err(e) = safe_navigate(router, &path) {
        tracker.cancel_section_back();
        return Err(e);
    }
    Ok(Some(path))
}
