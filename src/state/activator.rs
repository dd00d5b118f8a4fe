// Section activation - where a tab click should land
use crate::model::{RoutePath, Section};
use crate::state::navigation::NavigationState;
use tracing::debug;

/// Path to open when the user selects `target` in the tab bar.
///
/// - `Profile` always opens the requester's own `/profile`.
/// - Re-selecting the active tab resets to the section root.
/// - Otherwise the section's last path, unless it is missing, still holds a
///   `[param]` placeholder, or points at a profile other than the
///   requester's; then the section root.
pub fn activate(state: &NavigationState, target: &Section, requester: Option<&str>) -> String {
    if *target == Section::Profile {
        return Section::Profile.root_path();
    }

    if state.is_current(target) {
        debug!(section = %target, "tab re-selected, resetting to root");
        return target.root_path();
    }

    match state.last_path(target) {
        Some(last) if is_usable(last, requester) => last.to_string(),
        Some(last) => {
            debug!(section = %target, stale = last, "dropping unusable history entry");
            target.root_path()
        }
        None => target.root_path(),
    }
}

/// Entry below the top of the active section's stack.
///
/// Backs an in-section "up" control. `None` when there is no active
/// section, it has a single entry, or that entry is unusable. Pair with
/// `NavigationTracker::expect_section_back` so repeated steps keep walking
/// down the stack.
pub fn section_back(state: &NavigationState, requester: Option<&str>) -> Option<String> {
    let section = state.current_section()?;
    let previous = state.history().previous_path(section)?;
    if is_usable(previous, requester) {
        Some(previous.to_string())
    } else {
        None
    }
}

fn is_usable(path: &str, requester: Option<&str>) -> bool {
    let route = RoutePath::parse(path);
    route.is_resolved() && !route.is_foreign_profile(requester)
}
