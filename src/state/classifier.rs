// Section classification - which history a path belongs to
use crate::model::{RoutePath, Section};

/// Maps a path to the section whose history should record it.
///
/// Another user's profile page is community browsing, so it is filed under
/// `Community` and never lands in the viewer's own `Profile` history. The
/// username is taken per call since the signed-in user can change between
/// navigations.
pub fn classify(path: &RoutePath, current_username: Option<&str>) -> Section {
    if path.is_foreign_profile(current_username) {
        return Section::Community;
    }
    Section::from_prefix(path.prefix())
}
