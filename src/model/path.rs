// Parsed route path - segments and template detection computed once
use std::fmt;

/// A navigation path split into its segments.
///
/// The raw text is kept verbatim so it can be handed back to the router
/// unchanged. Query strings and fragments are not part of the segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    raw: String,
    segments: Vec<String>,
    resolved: bool,
}

impl RoutePath {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let path_part = raw
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();

        let segments: Vec<String> = path_part
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let resolved = !has_placeholder(&raw);

        Self {
            raw,
            segments,
            resolved,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// First segment, or "" for the root path.
    pub fn prefix(&self) -> &str {
        self.segment(0).unwrap_or("")
    }

    /// False while the path still holds a `[param]` placeholder.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Handle of the user a `/profile/{handle}` path points at.
    pub fn profile_handle(&self) -> Option<&str> {
        if self.prefix() == "profile" {
            self.segment(1)
        } else {
            None
        }
    }

    /// True when this is some user's profile page other than `username`'s.
    pub fn is_foreign_profile(&self, username: Option<&str>) -> bool {
        match self.profile_handle() {
            Some(handle) => username != Some(handle),
            None => false,
        }
    }
}

/// A `[` somewhere before a later `]`, anywhere in the raw text.
fn has_placeholder(raw: &str) -> bool {
    match (raw.find('['), raw.rfind(']')) {
        (Some(open), Some(close)) => open < close,
        _ => false,
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RoutePath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
