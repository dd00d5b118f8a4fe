use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level area of the client with its own navigation history.
///
/// Unknown path prefixes become `Other`, an ad hoc section named after the
/// prefix, so new areas get isolated history without a table change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    Feed,
    Community,
    Map,
    Profile,
    Politicians,
    Search,
    Messages,
    Other(String),
}

impl Section {
    /// Fixed sections in tab-bar order.
    pub const TABS: [Section; 7] = [
        Section::Feed,
        Section::Community,
        Section::Map,
        Section::Politicians,
        Section::Search,
        Section::Messages,
        Section::Profile,
    ];

    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "" | "feed" => Self::Feed,
            "community" => Self::Community,
            "map" => Self::Map,
            "profile" => Self::Profile,
            "politicians" => Self::Politicians,
            "search" => Self::Search,
            "messages" => Self::Messages,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Feed => "feed",
            Self::Community => "community",
            Self::Map => "map",
            Self::Profile => "profile",
            Self::Politicians => "politicians",
            Self::Search => "search",
            Self::Messages => "messages",
            Self::Other(name) => name,
        }
    }

    /// Top of the section, e.g. `/community`.
    pub fn root_path(&self) -> String {
        format!("/{}", self.name())
    }

    pub fn label(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Section {
    fn from(name: String) -> Self {
        Self::from_prefix(&name)
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.name().to_string()
    }
}
