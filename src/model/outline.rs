//! Resolved outline (table of contents) entries.

use std::fmt;

use serde::ser::Serializer;
use serde::Serialize;

/// Where an outline entry points after destination resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTarget {
    /// Resolved to a 1-based page number.
    Page(u32),

    /// The entry has neither a destination nor an action; it only groups
    /// child entries.
    Container,

    /// The destination could not be mapped to a page.
    Unresolved,

    /// A URI action with its decoded value.
    Uri(String),

    /// A named action of the given kind (e.g. "GoToR").
    Action(String),

    /// An action whose shape was not recognized.
    UnknownAction,
}

impl fmt::Display for PageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageTarget::Page(n) => write!(f, "{}", n),
            PageTarget::Container => write!(f, "[Container]"),
            PageTarget::Unresolved => write!(f, "[Unresolved Destination]"),
            PageTarget::Uri(value) => write!(f, "URI: {}", value),
            PageTarget::Action(kind) => write!(f, "[Action: {}]", kind),
            PageTarget::UnknownAction => write!(f, "[Unknown Action]"),
        }
    }
}

impl Serialize for PageTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Resolved targets serialize as a number, symbolic ones as their tag
        match self {
            PageTarget::Page(n) => serializer.serialize_u32(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// One resolved outline entry, read-only after construction.
#[derive(Debug, Clone, Serialize)]
pub struct OutlineEntry {
    /// Nesting depth as reported by the provider.
    pub level: u32,

    /// Entry title.
    pub title: String,

    /// Resolution result for the entry's destination or action.
    pub page: PageTarget,
}

impl OutlineEntry {
    /// Create a resolved entry.
    pub fn new(level: u32, title: impl Into<String>, page: PageTarget) -> Self {
        Self {
            level,
            title: title.into(),
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        assert_eq!(PageTarget::Page(7).to_string(), "7");
        assert_eq!(PageTarget::Container.to_string(), "[Container]");
        assert_eq!(
            PageTarget::Unresolved.to_string(),
            "[Unresolved Destination]"
        );
        assert_eq!(
            PageTarget::Uri("http://x".to_string()).to_string(),
            "URI: http://x"
        );
        assert_eq!(
            PageTarget::Action("GoToR".to_string()).to_string(),
            "[Action: GoToR]"
        );
        assert_eq!(PageTarget::UnknownAction.to_string(), "[Unknown Action]");
    }

    #[test]
    fn test_target_serialization() {
        let entry = OutlineEntry::new(1, "Intro", PageTarget::Page(3));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"page\":3"));

        let entry = OutlineEntry::new(2, "Site", PageTarget::Uri("http://x".to_string()));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"page\":\"URI: http://x\""));
    }
}
