use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project record, owned by the external store and read-only here
///
/// Scheduling fields are optional; when absent, the timeline derives the
/// project's span from its member tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable store identifier
    pub id: String,
    /// Project display name
    pub name: String,
    /// Accent color token chosen by the user, passed through to views
    #[serde(default = "default_color")]
    pub color: String,
    /// Explicit start instant, if the user pinned one
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// Explicit end instant, if the user pinned one
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Creation instant
    pub created_at: DateTime<Utc>,
}

fn default_color() -> String {
    "#2196f3".to_string()
}

impl Project {
    /// Create a project record with the default accent color, stamped now
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Project {
            id: id.into(),
            name: name.into(),
            color: default_color(),
            start: None,
            end: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_color_gets_default() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "p1",
                "name": "Website",
                "created_at": "2024-03-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(project.color, "#2196f3");
        assert_eq!(project.start, None);
        assert_eq!(project.end, None);
    }
}
