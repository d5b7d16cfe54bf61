//! JSON data model for the homepage sections
//!
//! Field names follow the camelCase layout of the `public/data/*.json`
//! files. Lists that are missing in the source default to empty.

use serde::{Deserialize, Serialize};

/// One way to reach the site owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Channel name, e.g. "Email"
    #[serde(rename = "type")]
    pub kind: String,
    /// Address or handle on that channel
    pub value: String,
}

/// A social profile link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    /// Display label
    pub label: String,
    /// Target URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Contents of `profile.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Avatar image path or URL
    #[serde(default)]
    pub avatar: String,
    /// Short biography
    #[serde(default)]
    pub bio: String,
    /// Contact channels
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Social links
    #[serde(default)]
    pub socials: Vec<Social>,
}

impl Profile {
    /// "type value / type value" line used by the profile view and card
    pub fn contacts_line(&self) -> String {
        self.contacts
            .iter()
            .map(|c| format!("{} {}", c.kind, c.value))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// "label / label" line of social links
    pub fn socials_line(&self) -> String {
        self.socials
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// One entry of the tool directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Link target
    pub url: String,
    /// Icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Primary category; takes precedence over tags when filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Shown in the featured strip
    #[serde(default)]
    pub featured: bool,
    /// Sort weight, higher first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Contents of `tools.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolsFile {
    #[serde(default)]
    pub items: Vec<Tool>,
    /// Options offered by the category filter
    #[serde(default)]
    pub categories: Vec<String>,
}

/// One learning-log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub title: String,
    /// Date as written in the source, usually `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub related_tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub pinned: bool,
}

/// Contents of `logs.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsFile {
    #[serde(default)]
    pub items: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lines() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "name": "Zhi",
                "avatar": "/avatar.png",
                "bio": "hello",
                "contacts": [{"type": "Email", "value": "a@b.c"}, {"type": "WeChat", "value": "zhi"}],
                "socials": [{"label": "GitHub", "url": "https://github.com"}, {"label": "Blog"}]
            }"#,
        )
        .expect("valid profile");
        assert_eq!(profile.contacts_line(), "Email a@b.c / WeChat zhi");
        assert_eq!(profile.socials_line(), "GitHub / Blog");
    }

    #[test]
    fn test_tool_defaults() {
        let tool: Tool = serde_json::from_str(r#"{"name": "jq", "url": "https://jqlang.org"}"#)
            .expect("valid tool");
        assert!(tool.tags.is_empty());
        assert!(!tool.featured);
        assert_eq!(tool.weight, None);
        assert_eq!(tool.description, "");
    }

    #[test]
    fn test_log_camel_case_fields() {
        let log: LogEntry = serde_json::from_str(
            r#"{"title": "Rust", "date": "2024-03-01", "relatedTools": ["cargo"], "pinned": true}"#,
        )
        .expect("valid log");
        assert_eq!(log.related_tools, vec!["cargo".to_string()]);
        assert!(log.pinned);
        assert!(log.details.is_none());
    }
}
