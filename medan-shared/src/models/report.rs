use serde::{Deserialize, Serialize};

/// A user report as listed by `GET /reports`.
///
/// Reports are read-only in the console; moderation happens through the
/// posts and users pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Backend identifier.
    pub id: i64,
    /// Title of the reported post; absent once the post is deleted.
    #[serde(default)]
    pub post_title: Option<String>,
    /// Reason the reporter gave.
    #[serde(default)]
    pub reason: String,
    /// Name of the reporting user.
    #[serde(default)]
    pub reporter_name: String,
    /// When the report was filed.
    #[serde(default)]
    pub created_at: String,
}

impl Report {
    /// Title to render, with a placeholder for reports on deleted posts.
    #[must_use]
    pub fn title(&self) -> &str {
        self.post_title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or("Deleted Post")
    }

    /// Case-insensitive match over the post title for the search box.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.post_title
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests the deleted-post placeholder
    #[test]
    fn test_title_placeholder() {
        let gone: Report = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(gone.title(), "Deleted Post");

        let blank: Report =
            serde_json::from_value(json!({ "id": 2, "postTitle": "" })).unwrap();
        assert_eq!(blank.title(), "Deleted Post");

        let live: Report =
            serde_json::from_value(json!({ "id": 3, "postTitle": "Spam" })).unwrap();
        assert_eq!(live.title(), "Spam");
    }

    /// Tests that reports without a title match only the empty query
    #[test]
    fn test_matches_missing_title() {
        let gone: Report = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(gone.matches(""));
        assert!(!gone.matches("spam"));
    }
}
