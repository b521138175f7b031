use serde::{Deserialize, Serialize};

/// A post as listed by `GET /posts/all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend identifier.
    pub id: i64,
    /// Post title, the only field the page searches over.
    #[serde(default)]
    pub title: String,
    /// Attached media, first entry is used as the thumbnail.
    #[serde(default)]
    pub media_urls: Vec<String>,
    /// Creation timestamp as the backend sent it.
    #[serde(default)]
    pub created_at: String,
    /// Denormalized category name.
    #[serde(default)]
    pub category_name: String,
    /// City the post was published in.
    #[serde(default)]
    pub city: String,
}

impl Post {
    /// First media URL, when the post has any.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.media_urls.first().map(String::as_str)
    }

    /// Case-insensitive title match for the search box.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests deserialization of the documented wire shape
    #[test]
    fn test_post_wire_shape() {
        let post: Post = serde_json::from_value(json!({
            "id": 1,
            "title": "Hello",
            "mediaUrls": [],
            "createdAt": "2024-01-01",
            "categoryName": "News",
            "city": "Aleppo"
        }))
        .unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.category_name, "News");
        assert_eq!(post.thumbnail(), None);
    }

    /// Tests the search predicate is case-insensitive substring match
    #[test]
    fn test_post_matches() {
        let post: Post =
            serde_json::from_value(json!({ "id": 1, "title": "Hello World" })).unwrap();
        assert!(post.matches("hello"));
        assert!(post.matches("O WOR"));
        assert!(post.matches(""));
        assert!(!post.matches("xyz"));
    }
}
