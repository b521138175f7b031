use serde::{Deserialize, Serialize};

/// A content category.
///
/// Deletion is a soft state transition on the backend; a deleted category
/// keeps appearing in the list with `is_deleted` set, and the client only
/// disables its delete control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Payload for `POST /categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    /// Name of the category to create.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests that the soft-delete flag defaults to live
    #[test]
    fn test_category_defaults() {
        let category: Category =
            serde_json::from_value(json!({ "id": 3, "name": "News" })).unwrap();
        assert!(!category.is_deleted);

        let deleted: Category =
            serde_json::from_value(json!({ "id": 4, "name": "Old", "isDeleted": true }))
                .unwrap();
        assert!(deleted.is_deleted);
    }

    /// Tests the create payload wire shape
    #[test]
    fn test_create_request_shape() {
        let payload = CreateCategoryRequest {
            name: "Events".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Events" })
        );
    }
}
