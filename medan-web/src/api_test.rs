//! Tests for the API client
//!
//! Validates URL construction, asset resolution, and the endpoint paths
//! the management views depend on.

#[cfg(test)]
mod tests {
    use crate::api::{MedanClient, is_sign_in_path};
    use shared::models::users_endpoint;

    /// Tests the sign-in discrimination that gates the 401 handling:
    /// only non-sign-in 401s wipe credentials and force re-login
    #[test]
    fn test_sign_in_path_detection() {
        assert!(is_sign_in_path("/auth/signin"));
        assert!(is_sign_in_path("auth/signin"));

        assert!(!is_sign_in_path("/posts/all"));
        assert!(!is_sign_in_path("/User/ban?userid=u-7"));
        assert!(!is_sign_in_path("/balance/admin/transactions"));
    }

    /// Tests API client creation and base URL normalization
    #[test]
    fn test_api_client_creation() {
        let client = MedanClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");

        let bare = MedanClient::new("/api");
        assert_eq!(bare.base_url(), "/api");
    }

    /// Tests URL joining with and without a leading slash
    #[test]
    fn test_api_url_joining() {
        let client = MedanClient::new("http://localhost:8080");
        assert_eq!(
            client.api_url("/posts/all"),
            "http://localhost:8080/posts/all"
        );
        assert_eq!(
            client.api_url("posts/all"),
            "http://localhost:8080/posts/all"
        );
    }

    /// Tests asset URL resolution leaves absolute URLs untouched
    #[test]
    fn test_asset_url() {
        let client = MedanClient::new("http://localhost:8080");
        assert_eq!(
            client.asset_url("uploads/receipt.png"),
            "http://localhost:8080/uploads/receipt.png"
        );
        assert_eq!(
            client.asset_url("https://cdn.example.com/r.png"),
            "https://cdn.example.com/r.png"
        );
    }

    /// Tests the city-dependent users endpoint
    #[test]
    fn test_users_endpoint_paths() {
        assert_eq!(users_endpoint("All Cities"), "/User/all");
        assert_eq!(users_endpoint("Damascus"), "/User/city/Damascus");
    }

    /// Tests the mutation endpoint paths used by the views
    #[test]
    fn test_mutation_endpoints() {
        let id = 42;
        assert_eq!(format!("/posts/{id}"), "/posts/42");
        assert_eq!(
            format!("/balance/admin/approve/{id}"),
            "/balance/admin/approve/42"
        );
        assert_eq!(
            format!("/balance/admin/reject/{id}"),
            "/balance/admin/reject/42"
        );
        assert_eq!(
            format!("/categories/soft-delete/{id}"),
            "/categories/soft-delete/42"
        );

        let user_id = "u-7";
        assert_eq!(format!("/User/ban?userid={user_id}"), "/User/ban?userid=u-7");
        assert_eq!(format!("/unban?userid={user_id}"), "/unban?userid=u-7");
    }
}
