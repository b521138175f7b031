//! Tests for the routing system
//!
//! Validates route paths, sidebar ordering, and the titles rendered in
//! the header.

#[cfg(test)]
mod tests {
    use crate::routes::Route;
    use yew_router::Routable;

    /// Tests route path definitions
    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Posts.to_path(), "/posts");
        assert_eq!(Route::Reports.to_path(), "/reports");
        assert_eq!(Route::Users.to_path(), "/users");
        assert_eq!(Route::Recharges.to_path(), "/recharges");
        assert_eq!(Route::Categories.to_path(), "/categories");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    /// Tests path recognition including the not-found fallback
    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/recharges"), Some(Route::Recharges));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    /// Tests that the sidebar lists the six management views and nothing else
    #[test]
    fn test_nav_routes() {
        let nav = Route::nav_routes();
        assert_eq!(
            nav,
            vec![
                Route::Dashboard,
                Route::Posts,
                Route::Reports,
                Route::Users,
                Route::Recharges,
                Route::Categories,
            ]
        );
        assert!(!nav.contains(&Route::Login));
        assert!(!nav.contains(&Route::NotFound));
    }

    /// Tests header titles
    #[test]
    fn test_route_titles() {
        assert_eq!(Route::Dashboard.title(), "Dashboard");
        assert_eq!(Route::Recharges.title(), "Recharges");
        assert_eq!(Route::NotFound.title(), "Not Found");
    }
}
