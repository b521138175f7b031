mod categories;
mod dashboard;
pub mod login;
mod posts;
mod recharges;
mod reports;
mod users;

pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use posts::PostsPage;
pub use recharges::RechargesPage;
pub use reports::ReportsPage;
pub use users::UsersPage;

/// Blocking alert for write failures; reads leave inline errors instead.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
