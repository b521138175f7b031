use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cities the user list can be narrowed to.
pub const CITIES: &[&str] = &[
    "Aleppo",
    "Damascus",
    "Homs",
    "Lattakia",
    "Tartous",
    "Hama",
    "Idlib",
    "Daraa",
    "Deir ez-Zor",
];

/// Sentinel option meaning no city narrowing (`GET /User/all`).
pub const ALL_CITIES: &str = "All Cities";

/// A platform account as listed by `/User/all` and `/User/city/{city}`.
///
/// The user endpoints are the least consistent in the API: the identifier
/// arrives under three different names as either a number or a string, and
/// the ban flag under two names plus an overloaded `status`. The raw
/// fields stay private and the accessors normalize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(default, alias = "userId", alias = "idUser")]
    id: Option<Value>,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Account email, also the identifier of last resort.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: String,
    /// City of residence.
    #[serde(default)]
    pub city: String,
    /// Wallet balance.
    #[serde(default)]
    pub balance: f64,
    #[serde(default, rename = "isBanned", alias = "banned")]
    banned: bool,
    #[serde(default)]
    status: Option<Value>,
}

impl AdminUser {
    /// Stable identifier for ban/unban calls and processing markers.
    ///
    /// Prefers the backend id in any of its spellings, stringified when
    /// numeric, and falls back to the email.
    #[must_use]
    pub fn key(&self) -> String {
        match &self.id {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => self.email.clone(),
        }
    }

    /// Whether the account is currently banned, under any of the flag
    /// spellings the backend uses (`isBanned`, `banned`, `status`).
    #[must_use]
    pub fn is_banned(&self) -> bool {
        self.banned
            || matches!(&self.status, Some(Value::String(s)) if s == "Banned")
            || matches!(&self.status, Some(Value::Number(n)) if n.as_i64() == Some(1))
    }

    /// Display name: "First Last", falling back to the email, then to a
    /// placeholder for records with neither.
    #[must_use]
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if !name.is_empty() {
            name
        } else if !self.email.is_empty() {
            self.email.clone()
        } else {
            "Unknown User".to_string()
        }
    }

    /// Uppercased initials for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut initials: String = self
            .first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect();
        initials.make_ascii_uppercase();
        initials
    }

    /// Case-insensitive match over full name and email for the search box.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.full_name().to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }
}

/// Endpoint path for a user list, optionally narrowed to one city.
#[must_use]
pub fn users_endpoint(city: &str) -> String {
    if city == ALL_CITIES {
        "/User/all".to_string()
    } else {
        format!("/User/city/{city}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(value: Value) -> AdminUser {
        serde_json::from_value(value).unwrap()
    }

    /// Tests identifier normalization across the three spellings
    #[test]
    fn test_key_aliases() {
        assert_eq!(user(json!({ "id": "u-1" })).key(), "u-1");
        assert_eq!(user(json!({ "userId": 7 })).key(), "7");
        assert_eq!(user(json!({ "idUser": "abc" })).key(), "abc");
        assert_eq!(
            user(json!({ "email": "a@b.c" })).key(),
            "a@b.c",
            "email is the identifier of last resort"
        );
    }

    /// Tests the ban flag under every spelling
    #[test]
    fn test_is_banned_spellings() {
        assert!(user(json!({ "isBanned": true })).is_banned());
        assert!(user(json!({ "banned": true })).is_banned());
        assert!(user(json!({ "status": "Banned" })).is_banned());
        assert!(user(json!({ "status": 1 })).is_banned());
        assert!(!user(json!({ "status": "Active" })).is_banned());
        assert!(!user(json!({})).is_banned());
    }

    /// Tests display-name fallbacks
    #[test]
    fn test_full_name_fallbacks() {
        assert_eq!(
            user(json!({ "firstName": "Sami", "lastName": "Haddad" })).full_name(),
            "Sami Haddad"
        );
        assert_eq!(user(json!({ "email": "s@h.sy" })).full_name(), "s@h.sy");
        assert_eq!(user(json!({})).full_name(), "Unknown User");
    }

    /// Tests search over name and email
    #[test]
    fn test_matches() {
        let u = user(json!({ "firstName": "Sami", "lastName": "Haddad", "email": "sami@medan.sy" }));
        assert!(u.matches("haddad"));
        assert!(u.matches("MEDAN"));
        assert!(!u.matches("xyz"));
    }

    /// Tests city narrowing endpoint selection
    #[test]
    fn test_users_endpoint() {
        assert_eq!(users_endpoint(ALL_CITIES), "/User/all");
        assert_eq!(users_endpoint("Homs"), "/User/city/Homs");
    }

    /// Tests initials for the avatar badge
    #[test]
    fn test_initials() {
        let u = user(json!({ "firstName": "sami", "lastName": "haddad" }));
        assert_eq!(u.initials(), "SH");
        assert_eq!(user(json!({})).initials(), "");
    }
}
