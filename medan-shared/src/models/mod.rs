//! Wire models for the admin console.
//!
//! The backend is the source of truth for every record; the client never
//! validates relational integrity. Models here only normalize the handful
//! of shape quirks the API is known to exhibit (polymorphic ids, aliased
//! flags, collections nested under arbitrary keys).

pub mod auth;
pub mod body;
pub mod category;
pub mod errors;
pub mod post;
pub mod report;
pub mod transaction;
pub mod user;

pub use auth::{MIN_TOKEN_LEN, SignInRequest, extract_token};
pub use body::{error_message, extract_items, extract_list, extract_number, parse_body};
pub use category::{Category, CreateCategoryRequest};
pub use errors::ApiError;
pub use post::Post;
pub use report::Report;
pub use transaction::{ApproveRechargeRequest, RechargeStatus, Transaction, TransactionUser};
pub use user::{ALL_CITIES, AdminUser, CITIES, users_endpoint};

/// Formats a backend date string for display.
///
/// The API is inconsistent about date shapes (RFC 3339 with and without a
/// zone offset, bare dates). Anything unparseable is rendered as-is.
#[must_use]
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %d, %Y").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%b %d, %Y").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

/// Formats an amount with thousands separators for display.
///
/// `decimals` digits after the point; the integer part is grouped in
/// threes. Matches the `toLocaleString`-style rendering the console uses
/// for balances and revenue.
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.decimals$}", value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_number};

    /// Tests RFC 3339 timestamps with an offset
    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-01-15T10:30:00+00:00"), "Jan 15, 2024");
    }

    /// Tests zone-less timestamps as emitted by the posts endpoint
    #[test]
    fn test_format_date_naive_datetime() {
        assert_eq!(format_date("2024-01-15T10:30:00"), "Jan 15, 2024");
        assert_eq!(format_date("2024-01-15T10:30:00.123"), "Jan 15, 2024");
    }

    /// Tests bare dates
    #[test]
    fn test_format_date_bare() {
        assert_eq!(format_date("2024-01-01"), "Jan 01, 2024");
    }

    /// Tests that garbage passes through unchanged
    #[test]
    fn test_format_date_fallback() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    /// Tests thousands grouping and decimals
    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(950.0, 0), "950");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_number(12.5, 2), "12.50");
        assert_eq!(format_number(-1234.0, 0), "-1,234");
    }
}
