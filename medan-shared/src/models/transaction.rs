use serde::{Deserialize, Serialize};

/// Display classification of a recharge transaction.
///
/// Derived from the backend's integer status code by [`Self::classify`].
/// Only [`Self::Pending`] rows expose approve/reject controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RechargeStatus {
    /// Awaiting staff review (codes 0 and 1).
    Pending,
    /// Approved, balance credited (code 2).
    Accepted,
    /// Declined (code 3).
    Rejected,
    /// Any status code the console does not recognize.
    Unknown,
}

impl RechargeStatus {
    /// Classifies a backend status code.
    ///
    /// The backend overloads codes 0 and 1; a code-1 row with a zero
    /// amount is checked first but lands on the same label, and the rule
    /// is reproduced as-is without inferring further intent.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact zero is the documented wire value
    pub fn classify(status: i32, amount: f64) -> Self {
        if status == 1 && amount == 0.0 {
            return Self::Pending;
        }
        match status {
            0 | 1 => Self::Pending,
            2 => Self::Accepted,
            3 => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    /// Label rendered in the status column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the row should expose approve/reject controls.
    #[must_use]
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}

impl std::fmt::Display for RechargeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Owner of a recharge transaction, embedded in the transaction record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUser {
    /// Backend identifier.
    #[serde(default)]
    pub id: i64,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// Wallet balance at the time of listing.
    #[serde(default)]
    pub balance: f64,
}

impl TransactionUser {
    /// Display name for the transaction row.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A balance recharge request as listed by `/balance/admin/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Backend identifier.
    pub id: i64,
    /// Human-facing transaction number, usually UUID-shaped.
    #[serde(default)]
    pub transaction_number: String,
    /// Requested amount.
    #[serde(default)]
    pub amount: f64,
    /// Raw backend status code, see [`RechargeStatus::classify`].
    #[serde(default)]
    pub status: i32,
    /// Owning account; the backend occasionally omits it.
    #[serde(default)]
    pub users: Option<TransactionUser>,
    /// Uploaded receipt image, when one exists.
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Payload for `POST /balance/admin/approve/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApproveRechargeRequest {
    /// Amount to credit to the user's balance.
    pub amount: f64,
}

impl Transaction {
    /// Display classification of this row.
    #[must_use]
    pub fn recharge_status(&self) -> RechargeStatus {
        RechargeStatus::classify(self.status, self.amount)
    }

    /// Leading segment of the transaction number, enough for a table cell.
    #[must_use]
    pub fn short_number(&self) -> &str {
        self.transaction_number
            .split('-')
            .next()
            .unwrap_or(&self.transaction_number)
    }

    /// Case-insensitive match over owner name, email, and transaction
    /// number for the search box.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let owner_match = self.users.as_ref().is_some_and(|user| {
            user.full_name().to_lowercase().contains(&query)
                || user.email.to_lowercase().contains(&query)
        });
        owner_match || self.transaction_number.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests the status mapping is total and deterministic
    #[test]
    fn test_classify_mapping() {
        assert_eq!(RechargeStatus::classify(0, 500.0), RechargeStatus::Pending);
        assert_eq!(RechargeStatus::classify(1, 500.0), RechargeStatus::Pending);
        assert_eq!(RechargeStatus::classify(2, 500.0), RechargeStatus::Accepted);
        assert_eq!(RechargeStatus::classify(3, 500.0), RechargeStatus::Rejected);
        assert_eq!(RechargeStatus::classify(-1, 500.0), RechargeStatus::Unknown);
        assert_eq!(RechargeStatus::classify(4, 500.0), RechargeStatus::Unknown);
        assert_eq!(RechargeStatus::classify(99, 0.0), RechargeStatus::Unknown);
    }

    /// Tests the code-1 zero-amount rule lands on the same Pending label
    #[test]
    fn test_classify_code_one_zero_amount() {
        assert_eq!(RechargeStatus::classify(1, 0.0), RechargeStatus::Pending);
        assert_eq!(
            RechargeStatus::classify(1, 0.0),
            RechargeStatus::classify(1, 250.0),
            "the special case is idempotent with the plain code-1 rule"
        );
    }

    /// Tests that only Pending rows expose controls
    #[test]
    fn test_is_pending() {
        assert!(RechargeStatus::Pending.is_pending());
        assert!(!RechargeStatus::Accepted.is_pending());
        assert!(!RechargeStatus::Rejected.is_pending());
        assert!(!RechargeStatus::Unknown.is_pending());
    }

    /// Tests the wire shape including a missing owner
    #[test]
    fn test_transaction_wire_shape() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": 9,
            "transactionNumber": "7f3a1c22-9d10-4b8e-a1f2-aaaa0000bbbb",
            "amount": 0,
            "status": 1,
            "users": { "id": 4, "firstName": "Rana", "lastName": "Saleh", "email": "rana@medan.sy", "balance": 120.0 }
        }))
        .unwrap();

        assert_eq!(tx.recharge_status(), RechargeStatus::Pending);
        assert_eq!(tx.short_number(), "7f3a1c22");

        let orphan: Transaction = serde_json::from_value(json!({ "id": 10 })).unwrap();
        assert!(orphan.users.is_none());
        assert!(!orphan.matches("rana"));
    }

    /// Tests the approve payload wire shape
    #[test]
    fn test_approve_request_shape() {
        let payload = ApproveRechargeRequest { amount: 1500.0 };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "amount": 1500.0 })
        );
    }

    /// Tests search over owner and transaction number
    #[test]
    fn test_transaction_matches() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": 9,
            "transactionNumber": "ABC-123",
            "users": { "firstName": "Rana", "lastName": "Saleh", "email": "rana@medan.sy" }
        }))
        .unwrap();

        assert!(tx.matches("rana saleh"));
        assert!(tx.matches("abc-123"));
        assert!(tx.matches("medan.sy"));
        assert!(!tx.matches("nope"));
    }
}
