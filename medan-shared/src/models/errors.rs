use thiserror::Error;

/// Failure taxonomy of the HTTP wrapper.
///
/// Every call into the backend resolves to one of three outcomes on
/// failure. Pages catch these at their boundary: read failures become an
/// inline message with a retry control, write failures become a blocking
/// alert. Nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401. Outside the sign-in call this also wipes
    /// the persisted credentials and forces navigation back to login.
    #[error("{0}")]
    Unauthorized(String),

    /// Any other non-2xx answer, carrying the backend's `message`/`error`
    /// body field or a formatted status line.
    #[error("{message}")]
    Backend {
        /// HTTP status code of the rejected request.
        status: u16,
        /// Human-readable message surfaced to the operator.
        message: String,
    },

    /// The request never produced a response (DNS, connection reset,
    /// aborted fetch). Logged at the wrapper and propagated unchanged.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// The HTTP status behind this error, when one exists.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Backend { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }

    /// Whether this failure is the 401 path.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the display form carries the operator-facing message
    #[test]
    fn test_display_uses_message() {
        let err = ApiError::Backend {
            status: 500,
            message: "Error: 500 Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Error: 500 Internal Server Error");

        let err = ApiError::Unauthorized("Unauthorized".to_string());
        assert_eq!(err.to_string(), "Unauthorized");
    }

    /// Tests status extraction per variant
    #[test]
    fn test_status() {
        assert_eq!(
            ApiError::Unauthorized("Unauthorized".to_string()).status(),
            Some(401)
        );
        assert_eq!(
            ApiError::Backend {
                status: 404,
                message: "missing".to_string()
            }
            .status(),
            Some(404)
        );
        assert_eq!(ApiError::Network("offline".to_string()).status(), None);
    }

    /// Tests the unauthorized predicate
    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::Unauthorized("no".to_string()).is_unauthorized());
        assert!(!ApiError::Network("down".to_string()).is_unauthorized());
    }
}
