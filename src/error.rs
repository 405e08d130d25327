//! Error types for the CoinMarketCap client library.

use serde::Deserialize;
use thiserror::Error;

use crate::types::Status;

/// The main error type for all CoinMarketCap client operations.
#[derive(Error, Debug)]
pub enum CmcError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Transport failure that persisted through the retry budget
    #[error("request failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Total number of attempts made (initial attempt plus retries)
        attempts: u32,
        /// The last transport error observed
        #[source]
        source: reqwest_middleware::Error,
    },

    /// CoinMarketCap API returned an error
    #[error("CoinMarketCap API error: {0}")]
    Api(ApiError),

    /// Invalid response from the API (malformed or mismatched JSON)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid header name or value supplied by the caller
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// An error reported by the CoinMarketCap API itself.
///
/// Constructed either from a non-2xx HTTP response (parsing the `status`
/// block of the body when one is present) or from a 2xx response whose
/// envelope carries a non-zero `error_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// CoinMarketCap error code from the status block (0 when the failure
    /// was purely HTTP-level).
    pub error_code: i64,
    /// Human-readable error message.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.error_code != 0 {
            write!(
                f,
                "API error {} (HTTP {}): {}",
                self.error_code, self.status_code, self.message
            )
        } else {
            write!(f, "HTTP error {}: {}", self.status_code, self.message)
        }
    }
}

impl ApiError {
    /// Create a new API error from its parts.
    pub fn new(status_code: u16, error_code: i64, message: impl Into<String>) -> Self {
        Self {
            status_code,
            error_code,
            message: message.into(),
        }
    }

    /// Build an API error from a non-2xx response body.
    ///
    /// The body is expected to carry the standard `{"status": {...}}` block;
    /// when it does, the error code and message are lifted from it, otherwise
    /// the raw body text is kept as the message.
    pub(crate) fn from_error_body(status_code: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorEnvelope {
            status: Status,
        }

        let mut error = Self::new(status_code, 0, body);
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            error.error_code = envelope.status.error_code;
            if let Some(message) = envelope.status.error_message {
                error.message = message;
            }
        }
        error
    }

    /// Check if this error is due to rate limiting.
    pub fn is_rate_limit(&self) -> bool {
        self.status_code == 429
            || matches!(
                self.error_code,
                error_codes::PLAN_MINUTE_RATE_LIMIT_REACHED
                    | error_codes::PLAN_DAILY_RATE_LIMIT_REACHED
                    | error_codes::PLAN_MONTHLY_RATE_LIMIT_REACHED
                    | error_codes::IP_RATE_LIMIT_REACHED
            )
    }

    /// Check if this error is due to authentication issues.
    pub fn is_auth_error(&self) -> bool {
        self.status_code == 401
            || matches!(
                self.error_code,
                error_codes::API_KEY_INVALID
                    | error_codes::API_KEY_MISSING
                    | error_codes::API_KEY_REQUIRED
                    | error_codes::API_KEY_DISABLED
            )
    }

    /// Check if this error requires payment or a plan upgrade.
    pub fn is_payment_required(&self) -> bool {
        self.status_code == 402
            || matches!(
                self.error_code,
                error_codes::PLAN_REQUIRES_PAYMENT | error_codes::PLAN_PAYMENT_EXPIRED
            )
    }
}

/// Known CoinMarketCap error codes carried in the `status.error_code` field.
pub mod error_codes {
    /// The API key supplied is invalid.
    pub const API_KEY_INVALID: i64 = 1001;
    /// No API key was supplied.
    pub const API_KEY_MISSING: i64 = 1002;
    /// The plan requires payment before use.
    pub const PLAN_REQUIRES_PAYMENT: i64 = 1003;
    /// The plan's payment has expired.
    pub const PLAN_PAYMENT_EXPIRED: i64 = 1004;
    /// An API key is required for this endpoint.
    pub const API_KEY_REQUIRED: i64 = 1005;
    /// The plan is not authorized for this endpoint.
    pub const PLAN_NOT_AUTHORIZED: i64 = 1006;
    /// The API key has been disabled.
    pub const API_KEY_DISABLED: i64 = 1007;
    /// Minute rate limit of the plan was reached.
    pub const PLAN_MINUTE_RATE_LIMIT_REACHED: i64 = 1008;
    /// Daily rate limit of the plan was reached.
    pub const PLAN_DAILY_RATE_LIMIT_REACHED: i64 = 1009;
    /// Monthly rate limit of the plan was reached.
    pub const PLAN_MONTHLY_RATE_LIMIT_REACHED: i64 = 1010;
    /// IP address rate limit was reached.
    pub const IP_RATE_LIMIT_REACHED: i64 = 1011;
}
