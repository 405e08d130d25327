//! Shared types for CoinMarketCap API responses.

mod common;

pub use common::*;

use serde::Deserialize;
use time::OffsetDateTime;

/// The standard response envelope returned by every CoinMarketCap endpoint.
///
/// The payload shape varies per endpoint and is captured in the type
/// parameter `T`; the `status` block is always present.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Endpoint-specific payload.
    pub data: T,
    /// Response metadata, error information and credit usage.
    pub status: Status,
}

/// Metadata block attached to every API response.
///
/// Every field is defaulted so the partial status blocks found in error
/// bodies still decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    /// Server timestamp of the response.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    /// Vendor error code; 0 means success.
    #[serde(default)]
    pub error_code: i64,
    /// Human-readable error message, absent on success.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Server-side processing time in milliseconds.
    #[serde(default)]
    pub elapsed: i64,
    /// API credits consumed by the call.
    #[serde(default)]
    pub credit_count: i64,
}

/// Price and market data for a cryptocurrency in one convert currency.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub volume_change_24h: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub percent_change_30d: Option<f64>,
    pub percent_change_60d: Option<f64>,
    pub percent_change_90d: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_dominance: Option<f64>,
    pub fully_diluted_market_cap: Option<f64>,
    pub tvl: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_updated: Option<OffsetDateTime>,
}

/// Blockchain platform information for tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub token_address: String,
}

/// A smart contract address and the platform it lives on.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractAddress {
    pub contract_address: String,
    pub platform: Platform,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_envelope_round_trip() {
        let body = r#"{"data":{"test":"value"},"status":{"error_code":0}}"#;
        let response: ApiResponse<HashMap<String, String>> =
            serde_json::from_str(body).unwrap();
        assert_eq!(response.data["test"], "value");
        assert_eq!(response.status.error_code, 0);
        assert!(response.status.error_message.is_none());
    }

    #[test]
    fn test_status_decodes_full_block() {
        let body = r#"{
            "timestamp": "2024-01-15T12:30:00.000Z",
            "error_code": 0,
            "error_message": null,
            "elapsed": 10,
            "credit_count": 1
        }"#;
        let status: Status = serde_json::from_str(body).unwrap();
        assert!(status.timestamp.is_some());
        assert_eq!(status.elapsed, 10);
        assert_eq!(status.credit_count, 1);
    }

    #[test]
    fn test_quote_tolerates_nulls() {
        let body = r#"{"price":42000.5,"volume_24h":null}"#;
        let quote: Quote = serde_json::from_str(body).unwrap();
        assert_eq!(quote.price, Some(42000.5));
        assert!(quote.volume_24h.is_none());
        assert!(quote.last_updated.is_none());
    }
}
