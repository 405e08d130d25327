//! # CoinMarketCap Client
//!
//! An async Rust client library for the CoinMarketCap Pro REST API.
//!
//! ## Features
//!
//! - Typed wrappers for the cryptocurrency, exchange, global-metrics, tools
//!   and community endpoints
//! - Built-in token-bucket rate limiting (30 requests/minute by default)
//! - Automatic retries with linear backoff, honoring `Retry-After` on 429
//! - Transparent gzip response decompression
//! - Sandbox mode for testing against the CoinMarketCap sandbox API
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinmarketcap_api_client::Client;
//! use coinmarketcap_api_client::cryptocurrency::CryptocurrencyQuotesOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().api_key("my-api-key").build();
//!
//!     let options = CryptocurrencyQuotesOptions {
//!         symbol: vec!["BTC".to_string(), "ETH".to_string()],
//!         convert: vec!["USD".to_string()],
//!         ..Default::default()
//!     };
//!     let quotes = client.get_cryptocurrency_quotes_latest(Some(&options)).await?;
//!     println!("Used {} credits", quotes.status.credit_count);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod cryptocurrency;
pub mod endpoints;
pub mod error;
pub mod exchange;
pub mod global;
pub mod params;
pub mod rate_limit;
pub mod types;

// Re-export commonly used types at crate root
pub use client::{Client, ClientBuilder};
pub use error::{ApiError, CmcError};
pub use types::{ApiResponse, Status};

/// Result type alias using CmcError
pub type Result<T> = std::result::Result<T, CmcError>;
