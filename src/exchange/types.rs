//! Types for the exchange endpoints.

use std::collections::HashMap;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::types::{
    ExchangeCategory, ExchangeSort, FeeType, Interval, ListingStatus, MarketType, PairCategory,
    Quote, SortDirection,
};

/// Basic exchange mapping information.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeMap {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub is_active: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub first_historical_data: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_historical_data: Option<OffsetDateTime>,
}

/// Detailed metadata about an exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_launched: Option<OffsetDateTime>,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub fiats: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "type")]
    pub exchange_type: Option<String>,
    #[serde(default)]
    pub is_hidden: Option<i64>,
    #[serde(default)]
    pub is_distributed: Option<i64>,
    #[serde(default)]
    pub maker_fee: Option<f64>,
    #[serde(default)]
    pub taker_fee: Option<f64>,
    #[serde(default)]
    pub weekly_visits: Option<i64>,
    #[serde(default)]
    pub spot_volume_usd: Option<f64>,
    #[serde(default)]
    pub spot_volume_rank: Option<i64>,
    #[serde(default)]
    pub urls: HashMap<String, Vec<String>>,
}

/// An exchange with market data as returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeListing {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub num_coins: Option<i64>,
    #[serde(default)]
    pub num_cryptocurrencies: Option<i64>,
    #[serde(default)]
    pub num_fiats: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_launched: Option<OffsetDateTime>,
    #[serde(default)]
    pub fiats: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "type")]
    pub exchange_type: Option<String>,
    #[serde(default)]
    pub exchange_score: Option<f64>,
    #[serde(default)]
    pub derivatives: Option<f64>,
    #[serde(default)]
    pub weekly_visits: Option<i64>,
    #[serde(default)]
    pub spot_volume_usd: Option<f64>,
    #[serde(default)]
    pub derivatives_volume_usd: Option<f64>,
    #[serde(default)]
    pub volume_24h_reported: Option<f64>,
    #[serde(default)]
    pub volume_24h_adjusted: Option<f64>,
    #[serde(default)]
    pub volume_7d_reported: Option<f64>,
    #[serde(default)]
    pub volume_30d_reported: Option<f64>,
    #[serde(default)]
    pub percent_change_volume_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_volume_7d: Option<f64>,
    #[serde(default)]
    pub percent_change_volume_30d: Option<f64>,
    #[serde(default)]
    pub traffic_score: Option<f64>,
    #[serde(default)]
    pub liquidity_score: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Current aggregate market data for an exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeQuote {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub num_market_pairs: Option<i64>,
    #[serde(default)]
    pub volume_24h_reported: Option<f64>,
    #[serde(default)]
    pub volume_24h_adjusted: Option<f64>,
    #[serde(default)]
    pub volume_7d_reported: Option<f64>,
    #[serde(default)]
    pub volume_30d_reported: Option<f64>,
    #[serde(default)]
    pub percent_change_volume_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_volume_7d: Option<f64>,
    #[serde(default)]
    pub percent_change_volume_30d: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Options for the exchange ID map endpoint.
#[derive(Debug, Clone, Default)]
pub struct ExchangeMapOptions {
    pub listing_status: Option<ListingStatus>,
    pub slug: Vec<String>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<ExchangeSort>,
    pub aux: Vec<String>,
    pub crypto_id: Vec<i64>,
}

/// Options for the exchange metadata endpoint.
#[derive(Debug, Clone, Default)]
pub struct ExchangeInfoOptions {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub aux: Vec<String>,
}

/// Options for the exchange listings endpoint.
#[derive(Debug, Clone, Default)]
pub struct ExchangeListingsOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<ExchangeSort>,
    pub sort_dir: Option<SortDirection>,
    pub market_type: Option<MarketType>,
    pub category: Option<ExchangeCategory>,
    pub aux: Vec<String>,
    pub convert: Vec<String>,
}

/// Options for the latest exchange quotes endpoint.
#[derive(Debug, Clone, Default)]
pub struct ExchangeQuotesOptions {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub convert: Vec<String>,
    pub aux: Vec<String>,
}

/// Options for the historical exchange quotes endpoint.
#[derive(Debug, Clone, Default)]
pub struct ExchangeQuotesHistoricalOptions {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub time_start: Option<OffsetDateTime>,
    pub time_end: Option<OffsetDateTime>,
    pub count: Option<i64>,
    pub interval: Option<Interval>,
    pub convert: Vec<String>,
    pub aux: Vec<String>,
}

/// Options for the exchange market pairs endpoint.
#[derive(Debug, Clone, Default)]
pub struct ExchangeMarketPairsOptions {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub aux: Vec<String>,
    pub matched_id: Vec<i64>,
    pub matched_symbol: Vec<String>,
    pub category: Option<PairCategory>,
    pub fee_type: Option<FeeType>,
    pub convert: Vec<String>,
}
