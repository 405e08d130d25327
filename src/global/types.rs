//! Types for the global metrics, tools and content endpoints.

use std::collections::HashMap;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::types::{Interval, Quote, TimePeriod};

/// Aggregate market metrics across all of CoinMarketCap.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalMetrics {
    #[serde(default)]
    pub btc_dominance: Option<f64>,
    #[serde(default)]
    pub eth_dominance: Option<f64>,
    #[serde(default)]
    pub icp_dominance: Option<f64>,
    #[serde(default)]
    pub active_cryptocurrencies: Option<i64>,
    #[serde(default)]
    pub total_cryptocurrencies: Option<i64>,
    #[serde(default)]
    pub active_exchanges: Option<i64>,
    #[serde(default)]
    pub total_exchanges: Option<i64>,
    #[serde(default)]
    pub active_market_pairs: Option<i64>,
    #[serde(default)]
    pub total_market_pairs: Option<i64>,
    #[serde(default)]
    pub defi_market_cap: Option<f64>,
    #[serde(default)]
    pub defi_market_cap_dominance: Option<f64>,
    #[serde(default)]
    pub defi_24h_percentage_change: Option<f64>,
    #[serde(default)]
    pub stablecoin_market_cap: Option<f64>,
    #[serde(default)]
    pub stablecoin_market_cap_dominance: Option<f64>,
    #[serde(default)]
    pub stablecoin_24h_percentage_change: Option<f64>,
    #[serde(default)]
    pub derivatives_market_cap: Option<f64>,
    #[serde(default)]
    pub derivatives_market_cap_dominance: Option<f64>,
    #[serde(default)]
    pub derivatives_24h_percentage_change: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// A fiat currency CoinMarketCap supports for conversions.
#[derive(Debug, Clone, Deserialize)]
pub struct FiatMap {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sign: String,
    pub symbol: String,
}

/// The result of a price conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceConversion {
    pub symbol: String,
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, ConversionQuote>,
}

/// A converted price in one target currency.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionQuote {
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

/// On-chain statistics for a blockchain.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockchainStats {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub total_supply: String,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub correlation_pearson: Option<f64>,
    #[serde(default)]
    pub count_24h_interval: Option<i64>,
    #[serde(default)]
    pub count_30d_interval: Option<i64>,
    #[serde(default)]
    pub count_ytd_interval: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub first_block_timestamp: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub first_priced_timestamp: OffsetDateTime,
    #[serde(default)]
    pub hash_algorithm: Option<String>,
    #[serde(default)]
    pub hashrate_ema: Option<String>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub inflation_rate: Option<f64>,
    #[serde(default)]
    pub issue_rate: Option<f64>,
    #[serde(default)]
    pub last_block_height: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_block_timestamp: OffsetDateTime,
    #[serde(default)]
    pub last_known_hashrate: Option<String>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub mean_block_time: Option<i64>,
    #[serde(default)]
    pub mean_tx_fee: Option<f64>,
    #[serde(default)]
    pub mean_tx_value: Option<f64>,
    #[serde(default)]
    pub median_tx_fee: Option<f64>,
    #[serde(default)]
    pub median_tx_value: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_halving_date: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_difficulty_retarget: Option<OffsetDateTime>,
    #[serde(default)]
    pub pending_transactions: Option<i64>,
    #[serde(default)]
    pub rewards_ema: Option<String>,
    #[serde(default)]
    pub sum_24h_fees: Option<f64>,
    #[serde(default)]
    pub sum_24h_rewards: Option<f64>,
    #[serde(default)]
    pub sum_24h_transaction_count: Option<i64>,
    #[serde(default)]
    pub sum_24h_tx_volume: Option<String>,
}

/// Plan details and usage statistics for the active API key.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyInfo {
    pub plan: KeyPlan,
    pub usage: KeyUsage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyPlan {
    pub name: String,
    pub credit_limit_daily: i64,
    #[serde(default)]
    pub credit_limit_daily_reset: String,
    #[serde(with = "time::serde::rfc3339")]
    pub credit_limit_daily_reset_timestamp: OffsetDateTime,
    pub credit_limit_monthly: i64,
    #[serde(default)]
    pub credit_limit_monthly_reset: String,
    #[serde(with = "time::serde::rfc3339")]
    pub credit_limit_monthly_reset_timestamp: OffsetDateTime,
    pub rate_limit_minute: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyUsage {
    pub current_minute: KeyUsageMinute,
    pub current_day: KeyUsageCredits,
    pub current_month: KeyUsageCredits,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyUsageMinute {
    pub requests_left: i64,
    pub requests_made: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyUsageCredits {
    pub credits_left: i64,
    pub credits_used: i64,
}

/// Options for the latest global metrics endpoint.
#[derive(Debug, Clone, Default)]
pub struct GlobalMetricsOptions {
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
}

/// Options for the historical global metrics endpoint.
#[derive(Debug, Clone, Default)]
pub struct GlobalMetricsHistoricalOptions {
    pub time_start: Option<OffsetDateTime>,
    pub time_end: Option<OffsetDateTime>,
    pub count: Option<i64>,
    pub interval: Option<Interval>,
    pub convert: Vec<String>,
    pub aux: Vec<String>,
}

/// Options for the fiat currency map endpoint.
#[derive(Debug, Clone, Default)]
pub struct FiatMapOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub include_metals: Option<bool>,
}

/// Options for the price conversion endpoint.
#[derive(Debug, Clone, Default)]
pub struct PriceConversionOptions {
    pub amount: f64,
    pub id: Option<i64>,
    pub symbol: Option<String>,
    pub time: Option<OffsetDateTime>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
}

/// Options for the blockchain statistics endpoint.
#[derive(Debug, Clone, Default)]
pub struct BlockchainStatsOptions {
    pub id: Vec<i64>,
    pub symbol: Vec<String>,
    pub slug: Vec<String>,
}

/// Options for the latest content endpoint.
#[derive(Debug, Clone, Default)]
pub struct ContentLatestOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub cryptocurrency_id: Option<i64>,
    pub language: Option<String>,
    pub sort: Option<String>,
}

/// Options for the top and latest community post endpoints.
#[derive(Debug, Clone, Default)]
pub struct ContentPostsOptions {
    pub time_period: Option<TimePeriod>,
    pub cryptocurrency_id: Option<i64>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

/// Options for the post comments endpoint.
#[derive(Debug, Clone, Default)]
pub struct ContentCommentsOptions {
    pub post_id: String,
    pub start: Option<i64>,
    pub limit: Option<i64>,
}

/// Options for the community trending endpoints.
#[derive(Debug, Clone, Default)]
pub struct CommunityTrendingOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub time_period: Option<TimePeriod>,
}

/// Options for the historical CMC 100 index endpoint.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    pub time_start: Option<OffsetDateTime>,
    pub time_end: Option<OffsetDateTime>,
    pub count: Option<i64>,
    pub interval: Option<String>,
}

/// Options for the historical fear and greed endpoint.
#[derive(Debug, Clone, Default)]
pub struct FearAndGreedHistoricalOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
}
