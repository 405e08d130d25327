//! Types for the cryptocurrency endpoints.

use std::collections::HashMap;

use serde::Deserialize;
use time::OffsetDateTime;

use crate::types::{
    AirdropStatus, ContractAddress, CryptocurrencyType, FeeType, Interval, ListingSort,
    ListingStatus, PairCategory, Platform, Quote, SortDirection, TimePeriod,
};

/// Basic cryptocurrency mapping information.
#[derive(Debug, Clone, Deserialize)]
pub struct CryptocurrencyMap {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    #[serde(default)]
    pub is_active: Option<i64>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub first_historical_data: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_historical_data: Option<OffsetDateTime>,
    #[serde(default)]
    pub platform: Option<Platform>,
}

/// Detailed metadata about a cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct CryptocurrencyInfo {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "tag-names")]
    pub tag_names: Vec<String>,
    #[serde(default, rename = "tag-groups")]
    pub tag_groups: Vec<String>,
    #[serde(default)]
    pub urls: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_added: OffsetDateTime,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub is_hidden: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_launched: Option<OffsetDateTime>,
    #[serde(default)]
    pub contract_address: Vec<ContractAddress>,
    #[serde(default)]
    pub self_reported_circulating_supply: Option<f64>,
    #[serde(default)]
    pub self_reported_tags: Vec<String>,
    #[serde(default)]
    pub self_reported_market_cap: Option<f64>,
    #[serde(default)]
    pub infinite_supply: Option<bool>,
}

/// A cryptocurrency with market data as returned by listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CryptocurrencyListing {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    #[serde(default)]
    pub num_market_pairs: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_added: OffsetDateTime,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub infinite_supply: Option<bool>,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub cmc_rank: Option<i64>,
    #[serde(default)]
    pub self_reported_circulating_supply: Option<f64>,
    #[serde(default)]
    pub self_reported_market_cap: Option<f64>,
    #[serde(default)]
    pub tvl_ratio: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Current market data for a cryptocurrency.
#[derive(Debug, Clone, Deserialize)]
pub struct CryptocurrencyQuote {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    #[serde(default)]
    pub is_active: Option<i64>,
    #[serde(default)]
    pub is_fiat: Option<i64>,
    #[serde(default)]
    pub num_market_pairs: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_added: OffsetDateTime,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub infinite_supply: Option<bool>,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub cmc_rank: Option<i64>,
    #[serde(default)]
    pub self_reported_circulating_supply: Option<f64>,
    #[serde(default)]
    pub self_reported_market_cap: Option<f64>,
    #[serde(default)]
    pub tvl_ratio: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Historical price data at a specific timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalQuote {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
    #[serde(default)]
    pub search_interval: Option<String>,
}

/// A trading pair on an exchange with market data.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPair {
    pub exchange_id: i64,
    pub exchange_name: String,
    pub exchange_slug: String,
    #[serde(default)]
    pub exchange_notice: Option<String>,
    pub market_id: i64,
    pub market_pair: String,
    pub market_pair_base: MarketPairCurrency,
    pub market_pair_quote: MarketPairCurrency,
    #[serde(default)]
    pub market_url: Option<String>,
    #[serde(default)]
    pub market_score: Option<f64>,
    #[serde(default)]
    pub market_reputation: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub fee_type: String,
    #[serde(default)]
    pub outlier_detected: Option<i64>,
    #[serde(default)]
    pub excluded_volume: Option<f64>,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

/// Currency information within a market pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPairCurrency {
    pub currency_id: i64,
    pub currency_name: String,
    pub currency_symbol: String,
    pub currency_slug: String,
    #[serde(default)]
    pub exchange_symbol: String,
}

/// Open, high, low, close and volume data for a period.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ohlcv {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time_open: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time_close: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time_high: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time_low: Option<OffsetDateTime>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// ROI performance for several time windows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricePerformanceStats {
    #[serde(default)]
    pub roi: HashMap<String, PerformancePeriod>,
}

/// Performance metrics for one time window.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformancePeriod {
    pub period: String,
    #[serde(default)]
    pub open_price: Option<f64>,
    #[serde(default)]
    pub high_price: Option<f64>,
    #[serde(default)]
    pub low_price: Option<f64>,
    #[serde(default)]
    pub close_price: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub open_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub high_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub low_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub close_time: Option<OffsetDateTime>,
}

/// A coin category with aggregate statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub num_tokens: i64,
    #[serde(default)]
    pub avg_price_change: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_change: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub volume_change: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

/// A coin category together with its coin listings.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub coins: Vec<CryptocurrencyListing>,
}

/// An airdrop event.
#[derive(Debug, Clone, Deserialize)]
pub struct Airdrop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_added: OffsetDateTime,
    pub status: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_start: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_end: Option<OffsetDateTime>,
    pub cryptocurrency_id: i64,
    pub symbol: String,
    pub slug: String,
}

/// Trending cryptocurrency data.
#[derive(Debug, Clone, Deserialize)]
pub struct Trending {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
    #[serde(default)]
    pub cmc_rank: Option<i64>,
    #[serde(default)]
    pub search_score: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Options for the cryptocurrency ID map endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyMapOptions {
    pub listing_status: Option<ListingStatus>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub symbol: Vec<String>,
    pub aux: Vec<String>,
}

/// Options for the cryptocurrency metadata endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyInfoOptions {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    pub address: Vec<String>,
    pub aux: Vec<String>,
}

/// Options for the latest and historical listing endpoints.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyListingsOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub market_cap_min: Option<f64>,
    pub market_cap_max: Option<f64>,
    pub volume_24h_min: Option<f64>,
    pub volume_24h_max: Option<f64>,
    pub circulating_supply_min: Option<f64>,
    pub circulating_supply_max: Option<f64>,
    pub percent_change_24h_min: Option<f64>,
    pub percent_change_24h_max: Option<f64>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
    pub sort: Option<ListingSort>,
    pub sort_dir: Option<SortDirection>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    pub tag: Option<String>,
    pub aux: Vec<String>,
}

/// Options for the historical listings endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyListingsHistoricalOptions {
    /// Date to list by, formatted as `YYYY-MM-DD`.
    pub date: String,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub market_cap_min: Option<f64>,
    pub market_cap_max: Option<f64>,
    pub volume_24h_min: Option<f64>,
    pub volume_24h_max: Option<f64>,
    pub circulating_supply_min: Option<f64>,
    pub circulating_supply_max: Option<f64>,
    pub percent_change_24h_min: Option<f64>,
    pub percent_change_24h_max: Option<f64>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
    pub sort: Option<ListingSort>,
    pub sort_dir: Option<SortDirection>,
    pub cryptocurrency_type: Option<CryptocurrencyType>,
    pub tag: Option<String>,
    pub aux: Vec<String>,
}

/// Options for the new listings endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyListingsNewOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
    pub sort_dir: Option<SortDirection>,
}

/// Options for the latest quotes endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyQuotesOptions {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
    pub aux: Vec<String>,
    pub skip_invalid: Option<bool>,
}

/// Options for the historical quotes endpoints.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyQuotesHistoricalOptions {
    pub id: Vec<i64>,
    pub symbol: Vec<String>,
    pub time_start: Option<OffsetDateTime>,
    pub time_end: Option<OffsetDateTime>,
    pub count: Option<i64>,
    pub interval: Option<Interval>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
    pub aux: Vec<String>,
}

/// Options for the market pairs endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyMarketPairsOptions {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub aux: Vec<String>,
    pub matched_id: Vec<i64>,
    pub matched_symbol: Vec<String>,
    pub category: Option<PairCategory>,
    pub fee_type: Option<FeeType>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
}

/// Options for the latest OHLCV endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyOhlcvOptions {
    pub id: Vec<i64>,
    pub symbol: Vec<String>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
    pub skip_invalid: Option<bool>,
}

/// Options for the historical OHLCV endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyOhlcvHistoricalOptions {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    pub time_period: Option<String>,
    pub time_start: Option<OffsetDateTime>,
    pub time_end: Option<OffsetDateTime>,
    pub count: Option<i64>,
    pub interval: Option<Interval>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
}

/// Options for the price performance statistics endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyPricePerformanceStatsOptions {
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
    pub time_period: Option<TimePeriod>,
    pub convert: Vec<String>,
    pub convert_id: Vec<i64>,
}

/// Options for the categories endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyCategoriesOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub id: Vec<i64>,
    pub slug: Vec<String>,
    pub symbol: Vec<String>,
}

/// Options for the single category endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyCategoryOptions {
    pub id: String,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub convert: Vec<String>,
}

/// Options for the airdrops endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyAirdropsOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<AirdropStatus>,
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub symbol: Option<String>,
}

/// Options for the trending endpoints.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyTrendingOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub time_period: Option<TimePeriod>,
    pub convert: Vec<String>,
}

/// Options for the gainers and losers endpoint.
#[derive(Debug, Clone, Default)]
pub struct CryptocurrencyGainersLosersOptions {
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub time_period: Option<TimePeriod>,
    pub convert: Vec<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<SortDirection>,
}
