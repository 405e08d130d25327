//! Exchange endpoints.
//!
//! Covers the exchange ID map, metadata, listings, quotes, market pairs
//! and on-chain asset holdings.

mod types;

pub use types::*;

use std::collections::HashMap;

use crate::Result;
use crate::client::Client;
use crate::cryptocurrency::MarketPair;
use crate::endpoints;
use crate::params::ParamBuilder;
use crate::types::ApiResponse;

impl Client {
    /// Returns a mapping of all exchanges to their CoinMarketCap IDs.
    pub async fn get_exchange_map(
        &self,
        options: Option<&ExchangeMapOptions>,
    ) -> Result<ApiResponse<Vec<ExchangeMap>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add("listing_status", opts.listing_status.map(|s| s.as_str()))
                .add_str_slice("slug", &opts.slug)
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("sort", opts.sort.map(|s| s.as_str()))
                .add_str_slice("aux", &opts.aux)
                .add_int_slice("crypto_id", &opts.crypto_id);
        }
        self.get(endpoints::exchange::MAP, params).await
    }

    /// Returns static metadata for one or more exchanges, keyed by the
    /// identifier used in the request.
    pub async fn get_exchange_info(
        &self,
        options: Option<&ExchangeInfoOptions>,
    ) -> Result<ApiResponse<HashMap<String, ExchangeInfo>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::exchange::INFO, params).await
    }

    /// Returns a paginated list of all exchanges with latest aggregate
    /// market data.
    pub async fn get_exchange_listings_latest(
        &self,
        options: Option<&ExchangeListingsOptions>,
    ) -> Result<ApiResponse<Vec<ExchangeListing>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("sort", opts.sort.map(|s| s.as_str()))
                .add("sort_dir", opts.sort_dir.map(|s| s.as_str()))
                .add("market_type", opts.market_type.map(|m| m.as_str()))
                .add("category", opts.category.map(|c| c.as_str()))
                .add_str_slice("aux", &opts.aux)
                .add_str_slice("convert", &opts.convert);
        }
        self.get(endpoints::exchange::LISTINGS_LATEST, params).await
    }

    /// Returns the latest aggregate market quote for one or more exchanges,
    /// keyed by the identifier used in the request.
    pub async fn get_exchange_quotes_latest(
        &self,
        options: Option<&ExchangeQuotesOptions>,
    ) -> Result<ApiResponse<HashMap<String, ExchangeQuote>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_str_slice("convert", &opts.convert)
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::exchange::QUOTES_LATEST, params).await
    }

    /// Returns historical aggregate quotes for one or more exchanges over
    /// an interval of time.
    pub async fn get_exchange_quotes_historical(
        &self,
        options: Option<&ExchangeQuotesHistoricalOptions>,
    ) -> Result<ApiResponse<HashMap<String, Vec<crate::cryptocurrency::HistoricalQuote>>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_time("time_start", opts.time_start)
                .add_time("time_end", opts.time_end)
                .add_int("count", opts.count)
                .add("interval", opts.interval.map(|i| i.as_str()))
                .add_str_slice("convert", &opts.convert)
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::exchange::QUOTES_HISTORICAL, params)
            .await
    }

    /// Returns all active market pairs on a given exchange.
    pub async fn get_exchange_market_pairs_latest(
        &self,
        options: Option<&ExchangeMarketPairsOptions>,
    ) -> Result<ApiResponse<Vec<MarketPair>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("id", opts.id)
                .add("slug", opts.slug.as_deref())
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add_str_slice("aux", &opts.aux)
                .add_int_slice("matched_id", &opts.matched_id)
                .add_str_slice("matched_symbol", &opts.matched_symbol)
                .add("category", opts.category.map(|c| c.as_str()))
                .add("fee_type", opts.fee_type.map(|f| f.as_str()))
                .add_str_slice("convert", &opts.convert);
        }
        self.get(endpoints::exchange::MARKET_PAIRS_LATEST, params)
            .await
    }

    /// Returns the wallet holdings of an exchange. The payload shape varies
    /// per exchange, so it is returned as raw JSON.
    pub async fn get_exchange_assets(&self, id: i64) -> Result<ApiResponse<serde_json::Value>> {
        let params = ParamBuilder::new().add_int("id", Some(id));
        self.get(endpoints::exchange::ASSETS, params).await
    }
}
