//! Cryptocurrency endpoints.
//!
//! Covers ID maps, metadata, listings, quotes, market pairs, OHLCV data,
//! price performance, categories, airdrops and trending lists.

mod types;

pub use types::*;

use std::collections::HashMap;

use crate::Result;
use crate::client::Client;
use crate::endpoints;
use crate::params::ParamBuilder;
use crate::types::ApiResponse;

impl Client {
    /// Returns a mapping of all cryptocurrencies to their CoinMarketCap IDs.
    pub async fn get_cryptocurrency_map(
        &self,
        options: Option<&CryptocurrencyMapOptions>,
    ) -> Result<ApiResponse<Vec<CryptocurrencyMap>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add("listing_status", opts.listing_status.map(|s| s.as_str()))
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("sort", opts.sort.as_deref())
                .add_str_slice("symbol", &opts.symbol)
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::cryptocurrency::MAP, params).await
    }

    /// Returns static metadata for one or more cryptocurrencies, keyed by
    /// the identifier used in the request.
    pub async fn get_cryptocurrency_info(
        &self,
        options: Option<&CryptocurrencyInfoOptions>,
    ) -> Result<ApiResponse<HashMap<String, CryptocurrencyInfo>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_str_slice("symbol", &opts.symbol)
                .add_str_slice("address", &opts.address)
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::cryptocurrency::INFO, params).await
    }

    /// Returns a paginated list of all active cryptocurrencies with latest
    /// market data.
    pub async fn get_cryptocurrency_listings_latest(
        &self,
        options: Option<&CryptocurrencyListingsOptions>,
    ) -> Result<ApiResponse<Vec<CryptocurrencyListing>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add_float("price_min", opts.price_min)
                .add_float("price_max", opts.price_max)
                .add_float("market_cap_min", opts.market_cap_min)
                .add_float("market_cap_max", opts.market_cap_max)
                .add_float("volume_24h_min", opts.volume_24h_min)
                .add_float("volume_24h_max", opts.volume_24h_max)
                .add_float("circulating_supply_min", opts.circulating_supply_min)
                .add_float("circulating_supply_max", opts.circulating_supply_max)
                .add_float("percent_change_24h_min", opts.percent_change_24h_min)
                .add_float("percent_change_24h_max", opts.percent_change_24h_max)
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id)
                .add("sort", opts.sort.map(|s| s.as_str()))
                .add("sort_dir", opts.sort_dir.map(|s| s.as_str()))
                .add(
                    "cryptocurrency_type",
                    opts.cryptocurrency_type.map(|t| t.as_str()),
                )
                .add("tag", opts.tag.as_deref())
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::cryptocurrency::LISTINGS_LATEST, params)
            .await
    }

    /// Returns a ranked list of all cryptocurrencies on a historical date.
    pub async fn get_cryptocurrency_listings_historical(
        &self,
        options: Option<&CryptocurrencyListingsHistoricalOptions>,
    ) -> Result<ApiResponse<Vec<CryptocurrencyListing>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add("date", Some(opts.date.as_str()))
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add_float("price_min", opts.price_min)
                .add_float("price_max", opts.price_max)
                .add_float("market_cap_min", opts.market_cap_min)
                .add_float("market_cap_max", opts.market_cap_max)
                .add_float("volume_24h_min", opts.volume_24h_min)
                .add_float("volume_24h_max", opts.volume_24h_max)
                .add_float("circulating_supply_min", opts.circulating_supply_min)
                .add_float("circulating_supply_max", opts.circulating_supply_max)
                .add_float("percent_change_24h_min", opts.percent_change_24h_min)
                .add_float("percent_change_24h_max", opts.percent_change_24h_max)
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id)
                .add("sort", opts.sort.map(|s| s.as_str()))
                .add("sort_dir", opts.sort_dir.map(|s| s.as_str()))
                .add(
                    "cryptocurrency_type",
                    opts.cryptocurrency_type.map(|t| t.as_str()),
                )
                .add("tag", opts.tag.as_deref())
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::cryptocurrency::LISTINGS_HISTORICAL, params)
            .await
    }

    /// Returns a paginated list of the most recently added cryptocurrencies.
    pub async fn get_cryptocurrency_listings_new(
        &self,
        options: Option<&CryptocurrencyListingsNewOptions>,
    ) -> Result<ApiResponse<Vec<CryptocurrencyListing>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id)
                .add("sort_dir", opts.sort_dir.map(|s| s.as_str()));
        }
        self.get(endpoints::cryptocurrency::LISTINGS_NEW, params)
            .await
    }

    /// Returns the latest market quote for one or more cryptocurrencies,
    /// keyed by the identifier used in the request.
    pub async fn get_cryptocurrency_quotes_latest(
        &self,
        options: Option<&CryptocurrencyQuotesOptions>,
    ) -> Result<ApiResponse<HashMap<String, CryptocurrencyQuote>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_str_slice("symbol", &opts.symbol)
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id)
                .add_str_slice("aux", &opts.aux)
                .add_bool("skip_invalid", opts.skip_invalid);
        }
        self.get(endpoints::cryptocurrency::QUOTES_LATEST, params)
            .await
    }

    /// Returns historical market quotes for one or more cryptocurrencies
    /// over an interval of time.
    pub async fn get_cryptocurrency_quotes_historical(
        &self,
        options: Option<&CryptocurrencyQuotesHistoricalOptions>,
    ) -> Result<ApiResponse<HashMap<String, Vec<HistoricalQuote>>>> {
        let params = Self::quotes_historical_params(options);
        self.get(endpoints::cryptocurrency::QUOTES_HISTORICAL, params)
            .await
    }

    /// Same as [`Client::get_cryptocurrency_quotes_historical`] but against
    /// the v3 endpoint.
    pub async fn get_cryptocurrency_quotes_historical_v3(
        &self,
        options: Option<&CryptocurrencyQuotesHistoricalOptions>,
    ) -> Result<ApiResponse<HashMap<String, Vec<HistoricalQuote>>>> {
        let params = Self::quotes_historical_params(options);
        self.get(endpoints::cryptocurrency::QUOTES_HISTORICAL_V3, params)
            .await
    }

    fn quotes_historical_params(
        options: Option<&CryptocurrencyQuotesHistoricalOptions>,
    ) -> ParamBuilder {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("symbol", &opts.symbol)
                .add_time("time_start", opts.time_start)
                .add_time("time_end", opts.time_end)
                .add_int("count", opts.count)
                .add("interval", opts.interval.map(|i| i.as_str()))
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id)
                .add_str_slice("aux", &opts.aux);
        }
        params
    }

    /// Returns all active market pairs CoinMarketCap tracks for a given
    /// cryptocurrency.
    pub async fn get_cryptocurrency_market_pairs_latest(
        &self,
        options: Option<&CryptocurrencyMarketPairsOptions>,
    ) -> Result<ApiResponse<HashMap<String, Vec<MarketPair>>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("id", opts.id)
                .add("slug", opts.slug.as_deref())
                .add("symbol", opts.symbol.as_deref())
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add_str_slice("aux", &opts.aux)
                .add_int_slice("matched_id", &opts.matched_id)
                .add_str_slice("matched_symbol", &opts.matched_symbol)
                .add("category", opts.category.map(|c| c.as_str()))
                .add("fee_type", opts.fee_type.map(|f| f.as_str()))
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id);
        }
        self.get(endpoints::cryptocurrency::MARKET_PAIRS_LATEST, params)
            .await
    }

    /// Returns the latest OHLCV market values for one or more
    /// cryptocurrencies for the current UTC day.
    pub async fn get_cryptocurrency_ohlcv_latest(
        &self,
        options: Option<&CryptocurrencyOhlcvOptions>,
    ) -> Result<ApiResponse<HashMap<String, Ohlcv>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("symbol", &opts.symbol)
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id)
                .add_bool("skip_invalid", opts.skip_invalid);
        }
        self.get(endpoints::cryptocurrency::OHLCV_LATEST, params)
            .await
    }

    /// Returns historical OHLCV data along with market cap for one or more
    /// cryptocurrencies.
    pub async fn get_cryptocurrency_ohlcv_historical(
        &self,
        options: Option<&CryptocurrencyOhlcvHistoricalOptions>,
    ) -> Result<ApiResponse<HashMap<String, Vec<Ohlcv>>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_str_slice("symbol", &opts.symbol)
                .add("time_period", opts.time_period.as_deref())
                .add_time("time_start", opts.time_start)
                .add_time("time_end", opts.time_end)
                .add_int("count", opts.count)
                .add("interval", opts.interval.map(|i| i.as_str()))
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id);
        }
        self.get(endpoints::cryptocurrency::OHLCV_HISTORICAL, params)
            .await
    }

    /// Returns price performance statistics over several time windows for
    /// one or more cryptocurrencies.
    pub async fn get_cryptocurrency_price_performance_stats(
        &self,
        options: Option<&CryptocurrencyPricePerformanceStatsOptions>,
    ) -> Result<ApiResponse<HashMap<String, PricePerformanceStats>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_str_slice("symbol", &opts.symbol)
                .add("time_period", opts.time_period.map(|t| t.as_str()))
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id);
        }
        self.get(endpoints::cryptocurrency::PRICE_PERFORMANCE_STATS, params)
            .await
    }

    /// Returns information about all coin categories on CoinMarketCap.
    pub async fn get_cryptocurrency_categories(
        &self,
        options: Option<&CryptocurrencyCategoriesOptions>,
    ) -> Result<ApiResponse<Vec<Category>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add_int_slice("id", &opts.id)
                .add_str_slice("slug", &opts.slug)
                .add_str_slice("symbol", &opts.symbol);
        }
        self.get(endpoints::cryptocurrency::CATEGORIES, params).await
    }

    /// Returns a single coin category together with its coins.
    pub async fn get_cryptocurrency_category(
        &self,
        options: &CryptocurrencyCategoryOptions,
    ) -> Result<ApiResponse<CategoryDetail>> {
        let params = ParamBuilder::new()
            .add("id", Some(options.id.as_str()))
            .add_int("start", options.start)
            .add_int("limit", options.limit)
            .add_str_slice("convert", &options.convert);
        self.get(endpoints::cryptocurrency::CATEGORY, params).await
    }

    /// Returns a list of past, present and future airdrops.
    pub async fn get_cryptocurrency_airdrops(
        &self,
        options: Option<&CryptocurrencyAirdropsOptions>,
    ) -> Result<ApiResponse<Vec<Airdrop>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("status", opts.status.map(|s| s.as_str()))
                .add_int("id", opts.id)
                .add("slug", opts.slug.as_deref())
                .add("symbol", opts.symbol.as_deref());
        }
        self.get(endpoints::cryptocurrency::AIRDROPS, params).await
    }

    /// Returns information about a single airdrop by its unique ID.
    pub async fn get_cryptocurrency_airdrop(&self, id: &str) -> Result<ApiResponse<Airdrop>> {
        let params = ParamBuilder::new().add("id", Some(id));
        self.get(endpoints::cryptocurrency::AIRDROP, params).await
    }

    /// Returns the cryptocurrencies most searched on CoinMarketCap.
    pub async fn get_cryptocurrency_trending_latest(
        &self,
        options: Option<&CryptocurrencyTrendingOptions>,
    ) -> Result<ApiResponse<Vec<Trending>>> {
        let params = Self::trending_params(options);
        self.get(endpoints::cryptocurrency::TRENDING_LATEST, params)
            .await
    }

    /// Returns the cryptocurrency pages most visited on CoinMarketCap.
    pub async fn get_cryptocurrency_trending_most_visited(
        &self,
        options: Option<&CryptocurrencyTrendingOptions>,
    ) -> Result<ApiResponse<Vec<Trending>>> {
        let params = Self::trending_params(options);
        self.get(endpoints::cryptocurrency::TRENDING_MOST_VISITED, params)
            .await
    }

    fn trending_params(options: Option<&CryptocurrencyTrendingOptions>) -> ParamBuilder {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("time_period", opts.time_period.map(|t| t.as_str()))
                .add_str_slice("convert", &opts.convert);
        }
        params
    }

    /// Returns the biggest gainers and losers over a given time period.
    pub async fn get_cryptocurrency_trending_gainers_losers(
        &self,
        options: Option<&CryptocurrencyGainersLosersOptions>,
    ) -> Result<ApiResponse<Vec<Trending>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("time_period", opts.time_period.map(|t| t.as_str()))
                .add_str_slice("convert", &opts.convert)
                .add("sort", opts.sort.as_deref())
                .add("sort_dir", opts.sort_dir.map(|s| s.as_str()));
        }
        self.get(endpoints::cryptocurrency::TRENDING_GAINERS_LOSERS, params)
            .await
    }
}
