//! Global metrics, fiat, tool, content and index endpoints.
//!
//! Several of the content and index endpoints return loosely structured
//! payloads; those are surfaced as [`serde_json::Value`].

mod types;

pub use types::*;

use std::collections::HashMap;

use serde_json::Value;

use crate::Result;
use crate::client::Client;
use crate::endpoints;
use crate::params::ParamBuilder;
use crate::types::ApiResponse;

impl Client {
    /// Returns the latest global cryptocurrency market metrics.
    pub async fn get_global_metrics_latest(
        &self,
        options: Option<&GlobalMetricsOptions>,
    ) -> Result<ApiResponse<GlobalMetrics>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_str_slice("convert", &opts.convert)
                .add_int_slice("convert_id", &opts.convert_id);
        }
        self.get(endpoints::global::METRICS_LATEST, params).await
    }

    /// Returns historical global market metrics over an interval of time.
    pub async fn get_global_metrics_historical(
        &self,
        options: Option<&GlobalMetricsHistoricalOptions>,
    ) -> Result<ApiResponse<Vec<GlobalMetrics>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_time("time_start", opts.time_start)
                .add_time("time_end", opts.time_end)
                .add_int("count", opts.count)
                .add("interval", opts.interval.map(|i| i.as_str()))
                .add_str_slice("convert", &opts.convert)
                .add_str_slice("aux", &opts.aux);
        }
        self.get(endpoints::global::METRICS_HISTORICAL, params)
            .await
    }

    /// Returns a mapping of all supported fiat currencies to their
    /// CoinMarketCap IDs.
    pub async fn get_fiat_map(
        &self,
        options: Option<&FiatMapOptions>,
    ) -> Result<ApiResponse<Vec<FiatMap>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("sort", opts.sort.as_deref())
                .add_bool("include_metals", opts.include_metals);
        }
        self.get(endpoints::global::FIAT_MAP, params).await
    }

    /// Converts an amount of one currency into up to 120 others.
    pub async fn get_price_conversion(
        &self,
        options: &PriceConversionOptions,
    ) -> Result<ApiResponse<PriceConversion>> {
        let params = ParamBuilder::new()
            .add_float("amount", Some(options.amount))
            .add_int("id", options.id)
            .add("symbol", options.symbol.as_deref())
            .add_time("time", options.time)
            .add_str_slice("convert", &options.convert)
            .add_int_slice("convert_id", &options.convert_id);
        self.get(endpoints::global::PRICE_CONVERSION, params).await
    }

    /// Returns the API as a Postman collection document.
    pub async fn get_postman_collection(&self) -> Result<ApiResponse<Value>> {
        self.get(endpoints::global::POSTMAN, ParamBuilder::new())
            .await
    }

    /// Returns the latest on-chain statistics for one or more blockchains,
    /// keyed by the identifier used in the request.
    pub async fn get_blockchain_stats_latest(
        &self,
        options: Option<&BlockchainStatsOptions>,
    ) -> Result<ApiResponse<HashMap<String, BlockchainStats>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int_slice("id", &opts.id)
                .add_str_slice("symbol", &opts.symbol)
                .add_str_slice("slug", &opts.slug);
        }
        self.get(endpoints::global::BLOCKCHAIN_STATS_LATEST, params)
            .await
    }

    /// Returns the latest news and Alexandria articles.
    pub async fn get_content_latest(
        &self,
        options: Option<&ContentLatestOptions>,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("category", opts.category.as_deref())
                .add_int("cryptocurrency_id", opts.cryptocurrency_id)
                .add("language", opts.language.as_deref())
                .add("sort", opts.sort.as_deref());
        }
        self.get(endpoints::global::CONTENT_LATEST, params).await
    }

    /// Returns the top community posts for a time period.
    pub async fn get_content_posts_top(
        &self,
        options: Option<&ContentPostsOptions>,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add("time_period", opts.time_period.map(|t| t.as_str()))
                .add_int("cryptocurrency_id", opts.cryptocurrency_id)
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("sort", opts.sort.as_deref());
        }
        self.get(endpoints::global::CONTENT_POSTS_TOP, params).await
    }

    /// Returns the latest community posts.
    pub async fn get_content_posts_latest(
        &self,
        options: Option<&ContentPostsOptions>,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("cryptocurrency_id", opts.cryptocurrency_id)
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("sort", opts.sort.as_deref());
        }
        self.get(endpoints::global::CONTENT_POSTS_LATEST, params)
            .await
    }

    /// Returns the comments on a community post.
    pub async fn get_content_posts_comments(
        &self,
        options: &ContentCommentsOptions,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let params = ParamBuilder::new()
            .add("post_id", Some(options.post_id.as_str()))
            .add_int("start", options.start)
            .add_int("limit", options.limit);
        self.get(endpoints::global::CONTENT_POSTS_COMMENTS, params)
            .await
    }

    /// Returns the topics currently trending in the CoinMarketCap community.
    pub async fn get_community_trending_topic(
        &self,
        options: Option<&CommunityTrendingOptions>,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let params = Self::community_trending_params(options);
        self.get(endpoints::global::COMMUNITY_TRENDING_TOPIC, params)
            .await
    }

    /// Returns the tokens currently trending in the CoinMarketCap community.
    pub async fn get_community_trending_token(
        &self,
        options: Option<&CommunityTrendingOptions>,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let params = Self::community_trending_params(options);
        self.get(endpoints::global::COMMUNITY_TRENDING_TOKEN, params)
            .await
    }

    fn community_trending_params(options: Option<&CommunityTrendingOptions>) -> ParamBuilder {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit)
                .add("time_period", opts.time_period.map(|t| t.as_str()));
        }
        params
    }

    /// Returns plan details and usage statistics for the active API key.
    pub async fn get_key_info(&self) -> Result<ApiResponse<KeyInfo>> {
        self.get(endpoints::global::KEY_INFO, ParamBuilder::new())
            .await
    }

    /// Returns the latest CoinMarketCap 100 index value.
    pub async fn get_index_cmc100_latest(&self) -> Result<ApiResponse<Value>> {
        self.get(endpoints::global::INDEX_CMC100_LATEST, ParamBuilder::new())
            .await
    }

    /// Returns historical CoinMarketCap 100 index values.
    pub async fn get_index_cmc100_historical(
        &self,
        options: Option<&IndexOptions>,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_time("time_start", opts.time_start)
                .add_time("time_end", opts.time_end)
                .add_int("count", opts.count)
                .add("interval", opts.interval.as_deref());
        }
        self.get(endpoints::global::INDEX_CMC100_HISTORICAL, params)
            .await
    }

    /// Returns the latest fear and greed index value.
    pub async fn get_fear_and_greed_latest(&self) -> Result<ApiResponse<Value>> {
        self.get(endpoints::global::FEAR_AND_GREED_LATEST, ParamBuilder::new())
            .await
    }

    /// Returns historical fear and greed index values.
    pub async fn get_fear_and_greed_historical(
        &self,
        options: Option<&FearAndGreedHistoricalOptions>,
    ) -> Result<ApiResponse<Vec<Value>>> {
        let mut params = ParamBuilder::new();
        if let Some(opts) = options {
            params = params
                .add_int("start", opts.start)
                .add_int("limit", opts.limit);
        }
        self.get(endpoints::global::FEAR_AND_GREED_HISTORICAL, params)
            .await
    }
}
