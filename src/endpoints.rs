//! CoinMarketCap REST API endpoint constants.

/// Base URL for the production CoinMarketCap Pro API.
pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Base URL for the sandbox API (test data, test keys).
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com";

/// Cryptocurrency endpoints.
pub mod cryptocurrency {
    /// ID map of all cryptocurrencies.
    pub const MAP: &str = "/v1/cryptocurrency/map";
    /// Static metadata for one or more cryptocurrencies.
    pub const INFO: &str = "/v2/cryptocurrency/info";
    /// Latest market-cap ranked listings.
    pub const LISTINGS_LATEST: &str = "/v1/cryptocurrency/listings/latest";
    /// Historical listings for a given date.
    pub const LISTINGS_HISTORICAL: &str = "/v1/cryptocurrency/listings/historical";
    /// Most recently added cryptocurrencies.
    pub const LISTINGS_NEW: &str = "/v1/cryptocurrency/listings/new";
    /// Latest market quotes.
    pub const QUOTES_LATEST: &str = "/v2/cryptocurrency/quotes/latest";
    /// Historical market quotes.
    pub const QUOTES_HISTORICAL: &str = "/v2/cryptocurrency/quotes/historical";
    /// Historical market quotes (v3).
    pub const QUOTES_HISTORICAL_V3: &str = "/v3/cryptocurrency/quotes/historical";
    /// Market pairs for a cryptocurrency.
    pub const MARKET_PAIRS_LATEST: &str = "/v2/cryptocurrency/market-pairs/latest";
    /// Latest OHLCV values.
    pub const OHLCV_LATEST: &str = "/v2/cryptocurrency/ohlcv/latest";
    /// Historical OHLCV values.
    pub const OHLCV_HISTORICAL: &str = "/v2/cryptocurrency/ohlcv/historical";
    /// Price performance statistics.
    pub const PRICE_PERFORMANCE_STATS: &str = "/v2/cryptocurrency/price-performance-stats/latest";
    /// All coin categories.
    pub const CATEGORIES: &str = "/v1/cryptocurrency/categories";
    /// A single coin category with its coins.
    pub const CATEGORY: &str = "/v1/cryptocurrency/category";
    /// List of airdrops.
    pub const AIRDROPS: &str = "/v1/cryptocurrency/airdrops";
    /// A single airdrop.
    pub const AIRDROP: &str = "/v1/cryptocurrency/airdrop";
    /// Trending cryptocurrencies by search volume.
    pub const TRENDING_LATEST: &str = "/v1/cryptocurrency/trending/latest";
    /// Most visited cryptocurrencies.
    pub const TRENDING_MOST_VISITED: &str = "/v1/cryptocurrency/trending/most-visited";
    /// Biggest gainers and losers.
    pub const TRENDING_GAINERS_LOSERS: &str = "/v1/cryptocurrency/trending/gainers-losers";
}

/// Exchange endpoints.
pub mod exchange {
    /// ID map of all exchanges.
    pub const MAP: &str = "/v1/exchange/map";
    /// Static metadata for one or more exchanges.
    pub const INFO: &str = "/v1/exchange/info";
    /// Latest exchange listings.
    pub const LISTINGS_LATEST: &str = "/v1/exchange/listings/latest";
    /// Latest exchange quotes.
    pub const QUOTES_LATEST: &str = "/v1/exchange/quotes/latest";
    /// Historical exchange quotes.
    pub const QUOTES_HISTORICAL: &str = "/v1/exchange/quotes/historical";
    /// Market pairs on an exchange.
    pub const MARKET_PAIRS_LATEST: &str = "/v1/exchange/market-pairs/latest";
    /// Holdings of an exchange.
    pub const ASSETS: &str = "/v1/exchange/assets";
}

/// Global metrics, tools, content and other endpoints.
pub mod global {
    /// Latest aggregate market metrics.
    pub const METRICS_LATEST: &str = "/v1/global-metrics/quotes/latest";
    /// Historical aggregate market metrics.
    pub const METRICS_HISTORICAL: &str = "/v1/global-metrics/quotes/historical";
    /// ID map of supported fiat currencies.
    pub const FIAT_MAP: &str = "/v1/fiat/map";
    /// Price conversion tool.
    pub const PRICE_CONVERSION: &str = "/v2/tools/price-conversion";
    /// Postman collection for the API.
    pub const POSTMAN: &str = "/v1/tools/postman";
    /// Latest blockchain statistics.
    pub const BLOCKCHAIN_STATS_LATEST: &str = "/v1/blockchain/statistics/latest";
    /// Latest content pieces.
    pub const CONTENT_LATEST: &str = "/v1/content/latest";
    /// Top community posts.
    pub const CONTENT_POSTS_TOP: &str = "/v1/content/posts/top";
    /// Latest community posts.
    pub const CONTENT_POSTS_LATEST: &str = "/v1/content/posts/latest";
    /// Comments of a community post.
    pub const CONTENT_POSTS_COMMENTS: &str = "/v1/content/posts/comments";
    /// Trending community topics.
    pub const COMMUNITY_TRENDING_TOPIC: &str = "/v1/community/trending/topic";
    /// Trending community tokens.
    pub const COMMUNITY_TRENDING_TOKEN: &str = "/v1/community/trending/token";
    /// API key usage and plan information.
    pub const KEY_INFO: &str = "/v1/key/info";
    /// Latest CMC 100 index value.
    pub const INDEX_CMC100_LATEST: &str = "/v3/index/cmc100-latest";
    /// Historical CMC 100 index values.
    pub const INDEX_CMC100_HISTORICAL: &str = "/v3/index/cmc100-historical";
    /// Latest fear and greed index.
    pub const FEAR_AND_GREED_LATEST: &str = "/v3/fear-and-greed/latest";
    /// Historical fear and greed index.
    pub const FEAR_AND_GREED_HISTORICAL: &str = "/v3/fear-and-greed/historical";
}
