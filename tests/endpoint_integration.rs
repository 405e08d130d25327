use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinmarketcap_api_client::Client;
use coinmarketcap_api_client::cryptocurrency::{
    CryptocurrencyListingsOptions, CryptocurrencyMapOptions, CryptocurrencyOhlcvHistoricalOptions,
    CryptocurrencyQuotesOptions,
};
use coinmarketcap_api_client::exchange::ExchangeMapOptions;
use coinmarketcap_api_client::global::PriceConversionOptions;
use coinmarketcap_api_client::types::{Interval, ListingSort, ListingStatus, SortDirection};

fn build_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .rate_limit(1000.0)
        .build()
}

fn ok_status() -> serde_json::Value {
    serde_json::json!({
        "timestamp": "2024-01-15T10:00:00.000Z",
        "error_code": 0,
        "error_message": null,
        "elapsed": 12,
        "credit_count": 1
    })
}

#[tokio::test]
async fn test_cryptocurrency_map() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .and(query_param("listing_status", "active"))
        .and(query_param("limit", "2"))
        .and(query_param("symbol", "BTC,ETH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "is_active": 1,
                    "first_historical_data": "2013-04-28T18:47:21.000Z",
                    "last_historical_data": "2024-01-15T09:59:00.000Z"
                },
                {
                    "id": 1027,
                    "name": "Ethereum",
                    "symbol": "ETH",
                    "slug": "ethereum",
                    "is_active": 1
                }
            ],
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = CryptocurrencyMapOptions {
        listing_status: Some(ListingStatus::Active),
        limit: Some(2),
        symbol: vec!["BTC".to_string(), "ETH".to_string()],
        ..Default::default()
    };
    let map = client
        .get_cryptocurrency_map(Some(&options))
        .await
        .unwrap();
    assert_eq!(map.data.len(), 2);
    assert_eq!(map.data[0].id, 1);
    assert_eq!(map.data[1].slug, "ethereum");
    assert!(map.data[1].first_historical_data.is_none());
}

#[tokio::test]
async fn test_cryptocurrency_quotes_latest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/cryptocurrency/quotes/latest"))
        .and(query_param("symbol", "BTC"))
        .and(query_param("convert", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "BTC": {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "is_active": 1,
                    "cmc_rank": 1,
                    "num_market_pairs": 11000,
                    "date_added": "2013-04-28T00:00:00.000Z",
                    "tags": ["mineable"],
                    "max_supply": 21000000.0,
                    "circulating_supply": 19600000.0,
                    "total_supply": 19600000.0,
                    "last_updated": "2024-01-15T10:00:00.000Z",
                    "quote": {
                        "USD": {
                            "price": 42000.5,
                            "volume_24h": 18000000000.0,
                            "percent_change_24h": 1.2,
                            "market_cap": 823000000000.0,
                            "last_updated": "2024-01-15T10:00:00.000Z"
                        }
                    }
                }
            },
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = CryptocurrencyQuotesOptions {
        symbol: vec!["BTC".to_string()],
        convert: vec!["USD".to_string()],
        ..Default::default()
    };
    let quotes = client
        .get_cryptocurrency_quotes_latest(Some(&options))
        .await
        .unwrap();

    let btc = &quotes.data["BTC"];
    assert_eq!(btc.name, "Bitcoin");
    assert_eq!(btc.cmc_rank, Some(1));
    assert_eq!(btc.quote["USD"].price, Some(42000.5));
    assert_eq!(quotes.status.credit_count, 1);
}

#[tokio::test]
async fn test_listings_latest_filter_and_sort_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/listings/latest"))
        .and(query_param("price_min", "0.5"))
        .and(query_param("market_cap_min", "1000000"))
        .and(query_param("sort", "market_cap"))
        .and(query_param("sort_dir", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [],
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = CryptocurrencyListingsOptions {
        price_min: Some(0.5),
        market_cap_min: Some(1_000_000.0),
        sort: Some(ListingSort::MarketCap),
        sort_dir: Some(SortDirection::Desc),
        ..Default::default()
    };
    client
        .get_cryptocurrency_listings_latest(Some(&options))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ohlcv_historical_time_range_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/cryptocurrency/ohlcv/historical"))
        .and(query_param("id", "1"))
        .and(query_param("time_start", "2024-01-01T00:00:00Z"))
        .and(query_param("interval", "daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "1": [
                    {
                        "time_open": "2024-01-01T00:00:00.000Z",
                        "time_close": "2024-01-01T23:59:59.000Z",
                        "open": 42000.0,
                        "high": 43000.0,
                        "low": 41500.0,
                        "close": 42800.0,
                        "volume": 17000000000.0
                    }
                ]
            },
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = CryptocurrencyOhlcvHistoricalOptions {
        id: vec![1],
        time_start: Some(time::macros::datetime!(2024-01-01 00:00:00 UTC)),
        interval: Some(Interval::Daily),
        ..Default::default()
    };
    let ohlcv = client
        .get_cryptocurrency_ohlcv_historical(Some(&options))
        .await
        .unwrap();
    let candles = &ohlcv.data["1"];
    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].close, Some(42800.0));
}

#[tokio::test]
async fn test_exchange_map() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/exchange/map"))
        .and(query_param("slug", "binance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "id": 270,
                    "name": "Binance",
                    "slug": "binance",
                    "is_active": 1,
                    "first_historical_data": "2018-04-26T00:45:00.000Z",
                    "last_historical_data": "2024-01-15T09:55:00.000Z"
                }
            ],
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = ExchangeMapOptions {
        slug: vec!["binance".to_string()],
        ..Default::default()
    };
    let map = client.get_exchange_map(Some(&options)).await.unwrap();
    assert_eq!(map.data[0].id, 270);
    assert_eq!(map.data[0].name, "Binance");
}

#[tokio::test]
async fn test_exchange_assets_returns_raw_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/exchange/assets"))
        .and(query_param("id", "270"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "balance": [
                    { "wallet_address": "0xabc", "currency": { "symbol": "ETH" } }
                ]
            },
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let assets = client.get_exchange_assets(270).await.unwrap();
    assert!(assets.data["balance"].is_array());
}

#[tokio::test]
async fn test_price_conversion_params_and_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tools/price-conversion"))
        .and(query_param("amount", "100.5"))
        .and(query_param("symbol", "BTC"))
        .and(query_param("convert", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "symbol": "BTC",
                "id": "1",
                "name": "Bitcoin",
                "amount": 100.5,
                "last_updated": "2024-01-15T10:00:00.000Z",
                "quote": {
                    "USD": {
                        "price": 4221050.25,
                        "last_updated": "2024-01-15T10:00:00.000Z"
                    }
                }
            },
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = PriceConversionOptions {
        amount: 100.5,
        symbol: Some("BTC".to_string()),
        convert: vec!["USD".to_string()],
        ..Default::default()
    };
    let conversion = client.get_price_conversion(&options).await.unwrap();
    assert_eq!(conversion.data.amount, 100.5);
    assert_eq!(conversion.data.quote["USD"].price, 4221050.25);
}

#[tokio::test]
async fn test_airdrop_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/airdrop"))
        .and(query_param("id", "10744"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "id": "10744",
                "name": "Example Airdrop",
                "description": "An airdrop",
                "date_added": "2024-01-01T00:00:00.000Z",
                "status": "ONGOING",
                "cryptocurrency_id": 1027,
                "symbol": "ETH",
                "slug": "ethereum"
            },
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let airdrop = client.get_cryptocurrency_airdrop("10744").await.unwrap();
    assert_eq!(airdrop.data.status, "ONGOING");
    assert_eq!(airdrop.data.cryptocurrency_id, 1027);
}

#[tokio::test]
async fn test_key_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/key/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "plan": {
                    "name": "Hobbyist",
                    "credit_limit_daily": 400,
                    "credit_limit_daily_reset": "In 5 hours",
                    "credit_limit_daily_reset_timestamp": "2024-01-16T00:00:00.000Z",
                    "credit_limit_monthly": 10000,
                    "credit_limit_monthly_reset": "In 16 days",
                    "credit_limit_monthly_reset_timestamp": "2024-02-01T00:00:00.000Z",
                    "rate_limit_minute": 30
                },
                "usage": {
                    "current_minute": { "requests_left": 29, "requests_made": 1 },
                    "current_day": { "credits_left": 399, "credits_used": 1 },
                    "current_month": { "credits_left": 9999, "credits_used": 1 }
                }
            },
            "status": ok_status()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_key_info().await.unwrap();
    assert_eq!(info.data.plan.rate_limit_minute, 30);
    assert_eq!(info.data.usage.current_minute.requests_left, 29);
}
