use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinmarketcap_api_client::error::CmcError;
use coinmarketcap_api_client::{Client, cryptocurrency::CryptocurrencyTrendingOptions};

fn build_client(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .rate_limit(1000.0)
        .build()
}

fn metrics_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "btc_dominance": 52.1,
            "eth_dominance": 17.3,
            "active_cryptocurrencies": 9000,
            "last_updated": "2024-01-15T10:00:00.000Z",
            "quote": {}
        },
        "status": {
            "timestamp": "2024-01-15T10:00:00.000Z",
            "error_code": 0,
            "error_message": null,
            "elapsed": 10,
            "credit_count": 1
        }
    })
}

#[tokio::test]
async fn test_api_key_header_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .and(header("X-CMC_PRO_API_KEY", "test-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let metrics = client.get_global_metrics_latest(None).await.unwrap();
    assert_eq!(metrics.data.btc_dominance, Some(52.1));
    assert_eq!(metrics.status.credit_count, 1);
}

#[tokio::test]
async fn test_custom_user_agent_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .and(header("user-agent", "metrics-bot/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .user_agent("metrics-bot/2.0")
        .rate_limit(1000.0)
        .build();
    client.get_global_metrics_latest(None).await.unwrap();
}

#[tokio::test]
async fn test_retries_on_429_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_string("slow down"),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let metrics = client.get_global_metrics_latest(None).await.unwrap();
    assert_eq!(metrics.data.eth_dominance, Some(17.3));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_transport_failures_then_success() {
    // A bare listener that kills the first two connections and serves a
    // valid response on the third, so only the transport retry path can
    // reach success.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicUsize::new(0));

    let server_connections = connections.clone();
    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let n = server_connections.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                drop(socket);
                continue;
            }
            let body = metrics_body().to_string();
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    let client = Client::builder()
        .api_key("test-key")
        .base_url(format!("http://{addr}"))
        .rate_limit(1000.0)
        .retry_delay(Duration::from_millis(1))
        .build();

    let metrics = client.get_global_metrics_latest(None).await.unwrap();
    assert_eq!(metrics.data.btc_dominance, Some(52.1));
    assert_eq!(connections.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_transport_errors_exhaust_retries() {
    // Grab a free port, then shut the server down so every attempt is
    // refused at the transport level.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = Client::builder()
        .api_key("test-key")
        .base_url(uri)
        .rate_limit(1000.0)
        .retry_delay(Duration::from_millis(1))
        .build();

    let err = client.get_global_metrics_latest(None).await.unwrap_err();
    match err {
        CmcError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 4),
        other => panic!("expected retries exhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_persistent_429_exhausts_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(serde_json::json!({
                    "status": {
                        "error_code": 1008,
                        "error_message": "minute rate limit reached"
                    }
                })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_global_metrics_latest(None).await.unwrap_err();
    match err {
        CmcError::Api(api) => {
            assert_eq!(api.status_code, 429);
            assert_eq!(api.error_code, 1008);
            assert!(api.is_rate_limit());
        }
        other => panic!("expected API error, got {other:?}"),
    }

    // Initial attempt plus three retries.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn test_http_401_classified_as_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": {
                "error_code": 1002,
                "error_message": "API key missing"
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_global_metrics_latest(None).await.unwrap_err();
    match err {
        CmcError::Api(api) => {
            assert_eq!(api.status_code, 401);
            assert_eq!(api.error_code, 1002);
            assert!(api.is_auth_error());
            assert!(!api.is_rate_limit());
        }
        other => panic!("expected API error, got {other:?}"),
    }

    // Client errors other than 429 are not retried.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_http_402_classified_as_payment_required() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/trending/latest"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "status": {
                "error_code": 1003,
                "error_message": "payment required"
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = CryptocurrencyTrendingOptions {
        limit: Some(5),
        ..Default::default()
    };
    let err = client
        .get_cryptocurrency_trending_latest(Some(&options))
        .await
        .unwrap_err();
    match err {
        CmcError::Api(api) => {
            assert!(api.is_payment_required());
            assert_eq!(api.message, "payment required");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_without_envelope_uses_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_global_metrics_latest(None).await.unwrap_err();
    match err {
        CmcError::Api(api) => {
            assert_eq!(api.status_code, 500);
            assert_eq!(api.error_code, 0);
            assert_eq!(api.message, "upstream exploded");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_envelope_error_on_200_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": null,
            "status": {
                "timestamp": "2024-01-15T10:00:00.000Z",
                "error_code": 1001,
                "error_message": "This API Key is invalid.",
                "elapsed": 2,
                "credit_count": 0
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_global_metrics_latest(None).await.unwrap_err();
    match err {
        CmcError::Api(api) => {
            assert_eq!(api.status_code, 200);
            assert_eq!(api.error_code, 1001);
            assert!(api.is_auth_error());
        }
        other => panic!("expected API error, got {other:?}"),
    }

    // Envelope errors are terminal, never retried.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_global_metrics_latest(None).await.unwrap_err();
    assert!(matches!(err, CmcError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_query_parameters_omitted_when_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.get_global_metrics_latest(None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_dropping_request_during_rate_limit_wait_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body()))
        .mount(&server)
        .await;

    // One request per 1000 seconds, so the second acquire blocks.
    let client = Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .rate_limit(0.001)
        .build();

    client.get_global_metrics_latest(None).await.unwrap();

    let second = client.get_global_metrics_latest(None);
    let result = tokio::time::timeout(Duration::from_millis(100), second).await;
    assert!(result.is_err());

    // The cancelled request never reached the wire.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_trending_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/trending/latest"))
        .and(query_param("start", "1"))
        .and(query_param("limit", "10"))
        .and(query_param("convert", "USD,EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [],
            "status": { "error_code": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = CryptocurrencyTrendingOptions {
        start: Some(1),
        limit: Some(10),
        convert: vec!["USD".to_string(), "EUR".to_string()],
        ..Default::default()
    };
    let trending = client
        .get_cryptocurrency_trending_latest(Some(&options))
        .await
        .unwrap();
    assert!(trending.data.is_empty());
}
