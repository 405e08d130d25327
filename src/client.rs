//! CoinMarketCap REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER, USER_AGENT};
use reqwest_middleware::{ClientBuilder as MiddlewareClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};

use crate::endpoints::{DEFAULT_BASE_URL, SANDBOX_BASE_URL};
use crate::error::{ApiError, CmcError};
use crate::params::ParamBuilder;
use crate::rate_limit::{DEFAULT_RATE, RateLimiter};
use crate::types::ApiResponse;

/// Default transport timeout per request attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base delay for linear retry backoff.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Maximum number of retries after the initial attempt.
///
/// Transport failures and HTTP 429 responses draw from this one budget.
pub const MAX_RETRIES: u32 = 3;

/// Name of the CoinMarketCap authentication header.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// The CoinMarketCap REST API client.
///
/// The client handles authentication, rate limiting and automatic retries
/// for every endpoint wrapper. Configuration is immutable after
/// construction; clones share the same rate limiter and connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use coinmarketcap_api_client::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder().api_key("my-api-key").build();
///     let metrics = client.get_global_metrics_latest(None).await?;
///     println!("BTC dominance: {:?}", metrics.data.btc_dominance);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    http: ClientWithMiddleware,
    api_key: Option<SecretString>,
    base_url: String,
    user_agent: String,
    rate_limiter: Arc<RateLimiter>,
    retry_delay: Duration,
}

impl Client {
    /// Create a new client with default settings and no API key.
    ///
    /// Without a key every request will fail with an authentication error;
    /// use [`Client::builder()`] to configure one.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The User-Agent header value sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The configured steady request rate in requests per second.
    pub fn rate_limit(&self) -> f64 {
        self.rate_limiter.rate()
    }

    /// Perform a typed GET request against an endpoint path.
    ///
    /// This is the generic entry point every endpoint wrapper delegates to.
    /// It is public so callers can reach endpoints this crate has no wrapper
    /// for yet.
    pub async fn get<T>(
        &self,
        endpoint: &str,
        params: ParamBuilder,
    ) -> Result<ApiResponse<T>, CmcError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.get_with_headers(endpoint, params, &[]).await
    }

    /// Perform a typed GET request with extra headers.
    ///
    /// Extra headers are applied last and may override the defaults,
    /// including the authentication header.
    pub async fn get_with_headers<T>(
        &self,
        endpoint: &str,
        params: ParamBuilder,
        extra_headers: &[(&str, &str)],
    ) -> Result<ApiResponse<T>, CmcError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.acquire().await;

        let mut url = format!("{}{}", self.base_url, endpoint);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.build());
        }
        let headers = self.request_headers(extra_headers)?;

        let response = self.send_with_retries(&url, headers).await?;
        let status = response.status();
        // The gzip feature of reqwest decompresses the body transparently
        // when the response carries `Content-Encoding: gzip`.
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            let error = ApiError::from_error_body(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), code = error.error_code, "API error");
            return Err(CmcError::Api(error));
        }

        // A 2xx response can still carry an application-level error code, in
        // which case `data` is typically null and will not decode as `T`.
        // Check the status block first. These codes include the plan
        // rate-limit codes, which are deliberately not retried; only HTTP
        // 429 triggers the retry path.
        #[derive(serde::Deserialize)]
        struct StatusEnvelope {
            status: crate::types::Status,
        }
        if let Ok(envelope) = serde_json::from_str::<StatusEnvelope>(&body) {
            if envelope.status.error_code != 0 {
                let message = envelope
                    .status
                    .error_message
                    .unwrap_or_else(|| "API error".to_string());
                return Err(CmcError::Api(ApiError::new(
                    status.as_u16(),
                    envelope.status.error_code,
                    message,
                )));
            }
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
            CmcError::InvalidResponse(format!("failed to decode response: {}. Body: {}", e, body))
        })?;

        Ok(envelope)
    }

    /// Send the request, retrying transport failures and HTTP 429 responses
    /// with linear backoff. Both retry triggers share one attempt budget.
    async fn send_with_retries(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> Result<reqwest::Response, CmcError> {
        let mut attempt: u32 = 0;
        loop {
            tracing::debug!(%url, attempt, "GET request");
            let result = self
                .http
                .get(url)
                .headers(headers.clone())
                .send()
                .await;

            match result {
                Ok(response) => {
                    if response.status() == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_RETRIES {
                        let delay = retry_after(&response)
                            .unwrap_or_else(|| self.retry_delay * (attempt + 1));
                        // Discard the 429 body before waiting out the delay.
                        drop(response);
                        tracing::warn!(delay_ms = delay.as_millis() as u64, "rate limited by server, backing off");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(response);
                }
                Err(err) => {
                    if attempt < MAX_RETRIES {
                        let delay = self.retry_delay * (attempt + 1);
                        tracing::warn!(error = %err, delay_ms = delay.as_millis() as u64, "transport error, retrying");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(CmcError::RetriesExhausted {
                        attempts: MAX_RETRIES + 1,
                        source: err,
                    });
                }
            }
        }
    }

    /// Assemble the per-request header map: defaults first, then the
    /// authentication header, then caller-supplied headers which win on
    /// conflict.
    fn request_headers(&self, extra_headers: &[(&str, &str)]) -> Result<HeaderMap, CmcError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coinmarketcap-api-client"));
        headers.insert(USER_AGENT, user_agent);

        if let Some(api_key) = &self.api_key {
            let value = HeaderValue::from_str(api_key.expose_secret())
                .map_err(|e| CmcError::InvalidHeader(e.to_string()))?;
            headers.insert(API_KEY_HEADER, value);
        }

        for (name, value) in extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CmcError::InvalidHeader(e.to_string()))?;
            let value =
                HeaderValue::from_str(value).map_err(|e| CmcError::InvalidHeader(e.to_string()))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

/// Parse the `Retry-After` header as integer seconds.
fn retry_after(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Builder for [`Client`].
///
/// Each setter overrides the previous value for its field; `sandbox(true)`
/// forces the sandbox base URL at build time regardless of setter order.
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    http_client: Option<reqwest::Client>,
    rate_limit: f64,
    retry_delay: Duration,
    sandbox: bool,
    user_agent: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: None,
            rate_limit: DEFAULT_RATE,
            retry_delay: DEFAULT_RETRY_DELAY,
            sandbox: false,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API key used for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Provide a pre-configured HTTP transport.
    ///
    /// When set, the builder's [`timeout`](Self::timeout) is ignored; the
    /// supplied client's own settings apply.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the steady request rate in requests per second.
    pub fn rate_limit(mut self, requests_per_second: f64) -> Self {
        self.rate_limit = requests_per_second;
        self
    }

    /// Set the base delay for linear retry backoff.
    ///
    /// The nth retry waits `delay * n`; a `Retry-After` header on HTTP 429
    /// overrides this.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Enable or disable sandbox mode.
    ///
    /// When enabled, the sandbox base URL wins over any configured base URL.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set a custom User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the transport timeout applied to each request attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        let base_url = if self.sandbox {
            SANDBOX_BASE_URL.to_string()
        } else {
            self.base_url
        };

        let user_agent = self.user_agent.unwrap_or_else(|| {
            format!("coinmarketcap-api-client/{}", env!("CARGO_PKG_VERSION"))
        });

        let reqwest_client = self.http_client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new())
        });

        let http = MiddlewareClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Client {
            http,
            api_key: self.api_key.map(SecretString::from),
            base_url,
            user_agent,
            rate_limiter: Arc::new(RateLimiter::new(self.rate_limit)),
            retry_delay: self.retry_delay,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client() {
        let client = Client::builder().api_key("test-key").build();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            client.user_agent(),
            format!("coinmarketcap-api-client/{}", env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(client.rate_limit(), DEFAULT_RATE);
    }

    #[test]
    fn test_sandbox_forces_base_url() {
        let client = Client::builder()
            .base_url("https://example.com")
            .sandbox(true)
            .build();
        assert_eq!(client.base_url(), SANDBOX_BASE_URL);

        // Setter order does not matter; the sandbox flag wins at build time.
        let client = Client::builder()
            .sandbox(true)
            .base_url("https://example.com")
            .build();
        assert_eq!(client.base_url(), SANDBOX_BASE_URL);
    }

    #[test]
    fn test_custom_rate_limit() {
        let client = Client::builder().rate_limit(10.0).build();
        assert_eq!(client.rate_limit(), 10.0);
    }

    #[test]
    fn test_custom_user_agent() {
        let client = Client::builder().user_agent("MyApp/2.0").build();
        assert_eq!(client.user_agent(), "MyApp/2.0");
    }

    #[test]
    fn test_last_setter_wins() {
        let client = Client::builder()
            .base_url("https://first.example.com")
            .base_url("https://second.example.com")
            .build();
        assert_eq!(client.base_url(), "https://second.example.com");
    }

    #[test]
    fn test_header_override() {
        let client = Client::builder().api_key("secret").build();
        let headers = client
            .request_headers(&[("X-CMC_PRO_API_KEY", "override"), ("X-Custom", "1")])
            .unwrap();
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "override");
        assert_eq!(headers.get("X-Custom").unwrap(), "1");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_extra_header_is_rejected() {
        let client = Client::builder().build();
        let result = client.request_headers(&[("bad header name", "x")]);
        assert!(matches!(result, Err(CmcError::InvalidHeader(_))));
    }
}
