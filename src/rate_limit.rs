//! Rate limiting for the CoinMarketCap API.
//!
//! CoinMarketCap plans are quoted in requests per minute (30/minute on the
//! Basic plan). The client smooths calls through a token bucket with a
//! capacity of one token, so at most one request can fire immediately and
//! the rest are paced at the configured steady rate.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Default steady rate in requests per second (30 requests/minute).
pub const DEFAULT_RATE: f64 = 30.0 / 60.0;

/// Floor for configured rates. Keeps refill waits finite and well inside
/// the range `Duration` can represent.
const MIN_RATE: f64 = 1e-9;

/// A token-bucket rate limiter shared by all requests of one client.
///
/// The bucket holds at most one token and refills continuously at the
/// configured rate. [`RateLimiter::acquire`] suspends the caller until a
/// token is available; dropping the returned future (for example through
/// `tokio::time::timeout`) abandons the wait without consuming a token.
#[derive(Debug)]
pub struct RateLimiter {
    bucket: Mutex<TokenBucket>,
    rate: f64,
}

impl RateLimiter {
    /// Create a limiter refilling at `rate` tokens per second.
    ///
    /// Non-positive and non-finite rates are clamped to one token per ~32
    /// years, so a misconfigured limiter blocks after its first token
    /// instead of dividing by zero.
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_finite() && rate > MIN_RATE {
            rate
        } else {
            MIN_RATE
        };
        Self {
            bucket: Mutex::new(TokenBucket::new(rate)),
            rate,
        }
    }

    /// The configured steady rate in tokens per second.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Wait until one token is available and consume it.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.bucket.lock().await;
                match bucket.try_acquire() {
                    Ok(()) => return,
                    Err(wait) => wait,
                }
            };
            tokio::time::sleep(wait).await;
        }
    }
}

/// Token bucket with capacity 1.
#[derive(Debug)]
struct TokenBucket {
    /// Fraction of a token currently available, in `[0.0, 1.0]`.
    tokens: f64,
    /// Refill rate in tokens per second.
    rate: f64,
    /// Last refill timestamp.
    last_refill: Instant,
}

impl TokenBucket {
    fn new(rate: f64) -> Self {
        Self {
            tokens: 1.0,
            rate,
            last_refill: Instant::now(),
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.rate).min(1.0);
        self.last_refill = now;
    }

    fn try_acquire(&mut self) -> Result<(), Duration> {
        self.refill();
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            Ok(())
        } else {
            let missing = 1.0 - self.tokens;
            Err(Duration::try_from_secs_f64(missing / self.rate).unwrap_or(Duration::MAX))
        }
    }
}
