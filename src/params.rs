//! Fluent builder for URL query parameters.
//!
//! Every CoinMarketCap endpoint takes a bag of optional filters. The builder
//! keeps parameters in insertion order, silently skips absent values, and
//! percent-encodes the final query string.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Builder for URL query parameters.
///
/// All `add_*` methods consume and return the builder so optional fields can
/// be composed in one expression. An absent value (`None`, empty string, or
/// empty slice) adds nothing.
///
/// # Example
///
/// ```rust
/// use coinmarketcap_api_client::params::ParamBuilder;
///
/// let query = ParamBuilder::new()
///     .add("symbol", Some("BTC"))
///     .add_int("limit", Some(10))
///     .add_float("price_min", None)
///     .build();
/// assert_eq!(query, "symbol=BTC&limit=10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamBuilder {
    params: Vec<(String, String)>,
}

impl ParamBuilder {
    /// Create an empty parameter builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string parameter unless it is absent or empty.
    pub fn add(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.params.push((key.to_string(), value.to_string()));
            }
        }
        self
    }

    /// Add an integer parameter unless it is absent.
    pub fn add_int(mut self, key: &str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a float parameter unless it is absent.
    ///
    /// Values are formatted with the shortest round-trip representation,
    /// so `12.34` encodes as `"12.34"` with no trailing zeros.
    pub fn add_float(mut self, key: &str, value: Option<f64>) -> Self {
        if let Some(value) = value {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a boolean parameter unless it is absent.
    pub fn add_bool(mut self, key: &str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add an RFC 3339 formatted timestamp parameter unless it is absent.
    pub fn add_time(mut self, key: &str, value: Option<OffsetDateTime>) -> Self {
        if let Some(value) = value {
            if let Ok(formatted) = value.format(&Rfc3339) {
                self.params.push((key.to_string(), formatted));
            }
        }
        self
    }

    /// Add a comma-separated list of strings unless the slice is empty.
    pub fn add_str_slice(mut self, key: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.params.push((key.to_string(), values.join(",")));
        }
        self
    }

    /// Add a comma-separated list of integers unless the slice is empty.
    pub fn add_int_slice(mut self, key: &str, values: &[i64]) -> Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");
            self.params.push((key.to_string(), joined));
        }
        self
    }

    /// Check whether any parameter has been added.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode the accumulated parameters as a query string.
    pub fn build(self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
