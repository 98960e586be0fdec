//! Immutable key/value configuration bag for one scoring invocation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use super::keys;
use crate::errors::ConfigError;
use crate::models::ScoreValue;

/// Per-request overrides for a score card.
///
/// Immutable once built and cheap to clone, so one instance can be shared by
/// value across concurrent invocations. Well-known keys are validated by
/// [`RequestOptionsBuilder::build`]; card-specific keys are parsed on demand.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    values: Arc<BTreeMap<String, String>>,
}

impl RequestOptions {
    pub fn builder() -> RequestOptionsBuilder {
        RequestOptionsBuilder::default()
    }

    /// Build from raw key/value pairs, validating well-known keys.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, ConfigError>
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .fold(Self::builder(), |b, (k, v)| b.set(k, v))
            .build()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Parse a card-specific key as a decimal.
    pub fn get_decimal(&self, key: &str) -> Result<Option<Decimal>, ConfigError> {
        self.parse_with(key, |raw| Decimal::from_str(raw).map_err(|e| e.to_string()))
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        self.parse_with(key, |raw| raw.parse::<i64>().map_err(|e| e.to_string()))
    }

    pub fn get_u32(&self, key: &str) -> Result<Option<u32>, ConfigError> {
        self.parse_with(key, |raw| raw.parse::<u32>().map_err(|e| e.to_string()))
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        self.parse_with(key, |raw| raw.parse::<bool>().map_err(|e| e.to_string()))
    }

    /// Whether the card should run. Defaults to `true`.
    pub fn enabled(&self) -> bool {
        self.get_bool(keys::ENABLED).ok().flatten().unwrap_or(true)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.parse_with(keys::TIMEOUT_MS, |raw| raw.parse::<u64>().map_err(|e| e.to_string()))
            .ok()
            .flatten()
            .map(Duration::from_millis)
    }

    pub fn min_points(&self) -> Option<ScoreValue> {
        self.get_decimal(keys::MIN_POINTS).ok().flatten().map(ScoreValue::new)
    }

    pub fn max_points(&self) -> Option<ScoreValue> {
        self.get_decimal(keys::MAX_POINTS).ok().flatten().map(ScoreValue::new)
    }

    pub fn bucket_count(&self) -> Option<u32> {
        self.get_u32(keys::BUCKET_COUNT).ok().flatten()
    }

    /// Merge `other` over `self`; keys present in `other` take precedence.
    pub fn overlay(&self, other: &RequestOptions) -> RequestOptions {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut merged = (*self.values).clone();
        merged.extend(other.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        RequestOptions {
            values: Arc::new(merged),
        }
    }

    fn parse_with<T>(
        &self,
        key: &str,
        parse: impl FnOnce(&str) -> Result<T, String>,
    ) -> Result<Option<T>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => parse(raw.trim()).map(Some).map_err(|message| {
                ConfigError::invalid(key, format!("`{raw}` could not be parsed: {message}"))
            }),
        }
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

/// Accumulator for [`RequestOptions`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptionsBuilder {
    values: BTreeMap<String, String>,
}

impl RequestOptionsBuilder {
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn enabled(self, enabled: bool) -> Self {
        self.set(keys::ENABLED, enabled.to_string())
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        self.set(keys::TIMEOUT_MS, timeout.as_millis().to_string())
    }

    pub fn min_points(self, points: ScoreValue) -> Self {
        self.set(keys::MIN_POINTS, points.to_string())
    }

    pub fn max_points(self, points: ScoreValue) -> Self {
        self.set(keys::MAX_POINTS, points.to_string())
    }

    pub fn bucket_count(self, buckets: u32) -> Self {
        self.set(keys::BUCKET_COUNT, buckets.to_string())
    }

    /// Validate well-known keys and freeze.
    pub fn build(self) -> Result<RequestOptions, ConfigError> {
        let options = RequestOptions {
            values: Arc::new(self.values),
        };

        options.get_bool(keys::ENABLED)?;
        let timeout_ms = options.parse_with(keys::TIMEOUT_MS, |raw| {
            raw.parse::<u64>().map_err(|e| e.to_string())
        })?;
        if timeout_ms == Some(0) {
            return Err(ConfigError::invalid(
                keys::TIMEOUT_MS,
                "must be greater than 0 (omit it for no limit)",
            ));
        }
        let min = options.get_decimal(keys::MIN_POINTS)?;
        let max = options.get_decimal(keys::MAX_POINTS)?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::invalid(
                    keys::MIN_POINTS,
                    format!("min_points {min} exceeds max_points {max}"),
                ));
            }
        }
        if options.get_u32(keys::BUCKET_COUNT)? == Some(0) {
            return Err(ConfigError::invalid(
                keys::BUCKET_COUNT,
                "must be greater than 0",
            ));
        }

        Ok(options)
    }
}
