//! Client configuration: backend URL, debounce timings and request timeout,
//! loaded from `TIENDA_*` environment variables.

use serde::Deserialize;
use std::{env, fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};

use crate::error::{ClientError, Result};

/// Backend location and timing knobs for the storefront client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Quiet period for cart quantity updates
    pub quantity_debounce_ms: u64,
    /// Quiet period for search-as-you-type
    pub search_debounce_ms: u64,
    /// Queries shorter than this hide the results instead of searching
    pub min_search_len: usize,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            quantity_debounce_ms: 500,
            search_debounce_ms: 300,
            min_search_len: 2,
            request_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load from `TIENDA_*` environment variables, defaulting missing ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            base_url: try_load(&lookup, "TIENDA_BASE_URL", defaults.base_url)?,
            quantity_debounce_ms: try_load(
                &lookup,
                "TIENDA_QUANTITY_DEBOUNCE_MS",
                defaults.quantity_debounce_ms,
            )?,
            search_debounce_ms: try_load(
                &lookup,
                "TIENDA_SEARCH_DEBOUNCE_MS",
                defaults.search_debounce_ms,
            )?,
            min_search_len: try_load(&lookup, "TIENDA_MIN_SEARCH_LEN", defaults.min_search_len)?,
            request_timeout_secs: try_load(
                &lookup,
                "TIENDA_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
        })
    }

    pub fn quantity_debounce(&self) -> Duration {
        Duration::from_millis(self.quantity_debounce_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `path` appended to the base URL, with exactly one slash between.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ClientError::Config {
                key,
                reason: e.to_string(),
            }
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
