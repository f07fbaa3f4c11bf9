use std::{env, fmt, str::FromStr, time::Duration};

use log::error;

use crate::error::{PricerError, Result};
use crate::utilities::constants::{
    API_HOST_ENV, API_KEY_ENV, DEFAULT_CATALOG_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS,
    ENDPOINT_ENV, QUERY_STYLE_ENV, REQUEST_TIMEOUT_ENV,
};

/// How the search terms are encoded as request parameters.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum QueryStyle {
    /// One combined `search` parameter, `"<name> <number>"`.
    Search,
    /// Separate `productType` and `name` parameters.
    Product,
}

impl FromStr for QueryStyle {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search" => Ok(QueryStyle::Search),
            "product" => Ok(QueryStyle::Product),
            _ => Err(()),
        }
    }
}

impl fmt::Display for QueryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStyle::Search => write!(f, "search"),
            QueryStyle::Product => write!(f, "product"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_host: String,
    pub query_style: QueryStyle,
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: "".to_string(),
            api_host: "".to_string(),
            query_style: QueryStyle::Search,
            endpoint: DEFAULT_CATALOG_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the process environment (after loading `.env` if present).
    /// Fails when the API key or host is missing.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let mut config = Config::default();
        config.update_from_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    fn update_from_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key = Self::required(&var, API_KEY_ENV)?;
        self.api_host = Self::required(&var, API_HOST_ENV)?;

        if let Some(style) = var(QUERY_STYLE_ENV) {
            match style.parse() {
                Ok(style) => self.query_style = style,
                Err(_) => error!(
                    "Unknown {} '{}', using '{}'",
                    QUERY_STYLE_ENV, style, self.query_style
                ),
            }
        }
        if let Some(endpoint) = var(ENDPOINT_ENV) {
            let endpoint = endpoint.trim();
            if endpoint.starts_with('/') {
                self.endpoint = endpoint.to_string();
            } else if !endpoint.is_empty() {
                error!("{} must start with '/', got '{}'", ENDPOINT_ENV, endpoint);
            }
        }
        if let Some(timeout) = var(REQUEST_TIMEOUT_ENV) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout = Duration::from_secs(secs),
                _ => error!(
                    "{} must be a positive number of seconds, got '{}'",
                    REQUEST_TIMEOUT_ENV, timeout
                ),
            }
        }
        Ok(())
    }

    fn required<F>(var: &F, key: &str) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match var(key) {
            Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(PricerError::Config(format!("{} is not set", key))),
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}", self.api_host)
    }
}
