use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::cards::search_query::SearchQuery;
use crate::error::{PricerError, Result};
use crate::utilities::config::{Config, QueryStyle};
use crate::utilities::constants::{API_HOST_HEADER, API_KEY_HEADER, PRODUCT_TYPE_CARDS};

/// Sends one search to the card catalog and returns the parsed body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Value>;
}

pub struct RapidApiCatalog {
    client: Client,
    base_url: String,
    endpoint: String,
    api_key: String,
    api_host: String,
    query_style: QueryStyle,
}

impl RapidApiCatalog {
    pub fn new(config: &Config, base_url: Option<&str>, client: Client) -> Self {
        RapidApiCatalog {
            client,
            base_url: base_url
                .map(str::to_string)
                .unwrap_or_else(|| config.base_url()),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            query_style: config.query_style,
        }
    }

    fn query_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        match self.query_style {
            QueryStyle::Search => vec![("search", query.search_term())],
            QueryStyle::Product => vec![
                ("productType", PRODUCT_TYPE_CARDS.to_string()),
                ("name", query.name.clone()),
            ],
        }
    }

    fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let params = self.query_params(query);
        debug!("Requesting card search with params: {:?}", params);
        Ok(Url::parse_with_params(
            &format!("{}{}", self.base_url, self.endpoint),
            &params,
        )?)
    }
}

#[async_trait]
impl CatalogSearch for RapidApiCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Value> {
        let url = self.search_url(query)?;
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .send()
            .await?;

        debug!("API response status: {}", response.status());
        debug!("Requested URL: {}", response.url());
        if !response.status().is_success() {
            return Err(PricerError::Status {
                status: response.status(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;
        info!("Catalog search for '{}' answered", query.search_term());
        Ok(json)
    }
}
