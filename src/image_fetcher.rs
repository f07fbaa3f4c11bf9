use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Serialize;

use crate::error::{PricerError, Result};

/// Raw image bytes of a card, or the placeholder shown when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardImage {
    Loaded {
        #[serde(skip_serializing)]
        bytes: Vec<u8>,
        content_type: Option<String>,
    },
    Placeholder,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher {
    async fn fetch(&self, image_url: &str) -> Result<CardImage>;
}

pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        HttpImageFetcher { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, image_url: &str) -> Result<CardImage> {
        let response = self.client.get(image_url).send().await?;
        if !response.status().is_success() {
            return Err(PricerError::Status {
                status: response.status(),
                url: response.url().to_string(),
            });
        }
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        debug!("Fetched {} bytes of card image from {}", bytes.len(), image_url);
        Ok(CardImage::Loaded {
            bytes,
            content_type,
        })
    }
}

/// Fetches the image if the card has one. Failures only cost the picture.
pub async fn image_or_placeholder<F>(fetcher: &F, image_url: Option<&str>) -> CardImage
where
    F: ImageFetcher + ?Sized,
{
    let Some(url) = image_url else {
        return CardImage::Placeholder;
    };
    match fetcher.fetch(url).await {
        Ok(CardImage::Loaded { bytes, .. }) if bytes.is_empty() => {
            error!("Card image at {} is empty", url);
            CardImage::Placeholder
        }
        Ok(image) => image,
        Err(e) => {
            error!("Failed to load card image from {}: {}", url, e);
            CardImage::Placeholder
        }
    }
}
