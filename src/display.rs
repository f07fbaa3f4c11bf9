use std::fmt;

use serde::Serialize;

use crate::cards::card::Card;
use crate::cards::price::PriceQuote;
use crate::image_fetcher::CardImage;

/// Everything a front end needs to show a settled card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub title: String,
    pub card: Card,
    pub image: CardImage,
    pub price: Option<PriceQuote>,
}

impl DisplayState {
    pub fn new(card: Card, image: CardImage, price: Option<PriceQuote>) -> Self {
        DisplayState {
            title: card.to_string(),
            card,
            image,
            price,
        }
    }
}

impl fmt::Display for CardImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardImage::Loaded {
                bytes,
                content_type,
            } => write!(
                f,
                "{} bytes ({})",
                bytes.len(),
                content_type.as_deref().unwrap_or("unknown type")
            ),
            CardImage::Placeholder => write!(f, "no image"),
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Image: {}", self.image)?;
        match &self.price {
            Some(quote) => write!(f, "{}", quote),
            None => write!(f, "No trend price data."),
        }
    }
}
