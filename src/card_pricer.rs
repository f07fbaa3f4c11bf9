use log::{debug, info};

use crate::cards::card::Card;
use crate::cards::price::price_for;
use crate::cards::search_query::SearchQuery;
use crate::catalog::catalog_client::CatalogSearch;
use crate::catalog::response_adapter::extract_candidates;
use crate::display::DisplayState;
use crate::error::{PricerError, Result};
use crate::image_fetcher::{image_or_placeholder, ImageFetcher};
use crate::matching::filter::singles;
use crate::matching::matcher::{resolve, MatchOutcome};

/// Runs one search at a time: `search`, then `select` when the outcome is
/// ambiguous, then `render`. Holds no state between searches.
pub struct CardPricer<C, I> {
    catalog: C,
    images: I,
}

impl<C, I> CardPricer<C, I>
where
    C: CatalogSearch,
    I: ImageFetcher,
{
    pub fn new(catalog: C, images: I) -> Self {
        CardPricer { catalog, images }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<MatchOutcome> {
        if query.number.is_none() {
            return Err(PricerError::Validation(
                "card name and number are required".to_string(),
            ));
        }
        debug!("Searching for name='{}', number={:?}", query.name, query.number);

        let response = self.catalog.search(query).await?;
        let products = extract_candidates(&response);
        debug!("API returned {} products", products.len());

        let candidates = singles(products);
        debug!("{} of them are singles", candidates.len());

        let outcome = resolve(query, candidates);
        match &outcome {
            MatchOutcome::Resolved(card) => info!("Found exact card match: {}", card),
            MatchOutcome::Ambiguous(cards) if cards.is_empty() => info!("No cards found"),
            MatchOutcome::Ambiguous(cards) => {
                info!("No exact match, {} alternatives to choose from", cards.len())
            }
        }
        Ok(outcome)
    }

    /// Takes the user's pick out of an ambiguous outcome.
    pub fn select(&self, mut candidates: Vec<Card>, index: usize) -> Result<Card> {
        if index >= candidates.len() {
            return Err(PricerError::Selection {
                index,
                len: candidates.len(),
            });
        }
        let card = candidates.swap_remove(index);
        debug!("Selected alternative card: {}", card);
        Ok(card)
    }

    pub async fn render(&self, card: Card) -> DisplayState {
        debug!("Displaying card: {}", card);
        let image = image_or_placeholder(&self.images, card.image_url.as_deref()).await;
        let price = price_for(&card);
        DisplayState::new(card, image, price)
    }
}
