use std::fmt;

use serde::Serialize;

use super::card::Card;
use crate::utilities::constants::{DISPLAY_CURRENCY, OFFER_RATIO, TREND_MARKETPLACE, TREND_PERIOD};

/// Trend price of a card and the derived buy offer, both rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    pub trend: f64,
    pub offer: f64,
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Looks up the 30 day Cardmarket average. A missing or zero value means the
/// card has no price, which is not an error.
pub fn price_for(card: &Card) -> Option<PriceQuote> {
    let average = card
        .prices
        .as_ref()?
        .get(TREND_MARKETPLACE, TREND_PERIOD)
        .filter(|price| *price != 0.0 && !price.is_nan())?;

    let trend = round_to_cents(average);
    Some(PriceQuote {
        trend,
        offer: round_to_cents(trend * OFFER_RATIO),
    })
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trend price (30d): {:.2} {}",
            self.trend, DISPLAY_CURRENCY
        )?;
        write!(
            f,
            "Your price ({:.0}%): {:.2} {}",
            OFFER_RATIO * 100.0,
            self.offer,
            DISPLAY_CURRENCY
        )
    }
}
