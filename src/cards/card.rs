use std::{collections::HashMap, fmt};

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Marketplace name -> period label -> price, e.g. `cardmarket -> 30d_average -> 12.5`.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct Prices(pub HashMap<String, HashMap<String, f64>>);

impl Prices {
    pub fn get(&self, marketplace: &str, period: &str) -> Option<f64> {
        self.0.get(marketplace)?.get(period).copied()
    }

    fn from_value(obj: &Value) -> Option<Self> {
        let marketplaces = obj.as_object()?;
        let prices = marketplaces
            .iter()
            .filter_map(|(marketplace, periods)| {
                let periods = periods
                    .as_object()?
                    .iter()
                    .filter_map(|(period, value)| Some((period.clone(), as_price(value)?)))
                    .collect::<HashMap<String, f64>>();
                Some((marketplace.clone(), periods))
            })
            .collect();
        Some(Prices(prices))
    }
}

/// Prices arrive either as numbers or as numeric strings.
fn as_price(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// One catalog entry. Sealed products come without a `card_number`.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Card {
    pub name: String,
    pub card_number: Option<String>,
    pub catalog_id: String,
    pub image_url: Option<String>,
    pub prices: Option<Prices>,
}

impl Card {
    /// Builds a card from a raw catalog entry. Returns `None` for entries that
    /// are not JSON objects. Only a missing `card_number` key marks a sealed
    /// product; a present `null` becomes an empty number.
    pub fn from_value(obj: &Value) -> Option<Self> {
        if !obj.is_object() {
            debug!("Skipping catalog entry that is not an object: {}", obj);
            return None;
        }

        Some(Card {
            name: as_text(&obj["name"]).unwrap_or_default(),
            card_number: obj
                .get("card_number")
                .map(|number| as_text(number).unwrap_or_default()),
            catalog_id: as_text(&obj["tcgid"]).unwrap_or_default(),
            image_url: obj["image"]
                .as_str()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            prices: Prices::from_value(&obj["prices"]),
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.name,
            self.card_number.as_deref().unwrap_or("-")
        )
    }
}
