use serde_json::{json, Value};

use crate::cards::card::Card;
use crate::cards::search_query::SearchQuery;

pub static PIKACHU: &str = "Pikachu";

pub fn card(name: &str, card_number: Option<&str>, catalog_id: &str) -> Card {
    Card {
        name: name.to_string(),
        card_number: card_number.map(str::to_string),
        catalog_id: catalog_id.to_string(),
        image_url: None,
        prices: None,
    }
}

pub fn pikachu_card() -> Card {
    Card::from_value(&pikachu_json()).unwrap()
}

pub fn pikachu_json() -> Value {
    json!({
        "name": PIKACHU,
        "card_number": "206/198",
        "tcgid": "PK206",
        "image": "https://images.example.com/sv1/206.png",
        "prices": {"cardmarket": {"30d_average": 12.5}}
    })
}

pub fn card_with_prices(prices: Value) -> Card {
    let mut obj = pikachu_json();
    obj["prices"] = prices;
    Card::from_value(&obj).unwrap()
}

pub fn pikachu_query(number: &str) -> SearchQuery {
    SearchQuery::new(PIKACHU, Some(number)).unwrap()
}
