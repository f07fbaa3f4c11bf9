use log::debug;
use serde_json::Value;

use crate::cards::card::Card;

const CANDIDATE_KEYS: [&str; 2] = ["data", "cards"];

/// First non-empty value under `data`, then `cards`.
fn lookup(response: &Value) -> Option<&Value> {
    CANDIDATE_KEYS
        .iter()
        .filter_map(|key| response.get(key))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        _ => true,
    }
}

/// Pulls the candidate list out of a catalog response.
///
/// Older responses list candidates under `data`, newer ones may use `cards`,
/// and either may hold a mapping that nests the list one level deeper under
/// the same keys. Anything else yields no candidates.
pub fn extract_candidates(response: &Value) -> Vec<Card> {
    let mut products = lookup(response);
    if let Some(nested) = products.filter(|value| value.is_object()) {
        products = lookup(nested);
    }

    match products {
        Some(Value::Array(items)) => items.iter().filter_map(Card::from_value).collect(),
        Some(other) => {
            debug!("Catalog response holds no candidate list: {}", other);
            Vec::new()
        }
        None => Vec::new(),
    }
}
