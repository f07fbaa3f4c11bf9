use crate::cards::card::Card;
use crate::utilities::constants::BANNED_WORDS;

/// Whether a catalog entry is a single card rather than a sealed product.
///
/// Entries without a card number are never singles. Otherwise the lower-cased
/// name is checked for any of the banned words as a substring, so a single
/// whose name happens to contain one (e.g. "Pack Leader") is rejected too.
pub fn is_single(card: &Card) -> bool {
    if card.card_number.is_none() {
        return false;
    }
    let name = card.name.to_lowercase();
    !BANNED_WORDS.iter().any(|banned| name.contains(banned))
}

pub fn singles(cards: Vec<Card>) -> Vec<Card> {
    cards.into_iter().filter(is_single).collect()
}
