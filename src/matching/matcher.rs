use log::debug;

use crate::cards::card::Card;
use crate::cards::card_number::normalize;
use crate::cards::search_query::SearchQuery;

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Exactly one card was confirmed.
    Resolved(Card),
    /// The user has to pick. Empty means nothing was found.
    Ambiguous(Vec<Card>),
}

impl MatchOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, MatchOutcome::Ambiguous(candidates) if candidates.is_empty())
    }
}

/// Picks the first candidate, in catalog order, whose normalized card number
/// equals the query number, or failing that whose catalog id contains it.
/// Both tests run on a candidate before moving to the next one.
///
/// `candidates` must already be restricted to singles.
pub fn resolve(query: &SearchQuery, mut candidates: Vec<Card>) -> MatchOutcome {
    let Some(number) = &query.number else {
        return MatchOutcome::Ambiguous(candidates);
    };
    let user_num = &number.normalized;

    let position = candidates.iter().position(|candidate| {
        let card_num = normalize(candidate.card_number.as_deref().unwrap_or_default());
        if &card_num == user_num {
            debug!("Exact card number match on {}", candidate);
            return true;
        }
        // Catalog ids can embed the number, e.g. "SET-0206-X".
        if candidate.catalog_id.trim().to_uppercase().contains(user_num.as_str()) {
            debug!(
                "Partial match of {} in catalog id {} on {}",
                user_num, candidate.catalog_id, candidate
            );
            return true;
        }
        false
    });

    match position {
        Some(index) => MatchOutcome::Resolved(candidates.swap_remove(index)),
        None => MatchOutcome::Ambiguous(candidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card_number::CardNumber;
    use crate::matching::filter::singles;
    use crate::test::helpers::{card, pikachu_query, PIKACHU};

    #[test]
    fn test_exact_number_resolves() {
        let pikachu = card(PIKACHU, Some("206/198"), "PK206");
        let outcome = resolve(&pikachu_query("206/198"), vec![pikachu.clone()]);
        assert_eq!(outcome, MatchOutcome::Resolved(pikachu));
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        let promo = card(PIKACHU, Some(" swsh050 "), "");
        let outcome = resolve(&pikachu_query("SWSH050"), vec![promo.clone()]);
        assert_eq!(outcome, MatchOutcome::Resolved(promo));
    }

    #[test]
    fn test_catalog_id_partial_match_resolves() {
        let pikachu = card(PIKACHU, Some("205/198"), "SET-0206-X");
        let outcome = resolve(&pikachu_query("206"), vec![pikachu.clone()]);
        assert_eq!(outcome, MatchOutcome::Resolved(pikachu));
    }

    #[test]
    fn test_partial_match_is_case_insensitive() {
        let promo = card(PIKACHU, Some("50"), "swshp-swsh050");
        let outcome = resolve(&pikachu_query("SWSH050"), vec![promo.clone()]);
        assert_eq!(outcome, MatchOutcome::Resolved(promo));
    }

    #[test]
    fn test_first_qualifying_candidate_wins() {
        let a = card("A", Some("1/198"), "X1");
        let b = card("B", Some("206/198"), "X2");
        let c = card("C", Some("206/198"), "X3");
        let outcome = resolve(&pikachu_query("206"), vec![a, b.clone(), c]);
        assert_eq!(outcome, MatchOutcome::Resolved(b));
    }

    #[test]
    fn test_candidate_tests_both_rules_before_advancing() {
        // The partial match comes first in catalog order and wins over a
        // later exact match.
        let partial = card("Partial", Some("1/198"), "sv1-206");
        let exact = card("Exact", Some("206/198"), "sv1-9");
        let outcome = resolve(&pikachu_query("206"), vec![partial.clone(), exact]);
        assert_eq!(outcome, MatchOutcome::Resolved(partial));
    }

    #[test]
    fn test_exact_match_wins_on_the_same_candidate() {
        let both = card("Both", Some("206/198"), "SET-206");
        let outcome = resolve(&pikachu_query("206"), vec![both.clone()]);
        assert_eq!(outcome, MatchOutcome::Resolved(both));
    }

    #[test]
    fn test_no_match_returns_all_candidates_in_order() {
        let candidates = vec![
            card(PIKACHU, Some("190/198"), "sv1-190"),
            card(PIKACHU, Some("63/191"), "sv8-63"),
        ];
        let outcome = resolve(&pikachu_query("206"), candidates.clone());
        assert_eq!(outcome, MatchOutcome::Ambiguous(candidates));
        assert!(!outcome.is_empty());
    }

    #[test]
    fn test_empty_candidates_mean_nothing_found() {
        let outcome = resolve(&pikachu_query("206"), vec![]);
        assert_eq!(outcome, MatchOutcome::Ambiguous(vec![]));
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_query_without_number_is_never_resolved() {
        let query = SearchQuery {
            name: PIKACHU.to_string(),
            number: None,
        };
        let candidates = vec![card(PIKACHU, Some("206/198"), "PK206")];
        assert_eq!(
            resolve(&query, candidates.clone()),
            MatchOutcome::Ambiguous(candidates)
        );
    }

    #[test]
    fn test_sealed_product_is_filtered_before_matching() {
        let raw = vec![
            card("Pikachu V Box", Some("206/198"), ""),
            card(PIKACHU, Some("190/198"), ""),
        ];
        let outcome = resolve(&pikachu_query("206"), singles(raw));
        assert_eq!(
            outcome,
            MatchOutcome::Ambiguous(vec![card(PIKACHU, Some("190/198"), "")])
        );
    }

    #[test]
    fn test_query_number_is_normalized_once() {
        let query = SearchQuery {
            name: PIKACHU.to_string(),
            number: Some(CardNumber::new(" tg05 / TG30")),
        };
        let trainer_gallery = card(PIKACHU, Some("TG05/TG30"), "swsh12tg-TG05");
        assert_eq!(
            resolve(&query, vec![trainer_gallery.clone()]),
            MatchOutcome::Resolved(trainer_gallery)
        );
    }
}
