use crate::cards::card_number::CardNumber;
use crate::error::{PricerError, Result};

/// What the user typed. Both fields are required before a search is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub name: String,
    pub number: Option<CardNumber>,
}

impl SearchQuery {
    pub fn new(name: &str, number: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PricerError::Validation(
                "card name and number are required".to_string(),
            ));
        }

        let number = match number.map(str::trim).filter(|n| !n.is_empty()) {
            Some(raw) => CardNumber::new(raw),
            None => {
                return Err(PricerError::Validation(
                    "card name and number are required".to_string(),
                ))
            }
        };
        // "/198" would otherwise match every catalog id.
        if number.is_empty() {
            return Err(PricerError::Validation(format!(
                "card number '{}' has nothing before the '/'",
                number.raw
            )));
        }

        Ok(SearchQuery {
            name: name.to_string(),
            number: Some(number),
        })
    }

    /// The single combined search term, `"<name> <number>"`.
    pub fn search_term(&self) -> String {
        match &self.number {
            Some(number) => format!("{} {}", self.name, number.raw),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query_is_trimmed() {
        let query = SearchQuery::new("  Pikachu ", Some(" 206/198 ")).unwrap();
        assert_eq!(query.name, "Pikachu");
        assert_eq!(query.number.as_ref().unwrap().raw, "206/198");
        assert_eq!(query.number.as_ref().unwrap().normalized, "206");
        assert_eq!(query.search_term(), "Pikachu 206/198");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(matches!(
            SearchQuery::new("   ", Some("206")),
            Err(PricerError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_number_is_rejected() {
        assert!(matches!(
            SearchQuery::new("Pikachu", None),
            Err(PricerError::Validation(_))
        ));
        assert!(matches!(
            SearchQuery::new("Pikachu", Some("  ")),
            Err(PricerError::Validation(_))
        ));
    }

    #[test]
    fn test_number_with_only_set_total_is_rejected() {
        assert!(matches!(
            SearchQuery::new("Pikachu", Some("/198")),
            Err(PricerError::Validation(msg)) if msg.contains("/198")
        ));
    }
}
