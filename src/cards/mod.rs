pub mod card;
pub mod card_number;
pub mod price;
pub mod search_query;
