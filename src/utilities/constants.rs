pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";
pub const API_HOST_ENV: &str = "RAPIDAPI_HOST";
pub const QUERY_STYLE_ENV: &str = "CATALOG_QUERY_STYLE";
pub const ENDPOINT_ENV: &str = "CATALOG_ENDPOINT";
pub const REQUEST_TIMEOUT_ENV: &str = "REQUEST_TIMEOUT_SECS";

pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

pub const DEFAULT_CATALOG_ENDPOINT: &str = "/cards/search";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const PRODUCT_TYPE_CARDS: &str = "cards";

/// Name fragments that mark sealed products rather than single cards.
pub const BANNED_WORDS: [&str; 7] = ["box", "booster", "bundle", "blister", "etb", "case", "pack"];

pub const TREND_MARKETPLACE: &str = "cardmarket";
pub const TREND_PERIOD: &str = "30d_average";
pub const OFFER_RATIO: f64 = 0.8;
pub const DISPLAY_CURRENCY: &str = "EUR";
