/// Canonical form of a printed card number used for comparisons.
///
/// Drops everything from the first `/` (the set total), trims surrounding
/// whitespace and uppercases, so `" 206 /198 "`, `"206/198"` and `"206"` all
/// become `"206"`. Applying it twice changes nothing.
pub fn normalize(identifier: &str) -> String {
    let local = identifier
        .trim()
        .split('/')
        .next()
        .unwrap_or_default();
    local.trim().to_uppercase()
}

#[derive(Debug, Clone)]
pub struct CardNumber {
    pub raw: String,
    pub normalized: String,
}

impl CardNumber {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            normalized: normalize(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl PartialEq for CardNumber {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for CardNumber {}
