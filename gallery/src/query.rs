use std::fmt;

use jiff::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("search term is empty")]
    EmptyQuery,
}

/// Identity of one submitted search, held as `<unix millis>/<term>`.
///
/// Two submissions of the same term are different queries because each one
/// carries the time it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryToken(String);

impl QueryToken {
    /// Trims `raw` and rejects it if nothing is left.
    pub fn new(
        issued_at: Timestamp,
        raw: &str,
    ) -> Result<Self, ValidationError> {
        let term = raw.trim();
        if term.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(format!("{}/{term}", issued_at.as_millisecond())))
    }

    /// The term to send to the search api: everything after the first `/`,
    /// so terms may contain slashes themselves.
    pub fn term(&self) -> &str {
        self.0
            .split_once('/')
            .map_or(self.0.as_str(), |(_, term)| term)
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
