//! Word pair model shared by the common and personal dictionaries.

/// A target-language word together with its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub target: String,
    pub translation: String,
}

impl WordPair {
    pub fn new(target: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            translation: translation.into(),
        }
    }
}
