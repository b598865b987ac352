use serde::{Deserialize, Serialize};

/// Maximum number of remembered search terms
pub const HISTORY_CAPACITY: usize = 5;

/// Recent search terms, most recent first
///
/// Terms are lowercase and unique. Re-submitting a term moves it to the front
/// instead of appending a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    terms: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from stored terms, restoring the invariants
    ///
    /// Stored data may come from older writers, so terms are lowercased,
    /// blanks dropped, duplicates removed (first wins) and the list capped.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::with_capacity(HISTORY_CAPACITY);
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() || normalized.contains(&term) {
                continue;
            }
            normalized.push(term);
            if normalized.len() == HISTORY_CAPACITY {
                break;
            }
        }
        Self { terms: normalized }
    }

    /// Records a submitted search term
    ///
    /// Returns false when the term is blank and nothing was recorded.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return false;
        }
        self.terms.retain(|t| *t != term);
        self.terms.insert(0, term);
        self.terms.truncate(HISTORY_CAPACITY);
        true
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}
