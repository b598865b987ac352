use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Category, Size};

/// Upper bound of the price slider when the caller does not supply one
pub const DEFAULT_PRICE_CEILING: f64 = 500.0;

/// Closed price interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The range that admits every non-negative price
    pub fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }

    /// The slider ceiling actually in effect: a ceiling that is not positive
    /// falls back to [`DEFAULT_PRICE_CEILING`]
    pub fn effective_ceiling(ceiling: f64) -> f64 {
        if ceiling > 0.0 {
            ceiling
        } else {
            DEFAULT_PRICE_CEILING
        }
    }

    /// Builds the slider interval for a given ceiling
    ///
    /// `min` is raised to 0 and `max` lowered to the
    /// [effective ceiling](Self::effective_ceiling).
    pub fn clamped(min: f64, max: f64, ceiling: f64) -> Self {
        let ceiling = Self::effective_ceiling(ceiling);
        Self {
            min: min.max(0.0),
            max: max.min(ceiling),
        }
    }

    /// Inclusive on both ends. An inverted range contains nothing.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// The complete set of active filter constraints at a point in time
///
/// Empty sets and an unset query impose no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub categories: HashSet<Category>,
    #[serde(default)]
    pub sizes: HashSet<Size>,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub query: Option<String>,
}

impl FilterSpec {
    /// The all-open spec; applying it is equivalent to no filtering
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Adds the category if absent, removes it otherwise
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Adds the size if absent, removes it otherwise
    pub fn toggle_size(&mut self, size: Size) {
        if !self.sizes.remove(&size) {
            self.sizes.insert(size);
        }
    }

    /// Resets categories, sizes and price while keeping the active search
    pub fn clear_facets(&mut self) {
        self.categories.clear();
        self.sizes.clear();
        self.price_range = PriceRange::unbounded();
    }

    /// Lowercased query, or `None` when unset or blank
    pub fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}
