use serde::Serialize;

use super::Product;

/// Maximum number of recommended products
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Which branch produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// Matched the user's recent searches
    Personalized,
    /// Random sample of the catalog
    Fallback,
    /// Nothing to show; the caller hides the section
    Empty,
}

impl RecommendationKind {
    /// Section heading shown for this kind
    pub fn title(&self) -> &'static str {
        match self {
            RecommendationKind::Personalized => "Based on Your Recent Searches",
            RecommendationKind::Fallback => "Fresh Finds For You",
            RecommendationKind::Empty => "Recommended For You",
        }
    }
}

/// Ranked products paired with the branch that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub products: Vec<Product>,
}

impl Recommendation {
    pub fn empty() -> Self {
        Self {
            kind: RecommendationKind::Empty,
            products: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&RecommendationKind::Personalized).unwrap();
        assert_eq!(json, "\"personalized\"");
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            RecommendationKind::Fallback.title(),
            "Fresh Finds For You"
        );
        assert!(Recommendation::empty().is_empty());
    }
}
