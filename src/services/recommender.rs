use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

use crate::models::{
    Product, Recommendation, RecommendationKind, SearchHistory, MAX_RECOMMENDATIONS,
};

/// Recommends products using the thread-local random generator for fallback sampling
pub fn recommend(catalog: &[Product], history: &SearchHistory) -> Recommendation {
    recommend_with_rng(catalog, history, &mut rand::thread_rng())
}

/// Ranks a catalog against recent search terms
///
/// Products mentioning any recent term, in catalog order and without repeated
/// ids, are returned as a personalized list. When history is empty or nothing
/// matches, a uniform random sample of the catalog is returned instead. An
/// empty catalog always yields an empty recommendation.
///
/// `rng` is only consulted for the fallback branch.
pub fn recommend_with_rng<R: Rng + ?Sized>(
    catalog: &[Product],
    history: &SearchHistory,
    rng: &mut R,
) -> Recommendation {
    let personalized = personalized_candidates(catalog, history);
    if !personalized.is_empty() {
        return Recommendation {
            kind: RecommendationKind::Personalized,
            products: personalized,
        };
    }

    if catalog.is_empty() {
        return Recommendation::empty();
    }

    Recommendation {
        kind: RecommendationKind::Fallback,
        products: random_sample(catalog, rng),
    }
}

/// Products matching at least one history term, deduplicated by id and capped
fn personalized_candidates(catalog: &[Product], history: &SearchHistory) -> Vec<Product> {
    if history.is_empty() {
        return Vec::new();
    }

    let terms: HashSet<String> = history
        .terms()
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|product| terms.iter().any(|term| product.mentions(term)))
        .filter(|product| seen.insert(product.id.as_str()))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}

/// First elements of a uniformly random permutation of the catalog
fn random_sample<R: Rng + ?Sized>(catalog: &[Product], rng: &mut R) -> Vec<Product> {
    let mut indices: Vec<usize> = (0..catalog.len()).collect();
    let (picked, _) = indices.partial_shuffle(rng, MAX_RECOMMENDATIONS);
    picked.iter().map(|&i| catalog[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeSet;

    fn product(id: &str, name: &str, description: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            category: Category::Bottoms,
            sizes: BTreeSet::new(),
            price: 40.0,
        }
    }

    /// Ten products, three of which mention "jeans"
    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Relaxed Jeans", None),
            product("2", "Linen Shirt", Some("Breathable summer weave")),
            product("3", "Chino Shorts", None),
            product("4", "Denim Jacket", Some("Pairs with your favourite JEANS")),
            product("5", "Leather Belt", None),
            product("6", "Canvas Sneaker", None),
            product("7", "Bootcut Jeans", Some("Stretch denim")),
            product("8", "Wool Beanie", None),
            product("9", "Rain Shell", None),
            product("10", "Cotton Tee", None),
        ]
    }

    fn ids(recommendation: &Recommendation) -> Vec<&str> {
        recommendation.products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_personalized_matches() {
        let history = SearchHistory::from_terms(["jeans"]);
        let result = recommend(&catalog(), &history);

        assert_eq!(result.kind, RecommendationKind::Personalized);
        assert_eq!(ids(&result), vec!["1", "4", "7"]);
    }

    #[test]
    fn test_empty_history_falls_back() {
        let catalog = catalog();
        let result = recommend(&catalog, &SearchHistory::new());

        assert_eq!(result.kind, RecommendationKind::Fallback);
        assert_eq!(result.products.len(), MAX_RECOMMENDATIONS);
        assert!(result.products.iter().all(|p| catalog.contains(p)));
    }

    #[test]
    fn test_empty_catalog_is_empty() {
        let history = SearchHistory::from_terms(["jeans"]);
        let result = recommend(&[], &history);

        assert_eq!(result.kind, RecommendationKind::Empty);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_catalog_and_history_is_empty() {
        let result = recommend(&[], &SearchHistory::new());
        assert_eq!(result, Recommendation::empty());
    }

    #[test]
    fn test_unmatched_history_falls_back() {
        let history = SearchHistory::from_terms(["tuxedo"]);
        let result = recommend(&catalog(), &history);
        assert_eq!(result.kind, RecommendationKind::Fallback);
        assert_eq!(result.products.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_personalized_is_capped() {
        let history = SearchHistory::from_terms(["e"]);
        let result = recommend(&catalog(), &history);
        assert_eq!(result.kind, RecommendationKind::Personalized);
        assert_eq!(result.products.len(), MAX_RECOMMENDATIONS);
        assert_eq!(ids(&result), vec!["1", "2", "4", "5", "6"]);
    }

    #[test]
    fn test_personalized_is_deterministic() {
        let catalog = catalog();
        let history = SearchHistory::from_terms(["denim", "shirt"]);
        let first = recommend(&catalog, &history);
        let second = recommend(&catalog, &history);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["2", "4", "7"]);
    }

    #[test]
    fn test_duplicate_ids_are_collapsed() {
        let mut catalog = catalog();
        catalog.push(product("1", "Relaxed Jeans", Some("listed twice")));
        let history = SearchHistory::from_terms(["jeans"]);

        let result = recommend(&catalog, &history);
        assert_eq!(ids(&result), vec!["1", "4", "7"]);
    }

    #[test]
    fn test_product_matching_several_terms_appears_once() {
        let history = SearchHistory::from_terms(["jeans", "denim", "bootcut"]);
        let result = recommend(&catalog(), &history);

        let unique: HashSet<&str> = ids(&result).into_iter().collect();
        assert_eq!(unique.len(), result.products.len());
        assert_eq!(ids(&result), vec!["1", "4", "7"]);
    }

    #[test]
    fn test_fallback_is_reproducible_with_seeded_rng() {
        let catalog = catalog();
        let history = SearchHistory::new();

        let first = recommend_with_rng(&catalog, &history, &mut StdRng::seed_from_u64(42));
        let second = recommend_with_rng(&catalog, &history, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        let unique: HashSet<&str> = ids(&first).into_iter().collect();
        assert_eq!(unique.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_fallback_small_catalog_returns_everything() {
        let catalog: Vec<Product> = catalog().into_iter().take(3).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let result = recommend_with_rng(&catalog, &SearchHistory::new(), &mut rng);

        assert_eq!(result.kind, RecommendationKind::Fallback);
        let mut got = ids(&result);
        got.sort_unstable();
        assert_eq!(got, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_output_never_exceeds_bound() {
        let mut big = Vec::new();
        for i in 0..50 {
            big.push(product(&i.to_string(), "Jeans", None));
        }
        let mut rng = StdRng::seed_from_u64(1);
        for history in [SearchHistory::new(), SearchHistory::from_terms(["jeans"])] {
            let result = recommend_with_rng(&big, &history, &mut rng);
            assert!(result.products.len() <= MAX_RECOMMENDATIONS);
        }
    }

    #[test]
    fn test_fallback_never_repeats_a_product() {
        let catalog = catalog();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = recommend_with_rng(&catalog, &SearchHistory::new(), &mut rng);
            let unique: HashSet<&str> = ids(&result).into_iter().collect();
            assert_eq!(unique.len(), result.products.len());
        }
    }
}
