mod filter;
mod history;
mod product;
mod recommendation;

pub use filter::{FilterSpec, PriceRange, DEFAULT_PRICE_CEILING};
pub use history::{SearchHistory, HISTORY_CAPACITY};
pub use product::{Category, Product, Size};
pub use recommendation::{Recommendation, RecommendationKind, MAX_RECOMMENDATIONS};
