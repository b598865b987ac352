pub mod catalog;
pub mod filter;
pub mod providers;
pub mod recommendations;
pub mod recommender;
