pub mod recipe_card;
pub mod recipe_stats;
