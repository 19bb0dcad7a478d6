pub mod error_boundary;
pub mod navbar;
pub mod recipe_components;
pub mod search_components;
