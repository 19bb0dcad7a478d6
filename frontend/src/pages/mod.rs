pub mod about_page;
pub mod not_found_page;
pub mod recipe_detail_page;
pub mod recipe_list_page;
