//! Build-time settings. Each value can be overridden through an environment
//! variable at compile time; a missing one falls back to its default.

use common::recipe::Recipe;
use dioxus::logger::tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub site_title: String,
    /// Path prefix the recipe photos are served under.
    pub image_base: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            site_title: try_load("RECIPES_SITE_TITLE", option_env!("RECIPES_SITE_TITLE"), "C4M-E Recipes"),
            image_base: try_load("RECIPES_IMAGE_BASE", option_env!("RECIPES_IMAGE_BASE"), "/imgs"),
        }
    }

    pub fn image_url(&self, recipe: &Recipe) -> String {
        format!("{}/{}", self.image_base.trim_end_matches('/'), recipe.image_file())
    }
}

fn try_load(key: &str, value: Option<&str>, default: &str) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => value.to_string(),
        None => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}
