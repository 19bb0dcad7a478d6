//! Recipe records as shipped in the bundled dataset.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Canonical name, the key used for ingredient filters.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Footnote symbol shown next to the name, e.g. `A` for a sauce group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marking: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), detail: None, amount: None, marking: None }
    }

    /// `name（detail）` when a detail is present, otherwise just the name.
    pub fn label(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}（{}）", self.name, detail),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub comment: String,
    pub genre: String,
    pub kind: String,
    pub difficulty: String,
    /// Minutes.
    pub prep_duration: u32,
    /// Minutes.
    pub cook_duration: u32,
    /// kcal per serving.
    pub calorie: u32,
    /// Number of servings.
    #[serde(rename = "yield")]
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Photo file name, served from the configured image directory.
    pub fn image_file(&self) -> String {
        format!("{}.jpg", self.id)
    }

    pub fn ingredient_names(&self) -> BTreeSet<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}
