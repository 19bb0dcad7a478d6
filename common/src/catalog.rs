//! The recipe catalog, loaded once at startup and read-only afterwards.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{error::CatalogError, recipe::Recipe, search_query::SearchQuery};

const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// Recipes in id order. Ids are contiguous from the first record's id, so a
/// lookup is an offset into the list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCatalog {
    base_id: u32,
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let base_id = recipes.first().ok_or(CatalogError::Empty)?.id;
        for (offset, recipe) in recipes.iter().enumerate() {
            let expected = u64::from(base_id) + offset as u64;
            if u64::from(recipe.id) != expected {
                return Err(CatalogError::IdGap { expected, found: recipe.id });
            }
        }
        debug!(base_id, count = recipes.len(), "recipe catalog loaded");
        Ok(Self { base_id, recipes })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_RECIPES)
    }

    pub fn base_id(&self) -> u32 {
        self.base_id
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// `None` for ids below the base or past the end.
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        let offset = id.checked_sub(self.base_id)?;
        self.recipes.get(usize::try_from(offset).ok()?)
    }

    /// Full pass over the catalog, keeping catalog order.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Recipe> {
        let hits = self.recipes.iter().filter(|r| query.matches(r)).collect::<Vec<_>>();
        debug!(hits = hits.len(), total = self.recipes.len(), "filtered recipes");
        hits
    }

    pub fn genres(&self) -> Vec<&str> {
        self.distinct(|r| &r.genre)
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.distinct(|r| &r.kind)
    }

    pub fn difficulties(&self) -> Vec<&str> {
        self.distinct(|r| &r.difficulty)
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Recipe) -> &'a String) -> Vec<&'a str> {
        self.recipes
            .iter()
            .map(|r| field(r).as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
