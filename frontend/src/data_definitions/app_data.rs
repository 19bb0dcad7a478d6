//! Data loaded once at startup and shared with every page through context.

use std::rc::Rc;

use anyhow::Context;
use common::{catalog::RecipeCatalog, ingredients::IngredientVocabulary, romaji::RomajiTable};
use dioxus::logger::tracing::info;

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct AppData {
    pub catalog: Rc<RecipeCatalog>,
    pub vocabulary: Rc<IngredientVocabulary>,
    pub romaji: Rc<RomajiTable>,
    pub config: Rc<AppConfig>,
}

impl AppData {
    pub fn load() -> anyhow::Result<Self> {
        let catalog = RecipeCatalog::bundled().context("loading bundled recipes")?;
        let vocabulary = IngredientVocabulary::bundled().context("loading bundled ingredient list")?;
        let romaji = RomajiTable::bundled().context("loading romaji table")?;
        info!("loaded {} recipes", catalog.len());
        Ok(Self {
            catalog: Rc::new(catalog),
            vocabulary: Rc::new(vocabulary),
            romaji: Rc::new(romaji),
            config: Rc::new(AppConfig::load()),
        })
    }
}

// the data never changes after load, so identity is enough
impl PartialEq for AppData {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.vocabulary, &other.vocabulary)
            && Rc::ptr_eq(&self.romaji, &other.romaji)
            && Rc::ptr_eq(&self.config, &other.config)
    }
}
