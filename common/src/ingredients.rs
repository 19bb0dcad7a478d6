//! Grouped ingredient vocabulary used by the ingredient pickers.
//!
//! The lookup table is built once from the bundled data and handed to
//! consumers by reference.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::VocabularyError, romaji::RomajiTable};

const BUNDLED_INGREDIENTS: &str = include_str!("../data/ingredients.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Canonical name, matches `Ingredient::name` in the recipes.
    pub name: String,
    /// Hiragana reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    /// Alternative spellings that resolve to `name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl IngredientEntry {
    fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.reading.as_deref())
            .chain(self.aliases.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientGroup {
    pub genre: String,
    pub options: Vec<IngredientEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientVocabulary {
    groups: Vec<IngredientGroup>,
    /// name or alias -> (group index, option index)
    index: BTreeMap<String, (usize, usize)>,
}

impl IngredientVocabulary {
    pub fn new(groups: Vec<IngredientGroup>) -> Result<Self, VocabularyError> {
        let mut index = BTreeMap::new();
        for (g, group) in groups.iter().enumerate() {
            for (o, entry) in group.options.iter().enumerate() {
                if index.insert(entry.name.clone(), (g, o)).is_some() {
                    return Err(VocabularyError::DuplicateName(entry.name.clone()));
                }
            }
        }
        // aliases never shadow a canonical name
        for (g, group) in groups.iter().enumerate() {
            for (o, entry) in group.options.iter().enumerate() {
                for alias in &entry.aliases {
                    index.entry(alias.clone()).or_insert((g, o));
                }
            }
        }
        debug!(groups = groups.len(), keys = index.len(), "ingredient vocabulary loaded");
        Ok(Self { groups, index })
    }

    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let groups: Vec<IngredientGroup> = serde_json::from_str(json)?;
        Self::new(groups)
    }

    pub fn bundled() -> Result<Self, VocabularyError> {
        Self::from_json(BUNDLED_INGREDIENTS)
    }

    pub fn groups(&self) -> &[IngredientGroup] {
        &self.groups
    }

    /// Finds an entry by canonical name or alias.
    pub fn lookup(&self, name: &str) -> Option<&IngredientEntry> {
        let &(g, o) = self.index.get(name)?;
        self.groups.get(g)?.options.get(o)
    }

    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|e| e.name.as_str())
    }

    /// Entries whose name, reading or an alias starts with `prefix`, in
    /// vocabulary order. An empty prefix suggests nothing.
    pub fn suggest(&self, prefix: &str) -> Vec<&IngredientEntry> {
        self.suggest_any(&[prefix.to_string()])
    }

    /// Same as [`suggest`](Self::suggest), also reading `input` as romaji, so
    /// `tamag` finds 卵 through its reading たまご.
    pub fn suggest_with_romaji(&self, input: &str, romaji: &RomajiTable) -> Vec<&IngredientEntry> {
        let mut prefixes = romaji.kana_prefixes(input);
        prefixes.push(input.to_string());
        self.suggest_any(&prefixes)
    }

    fn suggest_any(&self, prefixes: &[String]) -> Vec<&IngredientEntry> {
        let prefixes = prefixes.iter().filter(|p| !p.is_empty()).collect::<Vec<_>>();
        if prefixes.is_empty() {
            return Vec::new();
        }
        self.groups
            .iter()
            .flat_map(|g| g.options.iter())
            .filter(|entry| {
                entry
                    .keys()
                    .any(|key| prefixes.iter().any(|prefix| key.starts_with(prefix.as_str())))
            })
            .collect()
    }
}
