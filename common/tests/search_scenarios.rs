use std::collections::BTreeSet;

use common::{
    catalog::RecipeCatalog,
    duration_range::DurationRange,
    recipe::{Ingredient, Recipe},
    search_query::SearchQuery,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn recipe_with(genre: &str, cook_duration: u32, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: 1,
        title: "テスト".to_string(),
        comment: String::new(),
        genre: genre.to_string(),
        kind: "主菜".to_string(),
        difficulty: "簡単".to_string(),
        prep_duration: 10,
        cook_duration,
        calorie: 300,
        servings: 2,
        ingredients: ingredients.iter().map(|n| Ingredient::new(*n)).collect(),
        instructions: vec![],
    }
}

#[fixture]
fn catalog() -> RecipeCatalog {
    RecipeCatalog::bundled().unwrap()
}

fn titles<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn shared_url_decodes_and_filters() {
    let query = SearchQuery::deserialize("?g=和風,洋風&cd=10-30&i=卵|牛乳,砂糖");
    assert_eq!(
        query,
        SearchQuery {
            genre: Some(set(&["和風", "洋風"])),
            cook_duration: Some(DurationRange::between(10, 30)),
            ingredients: Some(vec![set(&["卵", "牛乳"]), set(&["砂糖"])]),
            ..Default::default()
        }
    );

    let recipe = recipe_with("和風", 20, &["牛乳", "砂糖", "塩"]);
    assert!(query.matches(&recipe));

    let recipe = recipe_with("和風", 20, &["牛乳", "塩"]);
    assert!(!query.matches(&recipe));
}

#[test]
fn ingredient_groups_are_and_of_or() {
    let recipe = recipe_with("洋風", 10, &["卵", "牛乳"]);
    let mut query = SearchQuery {
        ingredients: Some(vec![set(&["卵", "バター"]), set(&["牛乳"])]),
        ..Default::default()
    };
    assert!(query.matches(&recipe));

    query.ingredients = Some(vec![set(&["卵", "バター"]), set(&["砂糖"])]);
    assert!(!query.matches(&recipe));
}

#[rstest]
#[case("")]
#[case("g=和風")]
#[case("kw=パン&d=簡単")]
#[case("i=小麦粉")]
fn exclusion_removes_flour_regardless_of_other_filters(catalog: RecipeCatalog, #[case] base: &str) {
    let separator = if base.is_empty() { "" } else { "&" };
    let query = SearchQuery::deserialize(&format!("{base}{separator}ei=小麦粉"));
    let hits = catalog.search(&query);
    assert!(hits.iter().all(|r| !r.ingredient_names().contains("小麦粉")));
}

#[rstest]
fn empty_query_matches_whole_catalog(catalog: RecipeCatalog) {
    let query = SearchQuery::default();
    assert!(catalog.iter().all(|r| query.matches(r)));
}

#[rstest]
fn bundled_catalog_scenario(catalog: RecipeCatalog) {
    let query = SearchQuery::deserialize("g=和風,洋風&cd=10-30&i=卵|牛乳,砂糖");
    assert_eq!(titles(&catalog.search(&query)), vec!["フレンチトースト", "パンケーキ"]);

    let query = SearchQuery::deserialize(&format!("{}&ei=小麦粉", query.serialize()));
    assert_eq!(titles(&catalog.search(&query)), vec!["フレンチトースト"]);
}

#[rstest]
fn keyword_is_a_literal_substring(catalog: RecipeCatalog) {
    let hits = catalog.search(&SearchQuery::deserialize("kw=おもてなし"));
    assert_eq!(titles(&hits), vec!["ビーフシチュー"]);
    // no kana or case folding
    assert!(catalog.search(&SearchQuery::deserialize("kw=ニクジャガ")).is_empty());
}

#[rstest]
fn inverted_range_yields_no_results(catalog: RecipeCatalog) {
    assert!(catalog.search(&SearchQuery::deserialize("pd=30-5")).is_empty());
    assert!(catalog.search(&SearchQuery::deserialize("cd=x-")).is_empty());
}

#[rstest]
fn detail_lookup_of_unknown_id_is_none(catalog: RecipeCatalog) {
    assert!(catalog.get(catalog.base_id() + catalog.len() as u32).is_none());
    assert!(catalog.get(catalog.base_id()).is_some());
}
