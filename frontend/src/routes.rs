use dioxus::prelude::*;

use common::search_query::SearchQuery;
use crate::components::navbar::Navbar;
use crate::data_definitions::url_query::UrlQuery;

use crate::pages::about_page::AboutPage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::recipe_detail_page::RecipeDetailPage;
use crate::pages::recipe_list_page::RecipeListPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    // the whole search state lives in the query string, e.g. `/?g=和風&cd=10-30`
    #[route("/?:..query")]
    RecipeListPage { query: UrlQuery },


    #[route("/recipe/:id")]
    RecipeDetailPage { id: u32 },


    #[route("/about")]
    AboutPage {},


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    pub fn recipe_list_from_query(query: SearchQuery) -> Self {
        Self::RecipeListPage { query: UrlQuery(query.normalized()) }
    }

    pub fn all_recipes() -> Self {
        Self::RecipeListPage { query: UrlQuery::default() }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use common::duration_range::DurationRange;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn parse(url: &str) -> Route {
        url.parse::<Route>().unwrap_or_else(|_| panic!("unparsable route {url}"))
    }

    fn through_url(query: SearchQuery) -> Route {
        parse(&Route::recipe_list_from_query(query).to_string())
    }

    fn list_page(query: SearchQuery) -> Route {
        Route::RecipeListPage { query: UrlQuery(query) }
    }

    #[rstest]
    #[case("ハム&チーズ")]
    #[case("C++")]
    #[case("x&g=和風")]
    #[case("100%")]
    #[case("%41")]
    #[case("a b  c")]
    #[case("#1 おすすめ?")]
    #[case("=")]
    fn keyword_survives_navigation(#[case] keyword: &str) {
        let query = SearchQuery { keyword: Some(keyword.to_string()), ..Default::default() };
        assert_eq!(through_url(query.clone()), list_page(query));
    }

    #[test]
    fn reserved_characters_in_names_survive_navigation() {
        let query = SearchQuery {
            genre: Some(set(&["和風", "a&b"])),
            kind: Some(set(&["x+y"])),
            difficulty: Some(set(&["50%"])),
            cook_duration: Some(DurationRange::between(10, 30)),
            ingredients: Some(vec![set(&["卵&牛乳", "砂糖"]), set(&["k=v"])]),
            exclude_ingredients: Some(set(&["小麦 粉"])),
            ..Default::default()
        };
        assert_eq!(through_url(query.clone()), list_page(query));
    }

    #[rstest]
    #[case("/?g=和風,洋風&cd=10-30&i=卵|牛乳,砂糖")]
    #[case("/?g=%E5%92%8C%E9%A2%A8,%E6%B4%8B%E9%A2%A8&cd=10-30&i=%E5%8D%B5|%E7%89%9B%E4%B9%B3,%E7%A0%82%E7%B3%96")]
    fn hand_written_links_decode(#[case] url: &str) {
        let expected = SearchQuery {
            genre: Some(set(&["和風", "洋風"])),
            cook_duration: Some(DurationRange::between(10, 30)),
            ingredients: Some(vec![set(&["卵", "牛乳"]), set(&["砂糖"])]),
            ..Default::default()
        };
        assert_eq!(parse(url), list_page(expected));
    }

    #[test]
    fn other_routes_still_parse() {
        assert_eq!(parse("/"), Route::all_recipes());
        assert_eq!(parse("/recipe/1430"), Route::RecipeDetailPage { id: 1430 });
        assert_eq!(parse("/about"), Route::AboutPage {});
    }

    fn name() -> impl Strategy<Value = String> {
        "[a-z0-9 &=+%#?ぁ-んァ-ン一-龯]{1,6}"
    }

    fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::btree_set(name(), 1..4)
    }

    prop_compose! {
        fn navigable_query()(
            keyword in prop::option::of("\\PC{1,10}"),
            genre in prop::option::of(name_set()),
            cook_duration in prop::option::of((0u32..200, 0u32..200)),
            ingredients in prop::option::of(prop::collection::vec(name_set(), 1..4)),
            exclude_ingredients in prop::option::of(name_set()),
        ) -> SearchQuery {
            SearchQuery {
                keyword,
                genre,
                cook_duration: cook_duration.map(|(min, max)| DurationRange::between(min, max)),
                ingredients,
                exclude_ingredients,
                ..Default::default()
            }
        }
    }

    proptest! {
        #[test]
        fn navigation_reproduces_query(query in navigable_query()) {
            prop_assert_eq!(through_url(query.clone()), list_page(query));
        }
    }
}
