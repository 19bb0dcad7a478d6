use dioxus::prelude::*;

use common::{recipe::Recipe, search_query::SearchQuery};
use crate::{
    components::{
        recipe_components::recipe_card::RecipeCard,
        search_components::{search_sidebar::SearchSidebar, share_link_button::ShareLinkButton},
    },
    data_definitions::{app_data::AppData, url_query::UrlQuery},
};


/// Recipe gallery filtered by the query string.
#[component]
pub fn RecipeListPage(query: UrlQuery) -> Element {
    let app_data = use_context::<AppData>();
    let UrlQuery(query) = query;
    let title = if query.is_unconstrained() {
        app_data.config.site_title.clone()
    } else {
        format!("{} - {}", app_data.config.site_title, query.describe())
    };

    rsx! {
        Title { "{title}" }
        RecipeListPageRootComponent { query }
    }
}

#[component]
fn RecipeListPageRootComponent(query: ReadSignal<SearchQuery>) -> Element {
    let app_data = use_context::<AppData>();
    let catalog = app_data.catalog.clone();
    // every navigation is a fresh pass over the whole catalog
    let results = use_memo(move || {
        catalog
            .search(&query.read())
            .into_iter()
            .cloned()
            .collect::<Vec<Recipe>>()
    });
    let description = use_memo(move || query.read().describe());
    let total = app_data.catalog.len();

    rsx! {
        div {
            id: "x-recipe-list-page-root",
            style: r#"
                width: 100%;
                display: flex;
                flex-direction: row;
                align-items: flex-start;
            "#,
            div {
                id: "x-search-sidebar",
                style: "
                    position: sticky;
                    top: 61px;
                    width: 320px;
                    flex-shrink: 0;
                    max-height: calc(100vh - 61px);
                    overflow-y: auto;
                    background-color: #ECEEF2;
                    border-right: 1px solid rgb(210, 214, 220);
                ",
                SearchSidebar { original_query: query }
            }

            div {
                id: "x-recipe-results",
                style: "
                    flex-grow: 1;
                    min-width: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding: 16px 24px;
                ",
                div {
                    id: "x-recipe-results-title-row",
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 12px;
                    ",
                    h1 {
                        style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); margin: 0px;",
                        "{results.read().len()} / {total} 件"
                    }
                    if !description().is_empty() {
                        div {
                            style: "
                                font-size: 15px;
                                color: rgb(75, 87, 112);
                                white-space: pre-wrap;
                            ",
                            "{description}"
                        }
                    }
                    div { style: "flex-grow: 1;" }
                    ShareLinkButton {}
                }

                RecipeGallery { results }
            }
        }
    }
}

#[component]
fn RecipeGallery(results: ReadSignal<Vec<Recipe>>) -> Element {
    if results.read().is_empty() {
        return rsx! {
            div {
                style: "
                    padding: 40px;
                    text-align: center;
                    font-size: 18px;
                    color: rgba(0, 0, 0, 0.5);
                ",
                "条件に合うレシピが見つかりませんでした。"
            }
        };
    }
    rsx! {
        div {
            id: "x-recipe-gallery",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: stretch;
                gap: 16px;
            ",
            for recipe in results.read().iter().cloned() {
                RecipeCard { key: "{recipe.id}", recipe }
            }
        }
    }
}
