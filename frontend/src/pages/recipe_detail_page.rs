//! Single recipe page: photo, timings, ingredients and steps.

use dioxus::prelude::*;
use common::recipe::{Ingredient, Recipe};
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdFormatListNumbered, md_navigation_icons::MdArrowBack, md_social_icons::{MdPeople, MdWhatshot}}};

use crate::{
    components::recipe_components::recipe_stats::{RecipeStats, StatLine},
    data_definitions::app_data::AppData,
    routes::Route,
};


/// Recipe detail page
#[component]
pub fn RecipeDetailPage(id: u32) -> Element {
    let app_data = use_context::<AppData>();
    let Some(recipe) = app_data.catalog.get(id).cloned() else {
        return rsx! {
            Title { "{app_data.config.site_title} - レシピが見つかりません" }
            RecipeNotFound { id }
        };
    };

    rsx! {
        Title { "{app_data.config.site_title} - {recipe.title}" }
        RecipeDetail { recipe }
    }
}

#[component]
fn RecipeDetail(recipe: ReadSignal<Recipe>) -> Element {
    let app_data = use_context::<AppData>();
    let Recipe { title, comment, calorie, servings, ingredients, instructions, .. } = recipe.read().clone();
    let image_url = app_data.config.image_url(&recipe.read());

    rsx! {
        div {
            id: "x-recipe-detail",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                max-width: 960px;
                margin: 0 auto;
                padding: 24px;
            ",
            BackButton {}

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 24px;
                ",
                img {
                    src: "{image_url}",
                    alt: "{title}",
                    style: "
                        width: 420px;
                        max-width: 100%;
                        border-radius: 12px;
                        object-fit: cover;
                        background: #E5E7EB;
                    ",
                }
                div {
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        flex: 1;
                        min-width: 260px;
                    ",
                    h1 { style: "font-size: 30px; font-weight: 500; margin: 0px;", "{title}" }
                    p { style: "font-size: 16px; line-height: 1.6; margin: 0px;", "{comment}" }
                    RecipeStats { recipe }
                    div {
                        style: "font-size: 14px; color: rgba(0, 0, 0, 0.75);",
                        StatLine { icon: MdWhatshot, text: "カロリー：{calorie}kcal" }
                        StatLine { icon: MdPeople, text: "{servings}人分" }
                    }
                }
            }

            IngredientTable { servings, ingredients }
            InstructionList { instructions }
        }
    }
}

#[component]
fn IngredientTable(servings: u32, ingredients: Vec<Ingredient>) -> Element {
    rsx! {
        section {
            h2 { style: "font-size: 22px; font-weight: 500; border-bottom: 2px solid #1C212D;", "材料（{servings}人分）" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 16px;",
                tbody {
                    for (index, ingredient) in ingredients.into_iter().enumerate() {
                        tr {
                            key: "{index}",
                            style: "border-bottom: 1px solid rgba(0, 0, 0, 0.1);",
                            td {
                                style: "padding: 6px 4px;",
                                if let Some(marking) = ingredient.marking.clone() {
                                    span { style: "color: #B45309; font-weight: 600; margin-right: 6px;", "{marking}" }
                                }
                                "{ingredient.label()}"
                            }
                            td {
                                style: "padding: 6px 4px; text-align: right; white-space: nowrap;",
                                "{ingredient.amount.clone().unwrap_or_default()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InstructionList(instructions: Vec<String>) -> Element {
    rsx! {
        section {
            h2 {
                style: "display: flex; align-items: center; gap: 8px; font-size: 22px; font-weight: 500; border-bottom: 2px solid #1C212D;",
                Icon { icon: MdFormatListNumbered, style: "width: 24px; height: 24px;" }
                "作り方"
            }
            ol {
                style: "font-size: 16px; line-height: 1.7; padding-left: 24px;",
                for (index, step) in instructions.into_iter().enumerate() {
                    li { key: "{index}", style: "margin-bottom: 8px;", "{step}" }
                }
            }
        }
    }
}

#[component]
fn BackButton() -> Element {
    rsx! {
        button {
            class: "x-hover-shadow-background",
            style: "
                align-self: flex-start;
                display: flex;
                align-items: center;
                gap: 6px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                padding: 6px 12px;
                font-size: 14px;
                cursor: pointer;
            ",
            // back keeps the search the user came from
            onclick: move |_| navigator().go_back(),
            Icon { icon: MdArrowBack, style: "width: 18px; height: 18px;" }
            "戻る"
        }
    }
}

#[component]
fn RecipeNotFound(id: u32) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                padding: 60px 24px;
            ",
            h1 { style: "font-size: 26px; font-weight: 500;", "レシピが見つかりません" }
            p { style: "color: rgba(0, 0, 0, 0.6);", "ID {id} のレシピは存在しません。" }
            Link { to: Route::all_recipes(), "レシピ一覧へ" }
        }
    }
}
