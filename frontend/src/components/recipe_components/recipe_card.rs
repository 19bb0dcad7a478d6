//! Recipe card shown in the result gallery.

use dioxus::prelude::*;
use common::recipe::Recipe;

use crate::{components::recipe_components::recipe_stats::RecipeStats, data_definitions::app_data::AppData, routes::Route};

#[component]
pub fn RecipeCard(recipe: ReadSignal<Recipe>) -> Element {
    let app_data = use_context::<AppData>();
    let Recipe { id, title, comment, .. } = recipe.read().clone();
    let image_url = app_data.config.image_url(&recipe.read());

    rsx! {
        Link {
            to: Route::RecipeDetailPage { id },
            class: "x-recipe-card",
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid rgba(0, 0, 0, 0.125);
                border-radius: 8px;
                overflow: hidden;
                width: 280px;
                flex-shrink: 0;
            ",
            img {
                src: "{image_url}",
                alt: "{title}",
                loading: "lazy",
                style: "
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                    background: #E5E7EB;
                ",
            }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 12px 16px 16px 16px;
                ",
                div {
                    style: "
                        font-size: 18px;
                        font-weight: 500;
                        color: rgb(0, 0, 0);
                    ",
                    "{title}"
                }
                div {
                    style: "
                        font-size: 14px;
                        line-height: 20px;
                        color: rgba(0, 0, 0, 0.7);
                        overflow: hidden;
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                    ",
                    "{comment}"
                }
                RecipeStats { recipe }
            }
        }
    }
}
