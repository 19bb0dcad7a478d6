//! Editors for the ingredient filters: OR-groups that must all be satisfied,
//! and a list of ingredients to leave out.

use dioxus::prelude::*;
use common::search_query::SetField;

use crate::components::search_components::{
    ingredient_picker::{IngredientChip, IngredientPicker},
    search_sidebar::{SidebarContext, SidebarSection},
};

#[component]
pub fn IngredientGroupsEditor() -> Element {
    let mut query = use_context::<SidebarContext>().modified_search_query;
    let groups = query.read().ingredients.clone().unwrap_or_default();
    let all_chosen = groups.iter().flatten().cloned().collect::<Vec<_>>();
    let next_index = groups.len();
    let placeholder = if next_index == 0 { "材料を追加…" } else { "さらに条件を追加（かつ）…" }.to_string();

    rsx! {
        SidebarSection {
            title: "材料",
            for (index, group) in groups.into_iter().enumerate() {
                div {
                    key: "{index}-{group.len()}",
                    if index > 0 {
                        div {
                            style: "font-size: 12px; color: rgba(0, 0, 0, 0.5); text-align: center;",
                            "かつ"
                        }
                    }
                    IngredientOrGroup { index, names: group.into_iter().collect::<Vec<_>>() }
                }
            }
            IngredientPicker {
                placeholder,
                exclude: all_chosen,
                on_pick: move |name: String| query.write().add_to_ingredient_group(next_index, &name),
            }
        }
    }
}

/// One OR-group: a recipe needs at least one of these.
#[component]
fn IngredientOrGroup(index: usize, names: Vec<String>) -> Element {
    let mut query = use_context::<SidebarContext>().modified_search_query;
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 8px;
                border: 1px solid rgba(0, 0, 0, 0.15);
                border-radius: 8px;
                background: white;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 4px;
                ",
                for (i, name) in names.iter().cloned().enumerate() {
                    span {
                        key: "{name}",
                        style: "display: inline-flex; align-items: center; gap: 4px;",
                        if i > 0 {
                            span { style: "font-size: 12px; color: rgba(0, 0, 0, 0.5);", "or" }
                        }
                        IngredientChip {
                            name: name.clone(),
                            on_remove: move |name: String| query.write().remove_from_ingredient_group(index, &name),
                        }
                    }
                }
            }
            IngredientPicker {
                placeholder: "または…",
                exclude: names.clone(),
                on_pick: move |name: String| query.write().add_to_ingredient_group(index, &name),
            }
        }
    }
}

#[component]
pub fn ExcludeIngredientsEditor() -> Element {
    let mut query = use_context::<SidebarContext>().modified_search_query;
    let excluded = query
        .read()
        .set_field(SetField::ExcludeIngredients)
        .map(|set| set.iter().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    rsx! {
        SidebarSection {
            title: "除外する材料",
            if !excluded.is_empty() {
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        gap: 4px;
                    ",
                    for name in excluded.iter().cloned() {
                        IngredientChip {
                            key: "{name}",
                            name: name.clone(),
                            on_remove: move |name: String| query.write().toggle_value(SetField::ExcludeIngredients, &name, false),
                        }
                    }
                }
            }
            IngredientPicker {
                placeholder: "除外する材料を追加…",
                exclude: excluded.clone(),
                on_pick: move |name: String| query.write().toggle_value(SetField::ExcludeIngredients, &name, true),
            }
        }
    }
}
