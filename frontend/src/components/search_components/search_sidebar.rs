//! Sidebar form that edits a copy of the current query.
//!
//! Edits stay local until "検索" is pressed; only then is the query encoded
//! into the URL, which re-renders the result list.

use dioxus::{logger::tracing::info, prelude::*};
use common::search_query::{DurationField, SearchQuery, SetField};
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdRestore, MdSearch}}};

use crate::{
    components::search_components::{
        checkbox_group::CheckboxGroup,
        duration_range_input::DurationRangeInput,
        ingredient_groups_editor::{ExcludeIngredientsEditor, IngredientGroupsEditor},
    },
    data_definitions::app_data::AppData,
    routes::Route,
};

/// The query being edited, shared with the form sections below.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    pub modified_search_query: Signal<SearchQuery>,
}

#[component]
pub fn SearchSidebar(original_query: ReadSignal<SearchQuery>) -> Element {
    let app_data = use_context::<AppData>();
    let mut modified_search_query = use_signal(|| original_query.read().clone());
    // when url changes (the read signal given to us), we need to update the signals, as they are not reset by navigation.
    use_effect(move || {
        let new_query = original_query.read().clone();
        modified_search_query.set(new_query);
    });
    use_context_provider(|| SidebarContext { modified_search_query });

    let query_has_changed = use_memo(move || modified_search_query.read().normalized() != original_query.read().normalized());
    let trigger_search = use_callback(move |_: ()| {
        let query = modified_search_query.read().clone();
        info!("search submitted: {query}");
        navigator().push(Route::recipe_list_from_query(query));
    });
    let reset_search = use_callback(move |_: ()| {
        modified_search_query.set(SearchQuery::default());
        navigator().push(Route::all_recipes());
    });

    let search_button_color = if query_has_changed() { "#2563EB" } else { "#6B7280" };

    let genres = app_data.catalog.genres().into_iter().map(str::to_string).collect::<Vec<_>>();
    let kinds = app_data.catalog.kinds().into_iter().map(str::to_string).collect::<Vec<_>>();
    let difficulties = app_data.catalog.difficulties().into_iter().map(str::to_string).collect::<Vec<_>>();

    rsx! {
        div {
            id: "x-search-sidebar-form",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                padding: 16px;
            ",

            KeywordInput { trigger_search }

            CheckboxGroup { title: "ジャンル", field: SetField::Genre, options: genres }
            CheckboxGroup { title: "種類", field: SetField::Kind, options: kinds }
            CheckboxGroup { title: "難易度", field: SetField::Difficulty, options: difficulties }

            DurationRangeInput { title: "準備時間", field: DurationField::Prep }
            DurationRangeInput { title: "加熱時間", field: DurationField::Cook }

            IngredientGroupsEditor {}
            ExcludeIngredientsEditor {}

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 10px;
                ",
                button {
                    style: "
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 6px;
                        height: 40px;
                        border: 2px solid {search_button_color};
                        border-radius: 8px;
                        background: white;
                        color: {search_button_color};
                        font-size: 16px;
                        cursor: pointer;
                    ",
                    onclick: move |_| trigger_search(()),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                    "検索"
                }
                button {
                    class: "x-hover-shadow-background",
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 6px;
                        height: 40px;
                        padding: 0 12px;
                        border: 1px solid #D1D5DB;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        font-size: 14px;
                        cursor: pointer;
                    ",
                    onclick: move |_| reset_search(()),
                    Icon { icon: MdRestore, style: "width: 18px; height: 18px;" }
                    "リセット"
                }
            }
        }
    }
}

#[component]
fn KeywordInput(trigger_search: Callback<()>) -> Element {
    let mut modified_search_query = use_context::<SidebarContext>().modified_search_query;
    let keyword = use_memo(move || modified_search_query.read().keyword.clone().unwrap_or_default());
    rsx! {
        SidebarSection {
            title: "キーワード",
            input {
                r#type: "search",
                placeholder: "料理名やコメントから検索",
                style: "
                    width: 100%;
                    height: 36px;
                    padding: 4px 10px;
                    border: 1px solid rgba(101, 101, 101, 0.6);
                    border-radius: 8px;
                    font-size: 15px;
                ",
                value: "{keyword}",
                oninput: move |event: Event<FormData>| {
                    modified_search_query.write().set_keyword(&event.value());
                },
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        trigger_search(());
                    }
                },
            }
        }
    }
}

/// Titled block used by every part of the sidebar form.
#[component]
pub fn SidebarSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
            ",
            div {
                style: "
                    font-size: 14px;
                    font-weight: 600;
                    color: rgb(75, 87, 112);
                    border-bottom: 1px solid rgba(75, 87, 112, 0.3);
                    padding-bottom: 2px;
                ",
                "{title}"
            }
            {children}
        }
    }
}
