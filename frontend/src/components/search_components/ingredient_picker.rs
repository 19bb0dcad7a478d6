//! Ingredient chooser fed by the vocabulary: a grouped select plus a
//! lookup box taking readings, romaji or aliases.

use common::{ingredients::IngredientVocabulary, romaji::RomajiTable};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::data_definitions::app_data::AppData;

#[component]
pub fn IngredientPicker(placeholder: String, exclude: Vec<String>, on_pick: Callback<String>) -> Element {
    let app_data = use_context::<AppData>();
    let mut filter = use_signal(String::new);

    let suggestions = app_data
        .vocabulary
        .suggest_with_romaji(&filter.read(), &app_data.romaji)
        .into_iter()
        .filter(|entry| !exclude.contains(&entry.name))
        .map(|entry| entry.name.clone())
        .collect::<Vec<_>>();
    // a picked name drops out of its optgroup, which puts the select back on the placeholder
    let groups = app_data
        .vocabulary
        .groups()
        .iter()
        .map(|group| {
            let names = group
                .options
                .iter()
                .filter(|entry| !exclude.contains(&entry.name))
                .map(|entry| entry.name.clone())
                .collect::<Vec<_>>();
            (group.genre.clone(), names)
        })
        .filter(|(_, names)| !names.is_empty())
        .collect::<Vec<_>>();
    let mut pick_typed = {
        let app_data = app_data.clone();
        let exclude = exclude.clone();
        move || {
            let typed = filter.read().clone();
            if let Some(name) = resolve_typed(&app_data.vocabulary, &app_data.romaji, &typed, &exclude) {
                filter.set(String::new());
                on_pick.call(name);
            }
        }
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
            ",
            select {
                style: "
                    height: 32px;
                    border: 1px solid rgba(101, 101, 101, 0.6);
                    border-radius: 6px;
                    font-size: 14px;
                    background: white;
                ",
                onchange: move |event: Event<FormData>| {
                    let name = event.value();
                    if !name.is_empty() {
                        on_pick.call(name);
                    }
                },
                option { value: "", selected: true, "{placeholder}" }
                for (genre, names) in groups {
                    optgroup {
                        key: "{genre}",
                        label: "{genre}",
                        for name in names {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
            }
            input {
                r#type: "text",
                placeholder: "よみ・ローマ字で探す（例：tamago）",
                style: "
                    height: 30px;
                    padding: 2px 8px;
                    border: 1px solid rgba(101, 101, 101, 0.4);
                    border-radius: 6px;
                    font-size: 13px;
                ",
                value: "{filter}",
                oninput: move |event: Event<FormData>| filter.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        pick_typed();
                    }
                },
            }
            if !suggestions.is_empty() {
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        gap: 4px;
                    ",
                    for name in suggestions {
                        button {
                            key: "{name}",
                            class: "x-hover-shadow-background",
                            style: "
                                border: 1px dashed rgba(0, 0, 0, 0.4);
                                border-radius: 1000px;
                                background: white;
                                padding: 2px 10px;
                                font-size: 13px;
                                cursor: pointer;
                            ",
                            onclick: {
                                let name = name.clone();
                                move |_| {
                                    filter.set(String::new());
                                    on_pick.call(name.clone());
                                }
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

/// Name picked by pressing Enter in the lookup box: the canonical name of an
/// exact name or alias, otherwise the only suggestion left.
fn resolve_typed(
    vocabulary: &IngredientVocabulary,
    romaji: &RomajiTable,
    typed: &str,
    exclude: &[String],
) -> Option<String> {
    let typed = typed.trim();
    let name = match vocabulary.canonical_name(typed) {
        Some(name) => name.to_string(),
        None => match vocabulary.suggest_with_romaji(typed, romaji).as_slice() {
            [only] => only.name.clone(),
            _ => return None,
        },
    };
    (!exclude.contains(&name)).then_some(name)
}

/// A chosen ingredient with a remove button.
#[component]
pub fn IngredientChip(name: String, on_remove: Callback<String>) -> Element {
    rsx! {
        span {
            style: "
                display: inline-flex;
                flex-direction: row;
                align-items: center;
                gap: 2px;
                padding: 2px 4px 2px 10px;
                border: 1px solid rgba(0, 0, 255, 0.5);
                border-radius: 1000px;
                background: #EEF2FF;
                font-size: 14px;
                white-space: nowrap;
            ",
            "{name}"
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                    padding: 0px;
                    display: flex;
                ",
                onclick: {
                    let name = name.clone();
                    move |_| on_remove.call(name.clone())
                },
                Icon { icon: MdClose, style: "width: 16px; height: 16px; color: rgba(0, 0, 0, 0.6);" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(typed: &str, exclude: &[&str]) -> Option<String> {
        let vocabulary = IngredientVocabulary::bundled().unwrap();
        let romaji = RomajiTable::bundled().unwrap();
        let exclude = exclude.iter().map(|e| e.to_string()).collect::<Vec<_>>();
        resolve_typed(&vocabulary, &romaji, typed, &exclude)
    }

    #[test]
    fn aliases_resolve_to_canonical_names() {
        assert_eq!(resolve("玉子", &[]).as_deref(), Some("卵"));
        assert_eq!(resolve(" 人参 ", &[]).as_deref(), Some("にんじん"));
        assert_eq!(resolve("醤油", &[]).as_deref(), Some("しょうゆ"));
    }

    #[test]
    fn single_suggestion_is_picked() {
        assert_eq!(resolve("tamag", &[]).as_deref(), Some("卵"));
        assert_eq!(resolve("tama", &[]), None);
        assert_eq!(resolve("ドラゴンフルーツ", &[]), None);
    }

    #[test]
    fn already_chosen_names_are_not_picked_again() {
        assert_eq!(resolve("玉子", &["卵"]), None);
    }
}
