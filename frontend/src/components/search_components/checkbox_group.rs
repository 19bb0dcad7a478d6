use dioxus::prelude::*;
use common::search_query::SetField;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::components::search_components::search_sidebar::{SidebarContext, SidebarSection};

/// Checkbox list over the values present in the catalog. Nothing checked
/// means no constraint on the field.
#[component]
pub fn CheckboxGroup(title: String, field: SetField, options: Vec<String>) -> Element {
    rsx! {
        SidebarSection {
            title,
            ul {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 2px 10px;
                    list-style: none;
                    padding: 0px;
                    margin: 0px;
                ",
                for option in options {
                    li {
                        key: "{option}",
                        FieldCheckbox { field, value: option.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldCheckbox(field: SetField, value: ReadSignal<String>) -> Element {
    let mut query = use_context::<SidebarContext>().modified_search_query;
    let is_checked = use_memo(move || query.read().has_value(field, &value.read()));
    rsx! {
        div {
            class: "x-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: row;
                gap: 4px;
                cursor: pointer;
                padding: 2px 4px;
                border-radius: 4px;
                align-items: center;
                user-select: none;
            ",
            onclick: move |_e| {
                let should_add = !is_checked();
                query.write().toggle_value(field, &value.read(), should_add);
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            span {
                style: "font-size: 15px; color: rgb(0, 0, 0);",
                "{value}"
            }
        }
    }
}
