//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdInfo, MdSearch};
use dioxus_free_icons::icons::md_navigation_icons::{MdClose, MdMenu};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::app_data::AppData;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    let app_data = use_context::<AppData>();
    let mut is_open = use_signal(|| false);
    let collapse_class = use_memo(move || if is_open() { "x-navbar-collapse open" } else { "x-navbar-collapse" });

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            nav {
                id: "x-navbar",
                style: "
                    position: sticky;
                    top: 0px;
                    z-index: 900;
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 16px;
                    padding: 12px 24px;
                    background-color: #F8F9FA;
                    border-bottom: 1px solid #DEE2E6;
                ",

                Link {
                    to: Route::all_recipes(),
                    style: "
                        font-size: 22px;
                        font-weight: 500;
                        color: #1C212D;
                        text-decoration: none;
                    ",
                    onclick: move |_| is_open.set(false),
                    "{app_data.config.site_title}"
                }

                button {
                    class: "x-navbar-toggler",
                    style: "
                        border: 1px solid rgba(0, 0, 0, 0.2);
                        border-radius: 6px;
                        background: none;
                        cursor: pointer;
                        padding: 4px 8px;
                    ",
                    onclick: move |_| {
                        *is_open.write() ^= true;
                    },
                    if is_open() {
                        Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                    } else {
                        Icon { icon: MdMenu, style: "width: 24px; height: 24px;" }
                    }
                }

                div {
                    class: "{collapse_class}",
                    NavbarLink { to: Route::all_recipes(), icon: MdSearch, label: "レシピ検索", on_navigate: move |_| is_open.set(false) }
                    NavbarLink { to: Route::AboutPage {}, icon: MdInfo, label: "About", on_navigate: move |_| is_open.set(false) }
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String, on_navigate: Callback<()>) -> Element {
    rsx! {
        Link {
            to: to,
            class: "x-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 4px 8px;
                border-radius: 6px;
                color: rgba(0, 0, 0, 0.7);
                text-decoration: none;
            ",
            onclick: move |_| on_navigate.call(()),
            Icon { icon: icon, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}
