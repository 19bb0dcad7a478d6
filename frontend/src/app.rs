use dioxus::prelude::*;

use crate::components::error_boundary::{ComponentErrorDisplay, GlobalErrorBoundary};
use crate::data_definitions::app_data::AppData;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let app_data = use_hook(|| AppData::load().map_err(|e| format!("{e:#}")));
    let body = match app_data {
        Ok(data) => rsx! { AppWithData { data } },
        Err(error_txt) => rsx! { ComponentErrorDisplay { error_txt } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            {body}
        }
    }
}

#[component]
fn AppWithData(data: AppData) -> Element {
    use_context_provider(move || data.clone());
    rsx! {
        Router::<Route> {}
    }
}
