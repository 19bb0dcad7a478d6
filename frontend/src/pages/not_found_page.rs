use dioxus::prelude::*;

use crate::routes::Route;


/// Fallback for unknown paths
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "ページが見つかりません" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                padding: 60px 24px;
            ",
            h1 { style: "font-size: 26px; font-weight: 500;", "ページが見つかりません" }
            pre { style: "color: rgba(0, 0, 0, 0.6);", "/{path}" }
            Link { to: Route::all_recipes(), "レシピ一覧へ" }
        }
    }
}
