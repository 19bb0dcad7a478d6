use dioxus::prelude::*;
use common::recipe::Recipe;
use dioxus_free_icons::{Icon, IconShape, icons::{md_action_icons::{MdDashboard, MdSchedule}, md_content_icons::MdFlag, md_image_icons::MdTimer}};

/// Prep time, cook time, difficulty and genre, one per line.
#[component]
pub fn RecipeStats(recipe: ReadSignal<Recipe>) -> Element {
    let Recipe { prep_duration, cook_duration, difficulty, genre, .. } = recipe.read().clone();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 2px;
                font-size: 14px;
                color: rgba(0, 0, 0, 0.75);
            ",
            StatLine { icon: MdSchedule, text: "準備時間：{prep_duration}分" }
            StatLine { icon: MdTimer, text: "加熱時間：{cook_duration}分" }
            StatLine { icon: MdDashboard, text: "難易度：{difficulty}" }
            StatLine { icon: MdFlag, text: "ジャンル：{genre}" }
        }
    }
}

#[component]
pub fn StatLine<I: IconShape + Clone + PartialEq + 'static>(icon: I, text: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
            ",
            Icon { icon: icon, style: "width: 16px; height: 16px; color: rgba(0, 0, 0, 0.5); flex-shrink: 0;" }
            span { "{text}" }
        }
    }
}
