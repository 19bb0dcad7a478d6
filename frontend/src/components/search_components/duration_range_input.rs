use dioxus::prelude::*;
use common::{duration_range::DurationRange, search_query::DurationField};

use crate::components::search_components::search_sidebar::{SidebarContext, SidebarSection};

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Min,
    Max,
}

/// Two number boxes, `min ～ max 分`. A cleared box leaves that end open.
#[component]
pub fn DurationRangeInput(title: String, field: DurationField) -> Element {
    rsx! {
        SidebarSection {
            title,
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    font-size: 15px;
                ",
                BoundInput { field, side: Side::Min }
                "～"
                BoundInput { field, side: Side::Max }
                "分"
            }
        }
    }
}

#[component]
fn BoundInput(field: DurationField, side: Side) -> Element {
    let mut query = use_context::<SidebarContext>().modified_search_query;
    let current = use_memo(move || {
        let range = query.read().duration(field).unwrap_or_default();
        let bound = match side {
            Side::Min => range.min,
            Side::Max => range.max,
        };
        bound.map(|v| v.to_string()).unwrap_or_default()
    });
    rsx! {
        input {
            r#type: "number",
            min: "0",
            step: "5",
            placeholder: if side == Side::Min { "下限なし" } else { "上限なし" },
            style: "
                width: 96px;
                height: 32px;
                padding: 2px 8px;
                border: 1px solid rgba(101, 101, 101, 0.6);
                border-radius: 6px;
                font-size: 15px;
            ",
            value: "{current}",
            oninput: move |event: Event<FormData>| {
                let text = event.value();
                let text = text.trim();
                let bound = if text.is_empty() {
                    None
                } else {
                    match text.parse::<u32>() {
                        Ok(v) => Some(v),
                        // half-typed input, keep the last valid value
                        Err(_) => return,
                    }
                };
                let mut query = query.write();
                let range = query.duration(field).unwrap_or_default();
                let range = match side {
                    Side::Min => DurationRange::new(bound, range.max),
                    Side::Max => DurationRange::new(range.min, bound),
                };
                query.set_duration(field, range);
            },
        }
    }
}
