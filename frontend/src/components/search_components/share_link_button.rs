//! Copies the current URL, which carries the whole search, to the clipboard.

use dioxus::{logger::tracing::{info, warn}, prelude::*};
use dioxus_free_icons::{Icon, icons::md_content_icons::MdLink};

#[component]
pub fn ShareLinkButton() -> Element {
    let mut copied = use_signal(|| false);
    let do_copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else { return };
        let Ok(url) = window.location().href() else { return };
        let promise = window.navigator().clipboard().write_text(&url);
        spawn(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => {
                    info!("Link copied to clipboard: {url}");
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    copied.set(false);
                }
                Err(e) => warn!("Failed to copy link: {e:?}"),
            }
        });
    });

    rsx! {
        button {
            class: "x-hover-shadow-background",
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                height: 34px;
                padding: 0 12px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                color: #111827;
                font-size: 14px;
                cursor: pointer;
                flex-shrink: 0;
            ",
            onclick: move |_| do_copy_link(()),
            Icon { icon: MdLink, style: "width: 18px; height: 18px;" }
            if copied() { "コピーしました" } else { "検索条件のリンクをコピー" }
        }
    }
}
