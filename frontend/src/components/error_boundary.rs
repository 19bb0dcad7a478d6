//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt: format!("[{boundary_name}] {error_txt}"),
                        button {
                            style: "color: #1C212D; font-size: 18px; border: 1px solid #1C212D; background: white; padding: 8px 16px; border-radius: 5px; margin: 10px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "再試行"
                        }
                        // plain link: this boundary may sit outside the router
                        a {
                            href: "/",
                            style: "color: blue; font-size: 18px; margin: 10px;",
                            "レシピ一覧に戻る"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "24px",

            h1 {
                style: "color: darkred; font-size: 28px; margin: 5px;",
                "エラーが発生しました",
            }

            pre {
                style: "color: darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 600px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
