use dioxus::prelude::*;

use crate::{data_definitions::app_data::AppData, routes::Route};


/// About page
#[component]
pub fn AboutPage() -> Element {
    let app_data = use_context::<AppData>();
    let recipe_count = app_data.catalog.len();
    rsx! {
        Title { "{app_data.config.site_title} - About" }
        div {
            id: "x-about-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                max-width: 720px;
                margin: 0 auto;
                padding: 36px 24px;
                font-size: 17px;
                line-height: 1.7;
                color: #111827;
            ",
            h1 { style: "font-size: 32px; font-weight: 500; margin: 0px;", "{app_data.config.site_title}について" }
            p { "電気圧力鍋で作れるレシピ {recipe_count} 品を、ジャンル・種類・難易度・調理時間・材料で絞り込めます。" }
            p { "検索条件はすべてURLに保存されるので、ブラウザの戻る・進むで条件をたどったり、リンクを共有して同じ検索結果を見てもらえます。" }
            p { "材料の条件は「グループのどれか1つを含む」を「すべてのグループで満たす」組み合わせです。例えば「卵 or 牛乳」かつ「砂糖」のように指定できます。" }
            Link { to: Route::all_recipes(), "レシピを探す" }
        }
    }
}
