use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn TitleView() -> Element {
    let ctx = use_context::<AppContext>();
    let count = ctx.question_bank().len();

    rsx! {
        div { class: "page title",
            h2 { "Android Trivia" }
            p { "{count} questions in the bank" }
            Link { class: "button", to: Route::Game {}, "Play" }
        }
    }
}
