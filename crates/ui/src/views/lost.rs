use dioxus::prelude::*;
use dioxus_router::Link;
use trivia_core::model::NavigationEvent;

use crate::routes::Route;
use crate::vm::map_result_screen;

#[component]
pub fn LostView() -> Element {
    let vm = map_result_screen(NavigationEvent::Lost);

    rsx! {
        div { class: "page lost",
            h2 { "{vm.headline}" }
            p { "{vm.detail}" }
            Link { class: "button", to: Route::Game {}, "{vm.action_label}" }
        }
    }
}
