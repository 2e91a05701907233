use dioxus::prelude::*;
use dioxus_router::Link;
use trivia_core::model::NavigationEvent;

use crate::routes::Route;
use crate::vm::map_result_screen;

#[component]
pub fn WonView(target_count: usize, cleared_count: usize) -> Element {
    let vm = map_result_screen(NavigationEvent::Won {
        target_count,
        cleared_count,
    });

    rsx! {
        div { class: "page won",
            h2 { "{vm.headline}" }
            p { "{vm.detail}" }
            Link { class: "button", to: Route::Game {}, "{vm.action_label}" }
        }
    }
}
