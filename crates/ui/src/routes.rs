use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use trivia_core::model::NavigationEvent;

use crate::views::{GameView, LostView, TitleView, WonView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TitleView)] Title {},
        #[route("/game", GameView)] Game {},
        #[route("/won/:target_count/:cleared_count", WonView)] Won { target_count: usize, cleared_count: usize },
        #[route("/lost", LostView)] Lost {},
}

impl From<NavigationEvent> for Route {
    fn from(event: NavigationEvent) -> Self {
        match event {
            NavigationEvent::Won {
                target_count,
                cleared_count,
            } => Route::Won {
                target_count,
                cleared_count,
            },
            NavigationEvent::Lost => Route::Lost {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-bar",
                Link { to: Route::Title {}, "Android Trivia" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
