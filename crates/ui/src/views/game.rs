use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::start_game;

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    // A new session per mount; leaving the screen drops it.
    let mut game = use_signal(move || start_game(&ctx));
    let mut error = use_signal(|| None::<ViewError>);

    let screen = match &*game.read() {
        Ok(vm) => Ok(vm.screen()),
        Err(err) => Err(*err),
    };
    let error_message = error().map(ViewError::message);

    rsx! {
        div { class: "page game",
            match screen {
                Ok(screen) => rsx! {
                    h2 { "{screen.title}" }
                    p { class: "question", "{screen.question}" }
                    div { class: "answers",
                        for (index, text) in screen.answers.iter().enumerate() {
                            label { key: "{index}", class: "answer",
                                input {
                                    r#type: "radio",
                                    name: "answer",
                                    checked: screen.selected == Some(index),
                                    onchange: move |_| {
                                        if let Ok(vm) = game.write().as_mut() {
                                            vm.select(index);
                                        }
                                    },
                                }
                                "{text}"
                            }
                        }
                    }
                    {error_message.map(|message| rsx! { p { class: "error", "{message}" } })}
                    button {
                        class: "button",
                        onclick: move |_| {
                            let result = match game.write().as_mut() {
                                Ok(vm) => vm.submit(),
                                Err(_) => return,
                            };
                            match result {
                                Ok(Some(event)) => {
                                    tracing::debug!(?event, "leaving game screen");
                                    navigator.replace(Route::from(event));
                                }
                                Ok(None) => error.set(None),
                                Err(err) => error.set(Some(err)),
                            }
                        },
                        "Submit"
                    }
                },
                Err(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    Link { to: Route::Title {}, "Back" }
                },
            }
        }
    }
}
