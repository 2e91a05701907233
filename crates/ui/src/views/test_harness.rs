use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{QuestionBank, Shuffle};

use crate::context::{UiApp, build_app_context};
use crate::views::{GameView, LostView, TitleView, WonView};

struct TestApp {
    question_bank: Arc<QuestionBank>,
    shuffle: Shuffle,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    fn shuffle(&self) -> Shuffle {
        self.shuffle
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Title,
    Game,
    Won {
        target_count: usize,
        cleared_count: usize,
    },
    Lost,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Title => rsx! { TitleView {} },
        ViewKind::Game => rsx! { GameView {} },
        ViewKind::Won {
            target_count,
            cleared_count,
        } => rsx! { WonView { target_count, cleared_count } },
        ViewKind::Lost => rsx! { LostView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_bank(view, QuestionBank::builtin())
}

pub fn setup_view_harness_with_bank(view: ViewKind, bank: QuestionBank) -> ViewHarness {
    let app = Arc::new(TestApp {
        question_bank: Arc::new(bank),
        shuffle: Shuffle::Seeded(7),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
