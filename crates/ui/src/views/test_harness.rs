use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Question, QuestionBank, QuizSettings};
use storage::{QuestionSource, SessionStore, Storage};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{LandingView, QuizView, ResultsView};

struct TestApp {
    storage: Storage,
}

impl UiApp for TestApp {
    fn questions(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.storage.questions)
    }

    fn session_store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.storage.session)
    }

    fn settings(&self) -> QuizSettings {
        QuizSettings::default()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Quiz(String),
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_context_provider(|| props.view.clone());
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
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Quiz(query) => rsx! { QuizView { query } },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub ctx: AppContext,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_bank() -> QuestionBank {
    let mut bank = QuestionBank::new();
    bank.insert(
        "general",
        "easy",
        (1..=3).map(|n| {
            Question::new(
                format!("Question {n}"),
                vec![format!("Right {n}"), format!("Wrong {n}")],
                format!("Right {n}"),
            )
            .unwrap()
        }),
    );
    bank.insert(
        "science",
        "hard",
        [Question::new("H2O is?", vec!["Water".into(), "Salt".into()], "Water").unwrap()],
    );
    bank
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory(test_bank());
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        storage: storage.clone(),
    });
    let ctx = build_app_context(&app);

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            ctx: ctx.clone(),
            view,
        },
    );

    ViewHarness { dom, storage, ctx }
}
