use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::quiz::{Destination, QuizController, QuizHandle, format_remaining};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{QuizScreenVm, SignalDisplay};

#[component]
pub fn QuizView(query: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let screen = use_signal(QuizScreenVm::default);
    let remaining = use_signal(|| ctx.settings().seconds_per_question());
    let mut selection = use_signal(|| None::<String>);
    let destination = use_signal(|| None::<Destination>);
    let mut handle = use_signal(|| None::<QuizHandle>);

    // The controller lives in this task; leaving the page drops it and its timer.
    use_hook(move || {
        let ctx = ctx.clone();
        spawn(async move {
            let display = SignalDisplay {
                screen,
                remaining,
                selection,
                destination,
                ctx: ctx.clone(),
            };
            let questions = ctx.questions();
            let Ok(controller) = QuizController::load_from_query(
                &query,
                questions.as_ref(),
                ctx.session_store(),
                ctx.settings(),
                display,
            ) else {
                return;
            };
            handle.set(Some(controller.handle()));
            if let Err(err) = controller.run().await {
                tracing::warn!(error = %err, "quiz stopped early");
            }
        })
    });

    use_effect(move || match destination() {
        Some(Destination::Landing) => {
            let _ = navigator.replace(Route::Landing {});
        }
        Some(Destination::Results) => {
            let _ = navigator.replace(Route::Results {});
        }
        None => {}
    });

    let submit = move |_: MouseEvent| {
        let Some(question) = screen.peek().question_index() else {
            return;
        };
        if let Some(handle) = handle.peek().as_ref() {
            handle.submit(question);
        }
    };

    let screen = screen();
    let selected = selection();

    rsx! {
        div { class: "page quiz",
            if screen.is_loaded() {
                div { class: "quiz-header",
                    h2 { "{screen.heading()}" }
                    span { class: "timer", "{format_remaining(remaining())}" }
                }
                div { class: "progress",
                    div { class: "progress-fill", style: "width: {screen.percent}%" }
                }
                p { class: "prompt", "{screen.prompt}" }
                ul { class: "options",
                    for (index, option) in screen.options.iter().enumerate() {
                        li { key: "{index}",
                            label {
                                input {
                                    r#type: "radio",
                                    name: "answer",
                                    value: "{option}",
                                    checked: selected.as_deref() == Some(option.as_str()),
                                    onchange: {
                                        let option = option.clone();
                                        move |_| selection.set(Some(option.clone()))
                                    },
                                }
                                "{option}"
                            }
                        }
                    }
                }
                button { class: "btn primary", id: "quiz-submit", onclick: submit, "Submit" }
            } else {
                p { "Loading..." }
            }
        }
    }
}
