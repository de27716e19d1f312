use dioxus::prelude::*;
use dioxus_router::Link;
use services::QuizResults;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState};
use crate::vm::{ResultRowVm, ResultsVm, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_hook(|| {
        let store = ctx.session_store();
        ViewState::from_result(
            QuizResults::load(store.as_ref())
                .map(|results| map_results(&results))
                .map_err(|err| ViewError::from_quiz(&err)),
        )
    });

    rsx! {
        div { class: "page results",
            h2 { "Results" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(results) => rsx! {
                    ResultsSummary { results }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            p { Link { to: Route::Landing {}, "Back to quizzes" } }
        }
    }
}

#[component]
fn ResultsSummary(results: ResultsVm) -> Element {
    rsx! {
        p { class: "score", "Score: {results.score} / {results.total} ({results.percent}%)" }
        dl { class: "summary",
            dt { "Quiz" }
            dd { "{results.category} / {results.difficulty}" }

            dt { "Total time" }
            dd { "{results.total_time_str}" }
        }
        ol { class: "answers",
            for row in results.rows {
                ResultRow { key: "{row.number}", row }
            }
        }
    }
}

#[component]
fn ResultRow(row: ResultRowVm) -> Element {
    let class = if row.is_correct { "answer correct" } else { "answer wrong" };
    rsx! {
        li { class,
            p { class: "prompt", "{row.prompt}" }
            p { "Your answer: {row.your_answer}" }
            if !row.is_correct {
                p { "Correct answer: {row.correct_answer}" }
            }
            p { class: "muted", "{row.seconds}s" }
        }
    }
}
