use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::QuizParams;

use crate::context::AppContext;
use crate::routes::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
struct CategoryEntry {
    name: String,
    quizzes: Vec<(String, String)>,
}

fn catalog(ctx: &AppContext) -> Vec<CategoryEntry> {
    let questions = ctx.questions();
    questions
        .categories()
        .into_iter()
        .map(|category| {
            let quizzes = questions
                .difficulties(&category)
                .into_iter()
                .filter_map(|difficulty| {
                    let params = QuizParams::new(category.as_str(), difficulty.as_str()).ok()?;
                    Some((difficulty, params.to_query()))
                })
                .collect();
            CategoryEntry {
                name: category,
                quizzes,
            }
        })
        .collect()
}

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let notice = use_hook(|| ctx.take_notice());
    let categories = use_hook(|| catalog(&ctx));

    rsx! {
        div { class: "page landing",
            h2 { "Pick a quiz" }

            if let Some(message) = notice {
                p { class: "notice", role: "alert", "{message}" }
            }

            if categories.is_empty() {
                p { "No quizzes available." }
            }

            for entry in categories {
                section { key: "{entry.name}", class: "category",
                    h3 { "{entry.name}" }
                    ul {
                        for (difficulty, query) in entry.quizzes {
                            li { key: "{difficulty}",
                                Link { to: Route::Quiz { query }, "{difficulty}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
