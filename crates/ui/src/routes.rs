use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{LandingView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        // Carries `cat` and `diff` verbatim; the controller validates them.
        #[route("/quiz?:..query", QuizView)] Quiz { query: String },
        #[route("/result", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { to: Route::Landing {}, h1 { "Quiz" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
