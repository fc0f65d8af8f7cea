use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ExamView, HomeView, MentorView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/exam/:code", ExamView)] Exam { code: String },
        #[route("/mentor", MentorView)] Mentor {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        nav { class: "topbar",
            h1 { "Examdesk" }
            ul {
                li { Link { to: Route::Home {}, "Exams" } }
                li { Link { to: Route::Mentor {}, "Mentor" } }
            }
        }
    }
}
