use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::format_hms;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut code = use_signal(|| ctx.default_code().to_string());

    let profiles = ctx
        .sessions()
        .profiles()
        .iter()
        .map(|profile| {
            (
                profile.name().to_string(),
                profile.subjects().join(" · "),
                profile.total_questions(),
                format_hms(profile.duration_secs()),
            )
        })
        .collect::<Vec<_>>();

    let start_code = use_callback(move |value: String| {
        let value = value.trim().to_string();
        if !value.is_empty() {
            let _ = navigator.push(Route::Exam { code: value });
        }
    });

    rsx! {
        div { class: "page home-page",
            h2 { "Choose your exam" }
            div { class: "exam-cards",
                for (name, subjects, total, duration) in profiles {
                    ExamCard {
                        name,
                        subjects,
                        total,
                        duration,
                        on_start: start_code,
                    }
                }
            }
            div { class: "code-entry",
                label { r#for: "exam-code", "Have an exam code?" }
                input {
                    id: "exam-code",
                    value: "{code}",
                    placeholder: "e.g. NEET-2026",
                    oninput: move |evt| code.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| start_code.call(code()),
                    "Start"
                }
            }
        }
    }
}

#[component]
fn ExamCard(
    name: String,
    subjects: String,
    total: u32,
    duration: String,
    on_start: Callback<String>,
) -> Element {
    let code = name.clone();
    rsx! {
        div { class: "exam-card",
            h3 { "{name}" }
            p { class: "exam-card__subjects", "{subjects}" }
            p { class: "exam-card__meta", "{total} questions · {duration}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_start.call(code.clone()),
                "Start Test"
            }
        }
    }
}
