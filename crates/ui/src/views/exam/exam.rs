use chrono::Utc;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use exam_core::model::AnswerOption;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ExamIntent, ExamOutcome, ExamVm, map_palette};

#[component]
pub fn ExamView(code: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let sessions = ctx.sessions();
    let vm = use_signal(move || ExamVm::new(sessions.start_or_default(&code)));
    let mut ticker = use_signal(|| None::<Task>);

    let dispatch = use_callback(move |intent: ExamIntent| {
        let mut vm = vm;
        let outcome = vm.write().apply(intent, Utc::now());
        match outcome {
            Ok(ExamOutcome::Submitted) => {
                let _ = navigator.push(Route::Home {});
            }
            Ok(ExamOutcome::Continue) => {}
            // Palette and tabs only emit in-range targets, so this is a
            // programming error worth a trace, not a user-facing failure.
            Err(err) => tracing::warn!(%err, "navigation intent rejected"),
        }
    });

    // Arm the one-second tick task only while the countdown is running.
    // Pausing, expiry, and submission all disarm it; unmount cancels it.
    use_effect(move || {
        let mut vm = vm;
        let running = vm.read().session().is_clock_running();
        if running {
            if ticker.peek().is_none() {
                let task = spawn(async move {
                    loop {
                        tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                        vm.write().tick();
                    }
                });
                ticker.set(Some(task));
            }
        } else if ticker.peek().is_some() {
            if let Some(task) = ticker.take() {
                task.cancel();
            }
        }
    });
    use_drop(move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
    });

    let vm_guard = vm.read();
    let session = vm_guard.session();
    let title = vm_guard.requested_code().to_string();
    let fell_back = vm_guard.fell_back();
    let fallback_profile = session.config().name().to_string();
    let timer_label = vm_guard.timer_label();
    let paused = session.is_paused();
    let time_up = session.is_time_up();
    let pause_glyph = if paused { "▶" } else { "⏸" };
    let current = session.current();
    let active_subject = session.active_subject();
    let subject_name = session.config().subjects()[active_subject].clone();
    let subjects = session.config().subjects().to_vec();
    let selected = session.answer(current);
    let can_clear = selected.is_some();
    let palette = map_palette(session);
    let progress = vm_guard.progress();
    let progress_label = format!("{} / {} answered", progress.attempted, progress.total);
    drop(vm_guard);

    rsx! {
        div { class: "page exam-page", id: "exam-root",
            header { class: "exam-header",
                div { class: "exam-header__left",
                    button {
                        class: "pause-btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(ExamIntent::TogglePause),
                        "{pause_glyph}"
                    }
                    div { class: "exam-timer", id: "exam-timer", "{timer_label}" }
                    h2 { class: "exam-title", "{title}" }
                }
                span { class: "exam-progress", "{progress_label}" }
            }

            if fell_back {
                p { class: "exam-fallback-note",
                    "Unknown exam code. Running the default {fallback_profile} paper."
                }
            }
            if time_up {
                p { class: "exam-timeup-note", "Time is up. Submit your test." }
            }

            nav { class: "exam-tabs",
                for (index, subject) in subjects.iter().enumerate() {
                    button {
                        class: if index == active_subject { "exam-tab exam-tab-active" } else { "exam-tab" },
                        r#type: "button",
                        onclick: move |_| dispatch.call(ExamIntent::JumpToSubject(index)),
                        "{subject}"
                    }
                }
            }

            div { class: "exam-body",
                main { class: "exam-main",
                    div { class: "exam-q-header",
                        div { class: "q-badge", "Question {current}" }
                        div { class: "q-subject-tag", "{subject_name}" }
                        div { class: "q-scoring", "+4  -1" }
                    }
                    div { class: "exam-q-content",
                        // Placeholder body; a question bank is out of scope.
                        p { class: "exam-q-text",
                            "The atomic number of the element from the following with lowest 1st ionisation enthalpy is:"
                        }
                        div { class: "exam-options-grid",
                            for option in AnswerOption::ALL {
                                OptionCard {
                                    option,
                                    selected: selected == Some(option),
                                    on_intent: dispatch,
                                }
                            }
                        }
                    }
                }

                aside { class: "exam-sidebar",
                    div { class: "sidebar-scroll-area",
                        for section in palette {
                            div { class: "sidebar-section",
                                h4 { class: "sidebar-section__title", "{section.subject}" }
                                div { class: "q-grid",
                                    for entry in section.entries {
                                        button {
                                            class: "{entry.css_class}",
                                            r#type: "button",
                                            onclick: move |_| dispatch.call(ExamIntent::GoTo(entry.question)),
                                            "{entry.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "sidebar-footer",
                        button {
                            class: "btn submit-btn",
                            r#type: "button",
                            onclick: move |_| dispatch.call(ExamIntent::Submit),
                            "Submit Test"
                        }
                    }
                }
            }

            footer { class: "exam-footer",
                button {
                    class: "btn clear-btn",
                    r#type: "button",
                    disabled: !can_clear,
                    onclick: move |_| dispatch.call(ExamIntent::ClearResponse),
                    "Clear Response"
                }
                div { class: "footer-nav-group",
                    button {
                        class: "btn nav-btn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(ExamIntent::Previous),
                        "Previous"
                    }
                    button {
                        class: "btn nav-btn nav-btn--next",
                        r#type: "button",
                        onclick: move |_| dispatch.call(ExamIntent::Next),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionCard(
    option: AnswerOption,
    selected: bool,
    on_intent: Callback<ExamIntent>,
) -> Element {
    let letter = option.as_str();
    rsx! {
        button {
            class: if selected { "option-card selected" } else { "option-card" },
            r#type: "button",
            onclick: move |_| on_intent.call(ExamIntent::Select(option)),
            span { class: "option-letter", "{letter}" }
            span { class: "option-label", "Option value text for {letter}" }
        }
    }
}
