use dioxus::prelude::*;

use services::mentor_service::THINKING_DELAY;

use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChatRole {
    Mentor,
    Student,
}

impl ChatRole {
    fn css_class(self) -> &'static str {
        match self {
            Self::Mentor => "message-bubble mentor",
            Self::Student => "message-bubble student",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatMessage {
    role: ChatRole,
    text: String,
}

#[component]
pub fn MentorView() -> Element {
    let ctx = use_context::<AppContext>();
    let mentor = ctx.mentor();
    let greeting = mentor.greeting().to_string();
    let mut messages = use_signal(move || {
        vec![ChatMessage {
            role: ChatRole::Mentor,
            text: greeting,
        }]
    });
    let mut input = use_signal(String::new);
    // Handle of the reply still "being thought about", if any.
    let mut pending = use_signal(|| None::<Task>);

    let send = use_callback(move |()| {
        let text = input().trim().to_string();
        if text.is_empty() {
            return;
        }
        messages.write().push(ChatMessage {
            role: ChatRole::Student,
            text: text.clone(),
        });
        input.set(String::new());

        // A newer question supersedes a reply still pending.
        if let Some(task) = pending.take() {
            task.cancel();
        }
        let mentor = mentor.clone();
        let task = spawn(async move {
            tokio::time::sleep(THINKING_DELAY).await;
            let reply = mentor.reply_to(&text).to_string();
            messages.write().push(ChatMessage {
                role: ChatRole::Mentor,
                text: reply,
            });
            pending.set(None);
        });
        pending.set(Some(task));
    });

    // No reply may arrive after the view goes away.
    use_drop(move || {
        if let Some(task) = pending.take() {
            task.cancel();
        }
    });

    let thinking = pending.read().is_some();
    let status_label = if thinking { "● Thinking..." } else { "● Online" };
    let status_class = if thinking { "status thinking" } else { "status" };
    let history = messages
        .read()
        .iter()
        .map(|message| (message.role.css_class(), message.text.clone()))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page mentor-page",
            div { class: "chat-container",
                div { class: "chat-header",
                    h2 { "Study Mentor" }
                    span { class: "{status_class}", "{status_label}" }
                }
                div { class: "chat-messages",
                    for (bubble_class, text) in history {
                        div { class: "{bubble_class}", "{text}" }
                    }
                }
                div { class: "chat-input-area",
                    input {
                        value: "{input}",
                        placeholder: "Ask a question...",
                        oninput: move |evt| input.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| send.call(()),
                        "Send"
                    }
                }
            }
        }
    }
}
