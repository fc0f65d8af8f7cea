use std::time::Duration;

use rand::Rng;

/// How long the mentor pretends to think before replying.
pub const THINKING_DELAY: Duration = Duration::from_millis(1000);

const GREETING: &str = "Hello! I am your JEE/NEET mentor. How can I help you today?";

const REPLIES: &[&str] = &[
    "That's a great question about your prep! To master this topic, you should \
     focus on the fundamental concepts first.",
    "Good thinking. Work through the solved examples once, then attempt the \
     previous-year questions on this topic without looking at the solutions.",
    "Before adding new material, revise what you covered this week. Short, \
     spaced revisits beat one long cram session.",
    "Pick one chapter, finish its exercise set end to end, and note every \
     question you had to guess on. Those notes are your revision list.",
];

/// Canned study mentor.
///
/// Replies are predefined; there is no model and no network behind this. The
/// view layer applies [`THINKING_DELAY`] before showing the reply and must
/// cancel a pending reply when the view goes away.
#[derive(Clone, Default)]
pub struct MentorService;

impl MentorService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Opening message shown before the user has typed anything.
    #[must_use]
    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Picks a reply for the user's message.
    ///
    /// The message content is accepted for interface stability but does not
    /// influence the choice.
    #[must_use]
    pub fn reply_to(&self, _message: &str) -> &'static str {
        let index = rand::rng().random_range(0..REPLIES.len());
        REPLIES[index]
    }
}
