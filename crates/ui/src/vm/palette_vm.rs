use exam_core::ExamSession;
use exam_core::model::QuestionNo;

/// One button of the status palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntryVm {
    pub question: QuestionNo,
    pub label: String,
    /// Full class list: status plus current-question highlight.
    pub css_class: String,
}

/// One subject's block of the palette, in subject order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteSectionVm {
    pub subject: String,
    pub entries: Vec<PaletteEntryVm>,
}

/// Maps the session into renderable palette sections, one per subject, with
/// continuous global numbering across sections.
#[must_use]
pub fn map_palette(session: &ExamSession) -> Vec<PaletteSectionVm> {
    let config = session.config();
    let per_subject = config.questions_per_subject();

    config
        .subjects()
        .iter()
        .enumerate()
        .map(|(subject_index, subject)| {
            let first = subject_index as u32 * per_subject + 1;
            let entries = (first..first + per_subject)
                .map(|n| {
                    let question = QuestionNo::new(n);
                    let status = session.status_of(question).as_str();
                    let css_class = if session.current() == question {
                        format!("q-circle {status} active-q")
                    } else {
                        format!("q-circle {status}")
                    };
                    PaletteEntryVm {
                        question,
                        label: n.to_string(),
                        css_class,
                    }
                })
                .collect();

            PaletteSectionVm {
                subject: subject.clone(),
                entries,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::AnswerOption;
    use exam_core::time::fixed_clock;
    use services::ExamSessionService;

    fn session(code: &str) -> ExamSession {
        ExamSessionService::builtin(fixed_clock())
            .start_or_default(code)
            .session
    }

    #[test]
    fn sections_follow_subject_order_with_continuous_numbering() {
        let palette = map_palette(&session("NEET"));
        assert_eq!(palette.len(), 4);
        assert_eq!(palette[0].subject, "Physics");
        assert_eq!(palette[3].subject, "Zoology");

        assert_eq!(palette[0].entries[0].label, "1");
        assert_eq!(palette[3].entries[0].label, "136");
        assert_eq!(palette[3].entries[44].label, "180");
    }

    #[test]
    fn classes_reflect_status_and_current_question() {
        let mut session = session("JEE");
        session.select(QuestionNo::new(3), AnswerOption::A).unwrap();
        session.go_to(QuestionNo::new(2)).unwrap();

        let palette = map_palette(&session);
        let first_subject = &palette[0].entries;
        assert_eq!(first_subject[0].css_class, "q-circle seen");
        assert_eq!(first_subject[1].css_class, "q-circle seen active-q");
        assert_eq!(first_subject[2].css_class, "q-circle attempted");
        assert_eq!(first_subject[3].css_class, "q-circle not-seen");
    }
}
