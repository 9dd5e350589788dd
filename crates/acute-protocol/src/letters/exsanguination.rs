use acute_core::models::{Letter, Severity};

use crate::questions::{ChoiceOption, Question, QuestionInput};
use crate::LetterAssessment;

/// X: eXsanguination. Only assessed for trauma presentations: catastrophic
/// external hemorrhage is controlled before the airway is touched.
pub struct Exsanguination;

impl LetterAssessment for Exsanguination {
    fn letter(&self) -> Letter {
        Letter::X
    }

    fn name(&self) -> &str {
        "eXsanguination"
    }

    fn questions(&self) -> &[Question] {
        questions()
    }
}

pub(crate) fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        vec![Question {
            id: "massive_bleeding",
            prompt: "Is there massive external bleeding?",
            input: QuestionInput::Choice {
                options: vec![
                    ChoiceOption {
                        value: "none",
                        label: "No visible bleeding",
                        severity: Severity::Normal,
                    },
                    ChoiceOption {
                        value: "controlled",
                        label: "Bleeding controlled with direct pressure",
                        severity: Severity::Urgent,
                    },
                    ChoiceOption {
                        value: "uncontrolled",
                        label: "Massive uncontrolled bleeding",
                        severity: Severity::Critical,
                    },
                ],
            },
        }]
    });
    &QUESTIONS
}
