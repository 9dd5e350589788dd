use acute_core::models::{Letter, Severity};

use crate::questions::{ChoiceOption, Question, QuestionInput, VitalKind};
use crate::LetterAssessment;

/// D: Disability. Glucose belongs here ("don't ever forget glucose").
pub struct Disability;

impl LetterAssessment for Disability {
    fn letter(&self) -> Letter {
        Letter::D
    }

    fn name(&self) -> &str {
        "Disability"
    }

    fn questions(&self) -> &[Question] {
        questions()
    }
}

pub(crate) fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        vec![
            Question {
                id: "glucose",
                prompt: "Blood glucose?",
                input: QuestionInput::Number {
                    unit: "mmol/L",
                    vital: VitalKind::Glucose,
                },
            },
            Question {
                id: "pupils",
                prompt: "Pupils?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "equal_reactive",
                            label: "Equal and reactive",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "pinpoint",
                            label: "Pinpoint",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "unequal",
                            label: "Unequal",
                            severity: Severity::Critical,
                        },
                        ChoiceOption {
                            value: "fixed_dilated",
                            label: "Fixed and dilated",
                            severity: Severity::Critical,
                        },
                    ],
                },
            },
            Question {
                id: "seizure_activity",
                prompt: "Seizure activity?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "none",
                            label: "None",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "postictal",
                            label: "Postictal",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "active_seizure",
                            label: "Actively seizing",
                            severity: Severity::Critical,
                        },
                    ],
                },
            },
        ]
    });
    &QUESTIONS
}
