use acute_core::models::{Letter, Severity};

use crate::questions::{ChoiceOption, Question, QuestionInput, VitalKind};
use crate::LetterAssessment;

/// E: Exposure. Full exposure, temperature, and skin survey.
pub struct Exposure;

impl LetterAssessment for Exposure {
    fn letter(&self) -> Letter {
        Letter::E
    }

    fn name(&self) -> &str {
        "Exposure"
    }

    fn questions(&self) -> &[Question] {
        questions()
    }
}

pub(crate) fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        vec![
            Question {
                id: "temperature",
                prompt: "Core temperature?",
                input: QuestionInput::Number {
                    unit: "°C",
                    vital: VitalKind::Temperature,
                },
            },
            Question {
                id: "rash",
                prompt: "Rash on full exposure?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "none",
                            label: "None",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "urticaria",
                            label: "Urticaria / hives",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "petechiae",
                            label: "Petechiae or purpura (non-blanching)",
                            severity: Severity::Critical,
                        },
                        ChoiceOption {
                            value: "other",
                            label: "Other rash",
                            severity: Severity::Monitor,
                        },
                    ],
                },
            },
            Question {
                id: "exposure_findings",
                prompt: "Other findings on exposure?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "none",
                            label: "None",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "bruising",
                            label: "Unexplained bruising",
                            severity: Severity::Monitor,
                        },
                        ChoiceOption {
                            value: "burns",
                            label: "Burns",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "deformity",
                            label: "Limb deformity",
                            severity: Severity::Urgent,
                        },
                    ],
                },
            },
        ]
    });
    &QUESTIONS
}
