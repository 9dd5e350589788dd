use acute_core::models::{Letter, Severity};

use crate::questions::{ChoiceOption, Question, QuestionInput};
use crate::LetterAssessment;

/// A: Airway. Consciousness is assessed here (AVPU) because an
/// unresponsive patient cannot protect their own airway.
pub struct Airway;

impl LetterAssessment for Airway {
    fn letter(&self) -> Letter {
        Letter::A
    }

    fn name(&self) -> &str {
        "Airway"
    }

    fn questions(&self) -> &[Question] {
        questions()
    }
}

pub(crate) fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        vec![
            Question {
                id: "avpu",
                prompt: "Level of consciousness (AVPU)?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "alert",
                            label: "Alert",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "voice",
                            label: "Responds to voice",
                            severity: Severity::Monitor,
                        },
                        ChoiceOption {
                            value: "pain",
                            label: "Responds to pain only",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "unresponsive",
                            label: "Unresponsive",
                            severity: Severity::Critical,
                        },
                    ],
                },
            },
            Question {
                id: "airway_status",
                prompt: "Is the airway patent?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "patent",
                            label: "Patent — speaking or crying normally",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "partially_obstructed",
                            label: "Partially obstructed",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "obstructed",
                            label: "Obstructed",
                            severity: Severity::Critical,
                        },
                    ],
                },
            },
            Question {
                id: "choking_event",
                prompt: "Witnessed choking or suspected foreign body?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "no",
                            label: "No",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "witnessed_choking",
                            label: "Witnessed choking episode",
                            severity: Severity::Critical,
                        },
                    ],
                },
            },
            Question {
                id: "airway_sounds",
                prompt: "Added airway sounds?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "none",
                            label: "None",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "snoring",
                            label: "Snoring",
                            severity: Severity::Monitor,
                        },
                        ChoiceOption {
                            value: "gurgling",
                            label: "Gurgling (secretions)",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "stridor",
                            label: "Stridor",
                            severity: Severity::Urgent,
                        },
                    ],
                },
            },
        ]
    });
    &QUESTIONS
}
