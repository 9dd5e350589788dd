use acute_core::models::{Letter, Severity};

use crate::questions::{ChoiceOption, Question, QuestionInput, VitalKind};
use crate::LetterAssessment;

/// C: Circulation. Perfusion is re-derived after every answer here.
pub struct Circulation;

impl LetterAssessment for Circulation {
    fn letter(&self) -> Letter {
        Letter::C
    }

    fn name(&self) -> &str {
        "Circulation"
    }

    fn questions(&self) -> &[Question] {
        questions()
    }
}

pub(crate) fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        vec![
            Question {
                id: "heart_rate",
                prompt: "Heart rate?",
                input: QuestionInput::Number {
                    unit: "beats/min",
                    vital: VitalKind::HeartRate,
                },
            },
            Question {
                id: "cap_refill",
                prompt: "Central capillary refill time?",
                input: QuestionInput::Number {
                    unit: "seconds",
                    vital: VitalKind::CapillaryRefill,
                },
            },
            Question {
                id: "blood_pressure",
                prompt: "Blood pressure?",
                input: QuestionInput::NumberPair {
                    units: ["mmHg systolic", "mmHg diastolic"],
                    vital: VitalKind::SystolicBp,
                },
            },
            Question {
                id: "skin_signs",
                prompt: "Skin color and temperature?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "warm_pink",
                            label: "Warm and pink",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "pale_cool",
                            label: "Pale, cool peripheries",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "mottled",
                            label: "Mottled",
                            severity: Severity::Urgent,
                        },
                    ],
                },
            },
        ]
    });
    &QUESTIONS
}
