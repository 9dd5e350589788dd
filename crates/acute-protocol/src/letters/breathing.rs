use acute_core::models::{Letter, Severity};

use crate::questions::{ChoiceOption, Question, QuestionInput, VitalKind};
use crate::LetterAssessment;

/// B: Breathing. Objective numbers first, then the chest exam.
pub struct Breathing;

impl LetterAssessment for Breathing {
    fn letter(&self) -> Letter {
        Letter::B
    }

    fn name(&self) -> &str {
        "Breathing"
    }

    fn questions(&self) -> &[Question] {
        questions()
    }
}

pub(crate) fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        vec![
            Question {
                id: "resp_rate",
                prompt: "Respiratory rate?",
                input: QuestionInput::Number {
                    unit: "breaths/min",
                    vital: VitalKind::RespRate,
                },
            },
            Question {
                id: "spo2",
                prompt: "Oxygen saturation (room air if possible)?",
                input: QuestionInput::Number {
                    unit: "%",
                    vital: VitalKind::Spo2,
                },
            },
            Question {
                id: "work_of_breathing",
                prompt: "Work of breathing?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "normal",
                            label: "Normal effort",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "mild_retractions",
                            label: "Mild recession / nasal flaring",
                            severity: Severity::Monitor,
                        },
                        ChoiceOption {
                            value: "severe_retractions",
                            label: "Severe recession, accessory muscle use",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "exhaustion",
                            label: "Tiring / exhaustion, poor effort",
                            severity: Severity::Critical,
                        },
                    ],
                },
            },
            Question {
                id: "breath_sounds",
                prompt: "Auscultation findings?",
                input: QuestionInput::Choice {
                    options: vec![
                        ChoiceOption {
                            value: "clear",
                            label: "Clear, equal air entry",
                            severity: Severity::Normal,
                        },
                        ChoiceOption {
                            value: "wheeze",
                            label: "Wheeze",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "crackles",
                            label: "Crackles",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "kussmaul",
                            label: "Deep sighing (Kussmaul) breathing",
                            severity: Severity::Urgent,
                        },
                        ChoiceOption {
                            value: "silent_unilateral",
                            label: "Absent breath sounds on one side",
                            severity: Severity::Critical,
                        },
                        ChoiceOption {
                            value: "absent",
                            label: "Minimal or absent air entry",
                            severity: Severity::Critical,
                        },
                    ],
                },
            },
        ]
    });
    &QUESTIONS
}
