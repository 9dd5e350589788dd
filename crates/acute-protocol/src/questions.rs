use serde::Serialize;
use ts_rs::TS;

use acute_core::models::Severity;

/// Which vital-sign slot a numeric answer feeds, and which age-aware
/// classifier interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalKind {
    RespRate,
    Spo2,
    HeartRate,
    CapillaryRefill,
    SystolicBp,
    Temperature,
    Glucose,
}

/// The interpretation of a numeric answer: a severity plus a human label.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub severity: Severity,
    pub label: String,
}

/// One selectable answer for a choice question.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub severity: Severity,
}

/// The input shape of an assessment question.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionInput {
    Choice { options: Vec<ChoiceOption> },
    Number { unit: &'static str, vital: VitalKind },
    NumberPair { units: [&'static str; 2], vital: VitalKind },
}

/// One assessment question of the primary survey.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub input: QuestionInput,
}

impl Question {
    /// Find a choice option by its stored value.
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        match &self.input {
            QuestionInput::Choice { options } => options.iter().find(|o| o.value == value),
            _ => None,
        }
    }
}
