use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::letter::Letter;
use super::severity::Severity;

/// An immutable record of one answered assessment question.
///
/// Findings accumulate in the order they were recorded; the same question
/// id appears at most once per session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    /// The catalog question this answers.
    pub question_id: String,
    pub letter: Letter,
    /// Human-readable interpretation ("Severe hypoxemia", "Airway obstructed").
    pub description: String,
    /// Raw answer value: a choice value or the entered number(s) as text.
    pub value: String,
    pub unit: Option<String>,
    pub severity: Severity,
    pub recorded_at: jiff::Timestamp,
}
