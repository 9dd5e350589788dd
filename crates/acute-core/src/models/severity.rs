use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical severity assigned to findings and threats.
///
/// Declaration order doubles as sort order: `Critical` sorts before
/// `Urgent`, which sorts before `Monitor`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// Immediately life-threatening; pre-empts the survey.
    Critical,
    /// Needs treatment before leaving the current letter.
    Urgent,
    /// Abnormal but tolerable; watch and reassess.
    Monitor,
    /// Within the expected range for age.
    Normal,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Urgent => "urgent",
            Severity::Monitor => "monitor",
            Severity::Normal => "normal",
        }
    }
}
