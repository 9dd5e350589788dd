use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::intervention::Intervention;
use super::letter::Letter;
use super::severity::Severity;

/// A detected life-threatening condition with its prescribed interventions.
///
/// Threats are keyed by rule id: a rule materializes at most one threat per
/// session. Interventions are generated once, from the session state as of
/// detection time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Threat {
    pub rule_id: String,
    pub name: String,
    pub letter: Letter,
    pub severity: Severity,
    pub interventions: Vec<Intervention>,
    pub resolved: bool,
    pub detected_at: jiff::Timestamp,
}

impl Threat {
    pub fn new(
        rule_id: impl Into<String>,
        name: impl Into<String>,
        letter: Letter,
        severity: Severity,
        interventions: Vec<Intervention>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            name: name.into(),
            letter,
            severity,
            interventions,
            resolved: false,
            detected_at: jiff::Timestamp::now(),
        }
    }
}
