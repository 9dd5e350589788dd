use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::severity::Severity;

/// A fired global safety-rule instance.
///
/// At most one unacknowledged alert per rule id exists at a time;
/// acknowledging clears the de-duplication gate so the rule may fire again
/// on a later violation. An alert is a clinical risk the operator must
/// consciously accept, not a programming fault.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyAlert {
    pub id: Uuid,
    pub rule_id: String,
    pub message: String,
    pub severity: Severity,
    pub acknowledged: bool,
    pub raised_at: jiff::Timestamp,
}

impl SafetyAlert {
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            rule_id: rule_id.into(),
            message: message.into(),
            severity,
            acknowledged: false,
            raised_at: jiff::Timestamp::now(),
        }
    }
}
