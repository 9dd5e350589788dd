use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClinicalEventKind {
    PhaseChange,
    FindingRecorded,
    ThreatDetected,
    InterventionStarted,
    InterventionCompleted,
    BolusOrdered,
    SafetyAlertRaised,
    SafetyAlertAcknowledged,
    SampleRecorded,
    PatientInfoUpdated,
    CardiacArrest,
    Rosc,
    DiagnosisSet,
}

/// One entry of the append-only clinical event log.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalEvent {
    pub at: jiff::Timestamp,
    pub kind: ClinicalEventKind,
    pub summary: String,
    pub detail: Option<serde_json::Value>,
}

impl ClinicalEvent {
    pub fn new(kind: ClinicalEventKind, summary: impl Into<String>) -> Self {
        Self {
            at: jiff::Timestamp::now(),
            kind,
            summary: summary.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = Some(detail);
        self
    }
}
