use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::alert::SafetyAlert;
use super::event::ClinicalEvent;
use super::finding::Finding;
use super::fluids::FluidTracker;
use super::intervention::Intervention;
use super::letter::Letter;
use super::patient::AgeBand;
use super::sample::SampleHistory;
use super::severity::Severity;
use super::threat::Threat;
use super::vitals::{Perfusion, VitalsSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Idle,
    QuickAssessment,
    PrimarySurvey,
    Intervention,
    SecondarySurvey,
    DefinitiveCare,
    /// Post-arrest care after return of spontaneous circulation.
    Ongoing,
    CardiacArrest,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::QuickAssessment => "quick assessment",
            Phase::PrimarySurvey => "primary survey",
            Phase::Intervention => "intervention",
            Phase::SecondarySurvey => "secondary survey",
            Phase::DefinitiveCare => "definitive care",
            Phase::Ongoing => "ongoing care",
            Phase::CardiacArrest => "cardiac arrest",
        }
    }
}

/// First-glance sick/not-sick impression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuickAssessment {
    Sick,
    NotSick,
}

/// The root aggregate of one patient assessment.
///
/// The session is owned by the caller, passed by value into every engine
/// operation, and replaced wholesale by the returned value. Findings,
/// threats, and events are append-only ledgers: findings are keyed by
/// question id, threats by rule id, and every mutation appends an event.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub phase: Phase,
    pub current_letter: Letter,
    pub trauma: bool,
    pub weight_kg: Option<f64>,
    /// The age as entered, kept for display.
    pub age_input: Option<String>,
    pub age_band: AgeBand,
    pub quick_assessment: Option<QuickAssessment>,
    pub findings: Vec<Finding>,
    pub threats: Vec<Threat>,
    pub safety_alerts: Vec<SafetyAlert>,
    pub sample: SampleHistory,
    pub definitive_diagnosis: Option<String>,
    pub vitals: VitalsSnapshot,
    pub perfusion: Option<Perfusion>,
    pub fluids: FluidTracker,
    pub events: Vec<ClinicalEvent>,
    pub created_at: jiff::Timestamp,
}

impl Session {
    pub fn new(weight_kg: Option<f64>, age: Option<&str>, trauma: bool) -> Self {
        let age_band = age.map(AgeBand::parse).unwrap_or(AgeBand::Child);
        Self {
            id: Uuid::new_v4(),
            phase: Phase::Idle,
            current_letter: if trauma { Letter::X } else { Letter::A },
            trauma,
            weight_kg,
            age_input: age.map(str::to_string),
            age_band,
            quick_assessment: None,
            findings: Vec::new(),
            threats: Vec::new(),
            safety_alerts: Vec::new(),
            sample: SampleHistory::default(),
            definitive_diagnosis: None,
            vitals: VitalsSnapshot::default(),
            perfusion: None,
            fluids: FluidTracker::for_age(age_band),
            events: Vec::new(),
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn record_event(&mut self, event: ClinicalEvent) {
        self.events.push(event);
    }

    // ── Finding ledger ──────────────────────────────────────

    pub fn finding(&self, question_id: &str) -> Option<&Finding> {
        self.findings.iter().find(|f| f.question_id == question_id)
    }

    pub fn has_answered(&self, question_id: &str) -> bool {
        self.finding(question_id).is_some()
    }

    pub fn answered_question_ids(&self) -> Vec<&str> {
        self.findings.iter().map(|f| f.question_id.as_str()).collect()
    }

    /// True when the given question was answered with the given choice value.
    pub fn answer_is(&self, question_id: &str, value: &str) -> bool {
        self.finding(question_id).is_some_and(|f| f.value == value)
    }

    pub fn finding_severity(&self, question_id: &str) -> Option<Severity> {
        self.finding(question_id).map(|f| f.severity)
    }

    // ── Threat ledger ───────────────────────────────────────

    pub fn threat(&self, rule_id: &str) -> Option<&Threat> {
        self.threats.iter().find(|t| t.rule_id == rule_id)
    }

    pub fn threat_mut(&mut self, rule_id: &str) -> Option<&mut Threat> {
        self.threats.iter_mut().find(|t| t.rule_id == rule_id)
    }

    /// Unresolved threats, most severe first; ties broken by letter order
    /// X < A < B < C < D < E.
    pub fn active_threats(&self) -> Vec<&Threat> {
        let mut active: Vec<&Threat> = self.threats.iter().filter(|t| !t.resolved).collect();
        active.sort_by_key(|t| (t.severity, t.letter));
        active
    }

    /// An unresolved critical or urgent threat at this letter blocks the
    /// survey from advancing.
    pub fn has_unresolved_threat_at(&self, letter: Letter) -> bool {
        self.threats
            .iter()
            .any(|t| t.letter == letter && !t.resolved && t.severity <= Severity::Urgent)
    }

    // ── Interventions ───────────────────────────────────────

    pub fn intervention(&self, id: Uuid) -> Option<&Intervention> {
        self.threats
            .iter()
            .flat_map(|t| &t.interventions)
            .find(|i| i.id == id)
    }

    pub fn intervention_mut(&mut self, id: Uuid) -> Option<&mut Intervention> {
        self.threats
            .iter_mut()
            .flat_map(|t| &mut t.interventions)
            .find(|i| i.id == id)
    }

    pub fn pending_interventions(&self) -> Vec<&Intervention> {
        self.active_threats()
            .into_iter()
            .flat_map(|t| &t.interventions)
            .filter(|i| i.is_pending())
            .collect()
    }

    /// Pending interventions belonging to critical threats, across all
    /// letters.
    pub fn all_pending_critical(&self) -> Vec<&Intervention> {
        self.active_threats()
            .into_iter()
            .filter(|t| t.severity == Severity::Critical)
            .flat_map(|t| &t.interventions)
            .filter(|i| i.is_pending())
            .collect()
    }

    // ── Safety alerts ───────────────────────────────────────

    pub fn alert(&self, id: Uuid) -> Option<&SafetyAlert> {
        self.safety_alerts.iter().find(|a| a.id == id)
    }

    pub fn unacknowledged_alert(&self, rule_id: &str) -> Option<&SafetyAlert> {
        self.safety_alerts
            .iter()
            .find(|a| a.rule_id == rule_id && !a.acknowledged)
    }

    // ── Serialization for the caller's persistence layer ────

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
