use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A weight-scaled drug dose descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dose {
    pub drug: String,
    pub dose_per_kg: f64,
    pub unit: String,
    pub route: String,
    pub max_dose: Option<f64>,
}

/// One structured check performed when an intervention's reassessment
/// window elapses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReassessmentCheck {
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterventionStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

/// One prescribed action belonging to a threat.
///
/// Timers are declared durations only; scheduling and firing them is the
/// calling layer's job.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Intervention {
    pub id: Uuid,
    pub action: String,
    pub dose: Option<Dose>,
    /// Dose rendered against the patient weight known at creation time.
    pub dose_display: Option<String>,
    pub timer_secs: Option<u32>,
    pub reassess_prompt: Option<String>,
    pub checks: Vec<ReassessmentCheck>,
    pub status: InterventionStatus,
    pub started_at: Option<jiff::Timestamp>,
    pub completed_at: Option<jiff::Timestamp>,
}

impl Intervention {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: action.into(),
            dose: None,
            dose_display: None,
            timer_secs: None,
            reassess_prompt: None,
            checks: Vec::new(),
            status: InterventionStatus::Pending,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn with_dose(mut self, dose: Dose, display: String) -> Self {
        self.dose = Some(dose);
        self.dose_display = Some(display);
        self
    }

    pub fn with_timer(mut self, secs: u32, reassess_prompt: impl Into<String>) -> Self {
        self.timer_secs = Some(secs);
        self.reassess_prompt = Some(reassess_prompt.into());
        self
    }

    pub fn with_checks(mut self, prompts: &[&str]) -> Self {
        self.checks = prompts
            .iter()
            .map(|p| ReassessmentCheck { prompt: (*p).to_string() })
            .collect();
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == InterventionStatus::Pending
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            InterventionStatus::Pending | InterventionStatus::InProgress
        )
    }
}
