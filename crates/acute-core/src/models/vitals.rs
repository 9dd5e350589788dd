use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Latest objective vital signs, filled in as numeric survey questions are
/// answered. Threat rule conditions read these instead of re-parsing raw
/// answer text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsSnapshot {
    pub resp_rate: Option<f64>,
    pub spo2: Option<f64>,
    pub heart_rate: Option<f64>,
    pub cap_refill_secs: Option<f64>,
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub temperature_c: Option<f64>,
    pub glucose_mmol: Option<f64>,
}

/// Derived perfusion state, recomputed after every Circulation answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Perfusion {
    Adequate,
    /// Shock physiology with blood pressure still maintained.
    Compensated,
    /// Hypotensive shock.
    Decompensated,
}

impl Perfusion {
    pub fn label(&self) -> &'static str {
        match self {
            Perfusion::Adequate => "adequate",
            Perfusion::Compensated => "compensated shock",
            Perfusion::Decompensated => "decompensated shock",
        }
    }
}
