use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::AgeBand;

/// Cumulative bolus volume per kilogram at which shock is considered
/// fluid-refractory.
pub const FLUID_REFRACTORY_ML_PER_KG: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FluidType {
    BalancedCrystalloid,
    IsotonicSaline,
}

impl FluidType {
    /// Neonates are resuscitated with isotonic saline; everyone else gets
    /// a balanced crystalloid.
    pub fn for_age(band: AgeBand) -> FluidType {
        match band {
            AgeBand::Neonate => FluidType::IsotonicSaline,
            _ => FluidType::BalancedCrystalloid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FluidType::BalancedCrystalloid => "balanced crystalloid",
            FluidType::IsotonicSaline => "isotonic saline (0.9%)",
        }
    }
}

/// Running fluid-resuscitation bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FluidTracker {
    pub bolus_count: u32,
    pub total_volume_ml: f64,
    pub total_volume_per_kg: f64,
    pub default_fluid: FluidType,
    pub fluid_refractory: bool,
}

impl FluidTracker {
    pub fn for_age(band: AgeBand) -> Self {
        Self {
            bolus_count: 0,
            total_volume_ml: 0.0,
            total_volume_per_kg: 0.0,
            default_fluid: FluidType::for_age(band),
            fluid_refractory: false,
        }
    }
}
