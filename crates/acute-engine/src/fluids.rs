//! Fluid resuscitation bookkeeping.

use acute_core::models::{Dose, FluidTracker, Intervention, FLUID_REFRACTORY_ML_PER_KG};

/// A fluid bolus is recognized from the intervention's action text. Drug
/// doses never carry the word "bolus" in their action for this reason.
pub fn is_bolus(intervention: &Intervention) -> bool {
    intervention.dose.is_some() && intervention.action.to_lowercase().contains("bolus")
}

/// Record one completed bolus: bump the counter and, when the weight is
/// known, accumulate the delivered volume and re-derive the per-kilogram
/// total and the fluid-refractory latch.
pub(crate) fn apply_bolus(tracker: &mut FluidTracker, dose: &Dose, weight_kg: Option<f64>) {
    tracker.bolus_count += 1;

    let Some(weight) = weight_kg.filter(|w| *w > 0.0) else {
        return;
    };

    let mut volume = dose.dose_per_kg * weight;
    if let Some(max) = dose.max_dose {
        volume = volume.min(max);
    }

    tracker.total_volume_ml += volume;
    tracker.total_volume_per_kg = tracker.total_volume_ml / weight;
    if tracker.total_volume_per_kg >= FLUID_REFRACTORY_ML_PER_KG {
        tracker.fluid_refractory = true;
    }
}

/// Re-derive the per-kilogram total against a corrected weight. This is
/// the one path that may clear the fluid-refractory latch.
pub(crate) fn recompute_for_weight(tracker: &mut FluidTracker, weight_kg: f64) {
    if weight_kg <= 0.0 {
        return;
    }
    tracker.total_volume_per_kg = tracker.total_volume_ml / weight_kg;
    tracker.fluid_refractory = tracker.total_volume_per_kg >= FLUID_REFRACTORY_ML_PER_KG;
}
