//! Global safety rules.
//!
//! Unlike threat rules, these are invariant checks over the whole session,
//! evaluated after every intervention completion and after ROSC. A rule is
//! suppressed while an unacknowledged alert for it exists; acknowledging
//! the alert re-arms the rule.

use std::sync::LazyLock;

use acute_core::models::{
    ClinicalEvent, ClinicalEventKind, Intervention, InterventionStatus, SafetyAlert, Session,
    Severity,
};
use serde_json::json;

pub struct SafetyRule {
    pub id: &'static str,
    pub severity: Severity,
    pub condition: fn(&Session) -> bool,
    pub message: fn(&Session) -> String,
}

/// All safety rules in declared order.
pub fn registry() -> &'static [SafetyRule] {
    &RULES
}

/// Run every armed safety rule against the session, raising alerts for
/// violations.
pub(crate) fn evaluate(mut session: Session) -> Session {
    for rule in registry() {
        if session.unacknowledged_alert(rule.id).is_some() {
            continue;
        }
        if !(rule.condition)(&session) {
            continue;
        }

        let message = (rule.message)(&session);
        tracing::warn!(rule_id = rule.id, message = %message, "safety rule fired");
        session.record_event(
            ClinicalEvent::new(
                ClinicalEventKind::SafetyAlertRaised,
                format!("Safety alert: {message}"),
            )
            .with_detail(json!({ "rule_id": rule.id })),
        );
        session
            .safety_alerts
            .push(SafetyAlert::new(rule.id, message, rule.severity));
    }
    session
}

fn any_intervention(session: &Session, pred: fn(&Intervention) -> bool) -> bool {
    session
        .threats
        .iter()
        .flat_map(|t| &t.interventions)
        .any(pred)
}

fn insulin_running(intervention: &Intervention) -> bool {
    matches!(
        intervention.status,
        InterventionStatus::InProgress | InterventionStatus::Completed
    ) && intervention.action.to_lowercase().contains("insulin")
}

fn potassium_given(intervention: &Intervention) -> bool {
    intervention.status == InterventionStatus::Completed
        && intervention.action.to_lowercase().contains("potassium")
}

static RULES: LazyLock<Vec<SafetyRule>> = LazyLock::new(|| {
    vec![
        SafetyRule {
            id: "excessive_boluses",
            severity: Severity::Urgent,
            condition: |s| s.fluids.bolus_count >= 3,
            message: |s| {
                format!(
                    "{} fluid boluses given ({:.0} mL/kg total) — reassess before further \
                     volume; consider blood products or vasoactive support",
                    s.fluids.bolus_count, s.fluids.total_volume_per_kg
                )
            },
        },
        SafetyRule {
            id: "fluid_refractory_shock",
            severity: Severity::Critical,
            condition: |s| s.fluids.fluid_refractory,
            message: |s| {
                format!(
                    "Shock persists after {:.0} mL/kg of fluid — fluid-refractory; escalate \
                     to vasoactive infusion and senior review",
                    s.fluids.total_volume_per_kg
                )
            },
        },
        SafetyRule {
            id: "bolus_with_overload_signs",
            severity: Severity::Urgent,
            condition: |s| {
                s.fluids.bolus_count >= 1 && s.answer_is("breath_sounds", "crackles")
            },
            message: |_| {
                "Fluid bolus given with crackles on auscultation — reassess for fluid \
                 overload or cardiogenic shock before further volume"
                    .to_string()
            },
        },
        SafetyRule {
            id: "insulin_without_potassium",
            severity: Severity::Critical,
            condition: |s| {
                any_intervention(s, insulin_running) && !any_intervention(s, potassium_given)
            },
            message: |_| {
                "Insulin running without potassium supplementation — insulin drives potassium \
                 intracellularly; check serum potassium and supplement before continuing"
                    .to_string()
            },
        },
    ]
});
