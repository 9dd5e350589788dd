//! Phase transitions.
//!
//! Every function here takes the session by value and returns the
//! replacement value with any log entries appended. Transitions are total:
//! an input that does not apply in the current phase leaves the session
//! unchanged. Only the intervention lifecycle and alert acknowledgement
//! are fallible, and only with an explicit not-found result.

use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;
use uuid::Uuid;

use acute_core::models::{
    AgeBand, ClinicalEvent, ClinicalEventKind, Finding, FluidType, InterventionStatus, Letter,
    Perfusion, Phase, QuickAssessment, SampleField, Session, Severity, Threat,
};
use acute_protocol::questions::{Question, QuestionInput, VitalKind};
use acute_protocol::reference;

use crate::dose::format_dose;
use crate::error::EngineError;
use crate::{fluids, safety, threats};

/// A raw answer to an assessment question, shaped to match the question's
/// declared input.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    Choice { value: String },
    Number { value: f64 },
    NumberPair { first: f64, second: f64 },
}

const FLUID_CARRIER_RULE: &str = "fluid_resuscitation";

// ── Survey flow ─────────────────────────────────────────────

pub fn start_quick_assessment(mut session: Session) -> Session {
    set_phase(&mut session, Phase::QuickAssessment);
    session
}

pub fn answer_quick_assessment(mut session: Session, impression: QuickAssessment) -> Session {
    session.quick_assessment = Some(impression);
    session.record_event(ClinicalEvent::new(
        ClinicalEventKind::FindingRecorded,
        format!(
            "Quick assessment: {}",
            match impression {
                QuickAssessment::Sick => "sick",
                QuickAssessment::NotSick => "not sick",
            }
        ),
    ));
    session.current_letter = if session.trauma { Letter::X } else { Letter::A };
    set_phase(&mut session, Phase::PrimarySurvey);
    session
}

/// Record one finding and run the threat rules.
///
/// A newly fired critical threat moves the session to the intervention
/// phase immediately. Otherwise, once every question of the current letter
/// is answered, an unresolved urgent threat at this letter also forces the
/// intervention phase; failing that the survey advances.
pub fn answer_primary_survey(session: Session, question: &Question, answer: Answer) -> Session {
    // Findings are keyed by question id; re-answering is not modeled.
    if session.has_answered(question.id) {
        return session;
    }
    let mut session = session;

    let (severity, description, value, unit) = interpret(question, &answer, session.age_band);
    update_vitals(&mut session, question, &answer);

    session.findings.push(Finding {
        question_id: question.id.to_string(),
        letter: session.current_letter,
        description: description.clone(),
        value: value.clone(),
        unit,
        severity,
        recorded_at: jiff::Timestamp::now(),
    });
    session.record_event(
        ClinicalEvent::new(
            ClinicalEventKind::FindingRecorded,
            format!("{}: {description}", question.prompt),
        )
        .with_detail(json!({
            "question_id": question.id,
            "value": value,
            "severity": severity.label(),
        })),
    );

    if session.current_letter == Letter::C {
        session.perfusion = derive_perfusion(&session);
    }

    let (mut session, newly_detected) = evaluate_threats(session);

    if newly_detected == Some(Severity::Critical) {
        set_phase(&mut session, Phase::Intervention);
    } else if letter_complete(&session, session.current_letter) {
        if session.has_unresolved_threat_at(session.current_letter) {
            set_phase(&mut session, Phase::Intervention);
        } else {
            session = advance_letter(session);
        }
    }
    session
}

/// Resume the survey after working through interventions.
pub fn return_to_primary_survey(mut session: Session) -> Session {
    set_phase(&mut session, Phase::PrimarySurvey);
    if letter_complete(&session, session.current_letter) {
        session = advance_letter(session);
    }
    session
}

/// True once every catalog question for the letter has a finding.
pub fn letter_complete(session: &Session, letter: Letter) -> bool {
    acute_protocol::questions_for(letter)
        .iter()
        .all(|q| session.has_answered(q.id))
}

// ── Interrupts and terminal transitions ─────────────────────

/// Cardiac arrest interrupts any phase. The arrest threat is materialized
/// exactly once per session.
pub fn trigger_cardiac_arrest(mut session: Session) -> Session {
    session.record_event(ClinicalEvent::new(
        ClinicalEventKind::CardiacArrest,
        "Cardiac arrest declared",
    ));
    set_phase(&mut session, Phase::CardiacArrest);

    if session.threat("cardiac_arrest").is_none()
        && let Some(rule) = threats::rule("cardiac_arrest")
    {
        let threat = threats::materialize(rule, &session);
        tracing::warn!(rule_id = rule.id, "threat rule fired");
        session.record_event(
            ClinicalEvent::new(
                ClinicalEventKind::ThreatDetected,
                format!("Threat detected: {}", rule.name),
            )
            .with_detail(json!({
                "rule_id": rule.id,
                "severity": rule.severity.label(),
                "interventions": threat.interventions.len(),
            })),
        );
        session.threats.push(threat);
    }
    session
}

/// Return of spontaneous circulation: arrest → ongoing post-arrest care.
pub fn achieve_rosc(mut session: Session) -> Session {
    if session.phase != Phase::CardiacArrest {
        return session;
    }
    session.record_event(ClinicalEvent::new(
        ClinicalEventKind::Rosc,
        "Return of spontaneous circulation",
    ));
    set_phase(&mut session, Phase::Ongoing);
    safety::evaluate(session)
}

pub fn set_definitive_diagnosis(mut session: Session, diagnosis: &str) -> Session {
    session.definitive_diagnosis = Some(diagnosis.to_string());
    session.record_event(ClinicalEvent::new(
        ClinicalEventKind::DiagnosisSet,
        format!("Definitive diagnosis: {diagnosis}"),
    ));
    set_phase(&mut session, Phase::DefinitiveCare);
    session
}

// ── Patient info and history ────────────────────────────────

/// Mid-case correction of weight or age.
///
/// Per-kilogram fluid totals follow the corrected weight, as do the dose
/// strings of interventions not yet started; anything already given keeps
/// the dose as administered.
pub fn update_patient_info(
    mut session: Session,
    weight_kg: Option<f64>,
    age: Option<&str>,
) -> Session {
    if let Some(weight) = weight_kg {
        session.weight_kg = Some(weight);
        fluids::recompute_for_weight(&mut session.fluids, weight);
        for threat in &mut session.threats {
            for intervention in &mut threat.interventions {
                if intervention.is_pending()
                    && let Some(dose) = &intervention.dose
                {
                    intervention.dose_display = Some(format_dose(dose, Some(weight)));
                }
            }
        }
    }
    if let Some(age) = age {
        session.age_band = AgeBand::parse(age);
        session.age_input = Some(age.to_string());
        session.fluids.default_fluid = FluidType::for_age(session.age_band);
    }
    session.record_event(
        ClinicalEvent::new(ClinicalEventKind::PatientInfoUpdated, "Patient info updated")
            .with_detail(json!({ "weight_kg": weight_kg, "age": age })),
    );
    session
}

pub fn record_sample_history(mut session: Session, field: SampleField, text: &str) -> Session {
    session.sample.set(field, text);
    session.record_event(ClinicalEvent::new(
        ClinicalEventKind::SampleRecorded,
        format!("{}: {text}", field.label()),
    ));
    session
}

// ── Intervention lifecycle ──────────────────────────────────

pub fn start_intervention(mut session: Session, id: Uuid) -> Result<Session, EngineError> {
    let started = {
        let Some(intervention) = session.intervention_mut(id) else {
            return Err(EngineError::InterventionNotFound(id));
        };
        if intervention.status == InterventionStatus::Pending {
            intervention.status = InterventionStatus::InProgress;
            intervention.started_at = Some(jiff::Timestamp::now());
            Some(intervention.action.clone())
        } else {
            None
        }
    };
    if let Some(action) = started {
        tracing::info!(intervention = %action, "intervention started");
        session.record_event(
            ClinicalEvent::new(ClinicalEventKind::InterventionStarted, action)
                .with_detail(json!({ "intervention_id": id })),
        );
    }
    Ok(session)
}

/// Complete an intervention. A completed fluid bolus feeds the fluid
/// tracker; every completion re-runs the safety rules.
pub fn complete_intervention(mut session: Session, id: Uuid) -> Result<Session, EngineError> {
    let completed = {
        let Some(intervention) = session.intervention_mut(id) else {
            return Err(EngineError::InterventionNotFound(id));
        };
        if intervention.status == InterventionStatus::Completed {
            None
        } else {
            intervention.status = InterventionStatus::Completed;
            intervention.completed_at = Some(jiff::Timestamp::now());
            let bolus_dose = fluids::is_bolus(intervention)
                .then(|| intervention.dose.clone())
                .flatten();
            Some((intervention.action.clone(), bolus_dose))
        }
    };

    let Some((action, bolus_dose)) = completed else {
        return Ok(session);
    };

    tracing::info!(intervention = %action, "intervention completed");
    session.record_event(
        ClinicalEvent::new(ClinicalEventKind::InterventionCompleted, action)
            .with_detail(json!({ "intervention_id": id })),
    );
    if let Some(dose) = bolus_dose {
        let weight = session.weight_kg;
        fluids::apply_bolus(&mut session.fluids, &dose, weight);
    }
    Ok(safety::evaluate(session))
}

/// Clinician-ordered repeat bolus, outside any rule-generated plan. The
/// order lands on a monitor-severity carrier threat so the intervention
/// lifecycle and fluid bookkeeping apply unchanged.
pub fn order_fluid_bolus(mut session: Session, ml_per_kg: f64) -> Session {
    let intervention = threats::fluid_bolus(&session, ml_per_kg);
    session.record_event(
        ClinicalEvent::new(
            ClinicalEventKind::BolusOrdered,
            format!("Fluid bolus {ml_per_kg:.0} mL/kg ordered"),
        )
        .with_detail(json!({ "ml_per_kg": ml_per_kg, "intervention_id": intervention.id })),
    );
    if let Some(threat) = session.threat_mut(FLUID_CARRIER_RULE) {
        threat.interventions.push(intervention);
    } else {
        session.threats.push(Threat::new(
            FLUID_CARRIER_RULE,
            "Ongoing Fluid Resuscitation",
            Letter::C,
            Severity::Monitor,
            vec![intervention],
        ));
    }
    session
}

// ── Safety alerts ───────────────────────────────────────────

/// Idempotent: acknowledging an already-acknowledged alert is a no-op.
pub fn acknowledge_safety_alert(mut session: Session, id: Uuid) -> Result<Session, EngineError> {
    let newly_acknowledged = {
        let Some(alert) = session.safety_alerts.iter_mut().find(|a| a.id == id) else {
            return Err(EngineError::AlertNotFound(id));
        };
        if alert.acknowledged {
            None
        } else {
            alert.acknowledged = true;
            Some(alert.rule_id.clone())
        }
    };
    if let Some(rule_id) = newly_acknowledged {
        session.record_event(ClinicalEvent::new(
            ClinicalEventKind::SafetyAlertAcknowledged,
            format!("Safety alert acknowledged ({rule_id})"),
        ));
    }
    Ok(session)
}

// ── Internals ───────────────────────────────────────────────

fn set_phase(session: &mut Session, phase: Phase) {
    if session.phase == phase {
        return;
    }
    tracing::info!(from = session.phase.label(), to = phase.label(), "phase change");
    session.record_event(ClinicalEvent::new(
        ClinicalEventKind::PhaseChange,
        format!("Phase: {} -> {}", session.phase.label(), phase.label()),
    ));
    session.phase = phase;
}

fn advance_letter(mut session: Session) -> Session {
    let sequence = Letter::sequence(session.trauma);
    let next = sequence
        .iter()
        .position(|l| *l == session.current_letter)
        .and_then(|i| sequence.get(i + 1))
        .copied();
    match next {
        Some(letter) => {
            session.current_letter = letter;
            tracing::info!(letter = letter.code(), "survey advanced");
            session.record_event(ClinicalEvent::new(
                ClinicalEventKind::PhaseChange,
                format!("Primary survey advanced to {} ({})", letter.label(), letter.code()),
            ));
        }
        None => set_phase(&mut session, Phase::SecondarySurvey),
    }
    session
}

/// Two-pass rule evaluation: collect every untriggered rule whose
/// condition holds, materialize all of them, and report the most severe
/// new severity so it can drive the phase transition.
fn evaluate_threats(mut session: Session) -> (Session, Option<Severity>) {
    let triggered: Vec<&'static threats::ThreatRule> = threats::registry()
        .iter()
        .filter(|rule| session.threat(rule.id).is_none())
        .filter(|rule| (rule.condition)(&session))
        .collect();

    let mut most_severe: Option<Severity> = None;
    for rule in triggered {
        let threat = threats::materialize(rule, &session);
        tracing::warn!(
            rule_id = rule.id,
            severity = rule.severity.label(),
            letter = rule.letter.code(),
            "threat rule fired"
        );
        session.record_event(
            ClinicalEvent::new(
                ClinicalEventKind::ThreatDetected,
                format!("Threat detected: {}", rule.name),
            )
            .with_detail(json!({
                "rule_id": rule.id,
                "severity": rule.severity.label(),
                "interventions": threat.interventions.len(),
            })),
        );
        session.threats.push(threat);
        most_severe = Some(most_severe.map_or(rule.severity, |m| m.min(rule.severity)));
    }
    (session, most_severe)
}

fn interpret(
    question: &Question,
    answer: &Answer,
    band: AgeBand,
) -> (Severity, String, String, Option<String>) {
    match (&question.input, answer) {
        (QuestionInput::Choice { .. }, Answer::Choice { value }) => match question.option(value) {
            Some(option) => (option.severity, option.label.to_string(), value.clone(), None),
            None => (Severity::Normal, value.clone(), value.clone(), None),
        },
        (QuestionInput::Number { unit, vital }, Answer::Number { value }) => {
            let interpretation = reference::classify(*vital, *value, band);
            (
                interpretation.severity,
                interpretation.label,
                format_number(*value),
                Some(unit.to_string()),
            )
        }
        (QuestionInput::NumberPair { units, vital }, Answer::NumberPair { first, second }) => {
            let interpretation = reference::classify(*vital, *first, band);
            let unit = units[0].split(' ').next().unwrap_or(units[0]);
            (
                interpretation.severity,
                interpretation.label,
                format!("{}/{}", format_number(*first), format_number(*second)),
                Some(unit.to_string()),
            )
        }
        // Shape mismatch is a caller contract violation; record verbatim.
        _ => {
            let raw = answer_text(answer);
            (Severity::Normal, raw.clone(), raw, None)
        }
    }
}

fn update_vitals(session: &mut Session, question: &Question, answer: &Answer) {
    match (&question.input, answer) {
        (QuestionInput::Number { vital, .. }, Answer::Number { value }) => {
            assign_vital(session, *vital, *value);
        }
        (QuestionInput::NumberPair { vital, .. }, Answer::NumberPair { first, second }) => {
            assign_vital(session, *vital, *first);
            if *vital == VitalKind::SystolicBp {
                session.vitals.diastolic_bp = Some(*second);
            }
        }
        _ => {}
    }
}

fn assign_vital(session: &mut Session, vital: VitalKind, value: f64) {
    let vitals = &mut session.vitals;
    match vital {
        VitalKind::RespRate => vitals.resp_rate = Some(value),
        VitalKind::Spo2 => vitals.spo2 = Some(value),
        VitalKind::HeartRate => vitals.heart_rate = Some(value),
        VitalKind::CapillaryRefill => vitals.cap_refill_secs = Some(value),
        VitalKind::SystolicBp => vitals.systolic_bp = Some(value),
        VitalKind::Temperature => vitals.temperature_c = Some(value),
        VitalKind::Glucose => vitals.glucose_mmol = Some(value),
    }
}

/// Perfusion from the circulation exam: hypotension for age or a markedly
/// delayed refill means decompensated; any abnormal circulation sign
/// short of that means compensated.
fn derive_perfusion(session: &Session) -> Option<Perfusion> {
    let vitals = &session.vitals;
    let skin_abnormal =
        session.answer_is("skin_signs", "pale_cool") || session.answer_is("skin_signs", "mottled");

    let assessed = vitals.heart_rate.is_some()
        || vitals.cap_refill_secs.is_some()
        || vitals.systolic_bp.is_some()
        || session.has_answered("skin_signs");
    if !assessed {
        return None;
    }

    let hypotensive = vitals.systolic_bp.is_some_and(|bp| {
        reference::classify(VitalKind::SystolicBp, bp, session.age_band).severity
            == Severity::Critical
    });
    if hypotensive || vitals.cap_refill_secs.is_some_and(|c| c >= 5.0) {
        return Some(Perfusion::Decompensated);
    }

    let refill_delayed = vitals.cap_refill_secs.is_some_and(|c| c >= 2.0);
    let rate_abnormal = vitals.heart_rate.is_some_and(|hr| {
        matches!(
            reference::classify(VitalKind::HeartRate, hr, session.age_band).severity,
            Severity::Critical | Severity::Urgent
        )
    });
    let pressure_low = vitals.systolic_bp.is_some_and(|bp| {
        reference::classify(VitalKind::SystolicBp, bp, session.age_band).severity
            == Severity::Urgent
    });

    if refill_delayed || rate_abnormal || pressure_low || skin_abnormal {
        Some(Perfusion::Compensated)
    } else {
        Some(Perfusion::Adequate)
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn answer_text(answer: &Answer) -> String {
    match answer {
        Answer::Choice { value } => value.clone(),
        Answer::Number { value } => format_number(*value),
        Answer::NumberPair { first, second } => {
            format!("{}/{}", format_number(*first), format_number(*second))
        }
    }
}
