mod common;

use acute_core::models::{Letter, Phase, QuickAssessment, Session, Severity};
use acute_engine::transitions::{
    achieve_rosc, answer_quick_assessment, return_to_primary_survey, set_definitive_diagnosis,
    start_quick_assessment, trigger_cardiac_arrest, update_patient_info,
};
use acute_engine::current_questions;

use common::*;

#[test]
fn quick_assessment_moves_into_the_primary_survey() {
    let session = Session::new(Some(18.0), Some("5 years"), false);
    assert_eq!(session.phase, Phase::Idle);

    let session = start_quick_assessment(session);
    assert_eq!(session.phase, Phase::QuickAssessment);

    let session = answer_quick_assessment(session, QuickAssessment::Sick);
    assert_eq!(session.phase, Phase::PrimarySurvey);
    assert_eq!(session.current_letter, Letter::A);
}

#[test]
fn trauma_presentations_start_at_exsanguination() {
    let session = Session::new(Some(18.0), Some("5 years"), true);
    let session = start_quick_assessment(session);
    let session = answer_quick_assessment(session, QuickAssessment::Sick);
    assert_eq!(session.current_letter, Letter::X);
}

#[test]
fn obstructed_airway_forces_the_intervention_phase() {
    let session = child_session(18.0);
    let session = answer_choice(session, Letter::A, "avpu", "alert");
    let session = answer_choice(session, Letter::A, "airway_status", "obstructed");

    assert_eq!(session.phase, Phase::Intervention);
    let active = session.active_threats();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Airway Obstruction");
    assert_eq!(active[0].severity, Severity::Critical);
    assert!(!session.all_pending_critical().is_empty());
    // Positioning guidance reflects the child age band.
    assert!(active[0].interventions[0].action.contains("Head-tilt"));
}

#[test]
fn normal_answers_advance_through_every_letter() {
    let session = child_session(18.0);
    let session = walk_normal_airway(session);
    assert_eq!(session.current_letter, Letter::B);
    assert_eq!(session.phase, Phase::PrimarySurvey);

    let session = walk_normal_breathing(session);
    assert_eq!(session.current_letter, Letter::C);

    let session = walk_normal_circulation(session);
    assert_eq!(session.current_letter, Letter::D);

    let session = walk_normal_disability(session);
    assert_eq!(session.current_letter, Letter::E);

    let session = walk_normal_exposure(session);
    assert_eq!(session.phase, Phase::SecondarySurvey);
}

#[test]
fn return_to_survey_stays_on_an_incomplete_letter() {
    let session = child_session(18.0);
    let session = answer_choice(session, Letter::A, "airway_status", "obstructed");
    assert_eq!(session.phase, Phase::Intervention);

    let session = return_to_primary_survey(session);
    assert_eq!(session.phase, Phase::PrimarySurvey);
    assert_eq!(session.current_letter, Letter::A);
}

#[test]
fn return_to_survey_advances_once_the_letter_is_complete() {
    let session = child_session(18.0);
    let session = answer_choice(session, Letter::A, "avpu", "alert");
    let session = answer_choice(session, Letter::A, "airway_status", "obstructed");
    let session = answer_choice(session, Letter::A, "choking_event", "no");
    let session = answer_choice(session, Letter::A, "airway_sounds", "none");
    assert_eq!(session.phase, Phase::Intervention);

    let session = return_to_primary_survey(session);
    assert_eq!(session.phase, Phase::PrimarySurvey);
    assert_eq!(session.current_letter, Letter::B);
}

#[test]
fn re_answering_a_question_is_a_no_op() {
    let session = child_session(18.0);
    let session = answer_choice(session, Letter::A, "avpu", "alert");
    let findings_before = session.findings.len();
    let events_before = session.events.len();

    let session = answer_choice(session, Letter::A, "avpu", "unresponsive");
    assert_eq!(session.findings.len(), findings_before);
    assert_eq!(session.events.len(), events_before);
    assert!(session.answer_is("avpu", "alert"));
}

#[test]
fn current_questions_shrink_as_answers_land() {
    let session = child_session(18.0);
    let total = acute_protocol::questions_for(Letter::A).len();
    assert_eq!(current_questions(&session).len(), total);

    let session = answer_choice(session, Letter::A, "avpu", "alert");
    assert_eq!(current_questions(&session).len(), total - 1);
}

#[test]
fn cardiac_arrest_interrupts_and_is_idempotent() {
    let session = child_session(18.0);
    let session = trigger_cardiac_arrest(session);
    assert_eq!(session.phase, Phase::CardiacArrest);

    let session = trigger_cardiac_arrest(session);
    let arrests = session
        .threats
        .iter()
        .filter(|t| t.rule_id == "cardiac_arrest")
        .count();
    assert_eq!(arrests, 1);

    let session = achieve_rosc(session);
    assert_eq!(session.phase, Phase::Ongoing);
}

#[test]
fn rosc_outside_arrest_changes_nothing() {
    let session = child_session(18.0);
    let session = achieve_rosc(session);
    assert_eq!(session.phase, Phase::PrimarySurvey);
}

#[test]
fn definitive_diagnosis_closes_the_loop() {
    let session = child_session(18.0);
    let session = set_definitive_diagnosis(session, "Diabetic ketoacidosis");
    assert_eq!(session.phase, Phase::DefinitiveCare);
    assert_eq!(
        session.definitive_diagnosis.as_deref(),
        Some("Diabetic ketoacidosis")
    );
}

#[test]
fn weight_correction_regenerates_pending_doses_only() {
    // No weight known: doses render per-kilogram.
    let session = Session::new(None, Some("5 years"), false);
    let session = start_quick_assessment(session);
    let session = answer_quick_assessment(session, QuickAssessment::Sick);
    let session = walk_normal_airway(session);
    let session = answer_number(session, Letter::B, "resp_rate", 25.0);
    let session = answer_number(session, Letter::B, "spo2", 98.0);
    let session = answer_choice(session, Letter::B, "work_of_breathing", "normal");
    let session = answer_choice(session, Letter::B, "breath_sounds", "wheeze");

    let threat = session.threat("bronchospasm").expect("bronchospasm threat");
    let salbutamol = threat
        .interventions
        .iter()
        .find(|i| i.action.contains("salbutamol"))
        .expect("salbutamol intervention");
    assert!(salbutamol.dose_display.as_deref().unwrap().contains("/kg"));
    let salbutamol_id = salbutamol.id;

    // Weight arrives mid-case: the still-pending dose is re-rendered.
    let session = update_patient_info(session, Some(20.0), None);
    let display = session
        .intervention(salbutamol_id)
        .and_then(|i| i.dose_display.as_deref())
        .unwrap();
    assert_eq!(display, "Salbutamol (nebulised) 3.0 mg NEB");
}

#[test]
fn age_update_switches_the_default_fluid() {
    let session = Session::new(Some(3.5), Some("2 days"), false);
    assert_eq!(
        session.fluids.default_fluid,
        acute_core::models::FluidType::IsotonicSaline
    );

    let session = update_patient_info(session, None, Some("3 years"));
    assert_eq!(
        session.fluids.default_fluid,
        acute_core::models::FluidType::BalancedCrystalloid
    );
    assert_eq!(session.age_band, acute_core::models::AgeBand::Child);
}
