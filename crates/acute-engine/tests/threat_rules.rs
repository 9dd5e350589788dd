mod common;

use acute_core::models::{Letter, Perfusion, Phase, Session, Severity};

use common::*;

#[test]
fn no_rule_ever_materializes_twice() {
    // Delayed refill fires decompensated shock; a hypotensive reading
    // afterwards satisfies the same condition but the threat already
    // exists.
    let session = child_session(18.0);
    let session = walk_normal_airway(session);
    let session = walk_normal_breathing(session);
    let session = answer_number(session, Letter::C, "cap_refill", 6.0);
    assert_eq!(session.perfusion, Some(Perfusion::Decompensated));
    assert_eq!(session.phase, Phase::Intervention);

    let session = answer_pair(session, Letter::C, "blood_pressure", 60.0, 35.0);
    let count = session
        .threats
        .iter()
        .filter(|t| t.rule_id == "decompensated_shock")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn one_answer_can_fire_several_rules_and_the_most_severe_drives_the_phase() {
    // Heart rate 50 in a child: tachy/brady classification marks the
    // circulation abnormal (compensated shock, urgent) and the rate is
    // below 60 with poor perfusion (bradycardia, critical).
    let session = child_session(18.0);
    let session = walk_normal_airway(session);
    let session = walk_normal_breathing(session);
    let session = answer_number(session, Letter::C, "heart_rate", 50.0);

    assert!(session.threat("compensated_shock").is_some());
    assert!(session.threat("bradycardia_poor_perfusion").is_some());
    assert_eq!(session.phase, Phase::Intervention);

    let active = session.active_threats();
    assert_eq!(active[0].rule_id, "bradycardia_poor_perfusion");
    assert_eq!(active[0].severity, Severity::Critical);
}

#[test]
fn anaphylaxis_needs_evidence_from_two_letters() {
    let session = child_session(18.0);
    let session = walk_normal_airway(session);
    let session = answer_number(session, Letter::B, "resp_rate", 25.0);
    let session = answer_number(session, Letter::B, "spo2", 95.0);
    let session = answer_choice(session, Letter::B, "work_of_breathing", "normal");
    let session = answer_choice(session, Letter::B, "breath_sounds", "wheeze");
    // Wheeze alone: bronchospasm, no anaphylaxis yet.
    assert!(session.threat("anaphylaxis").is_none());

    let session = acute_engine::transitions::return_to_primary_survey(session);
    let session = walk_normal_circulation(session);
    let session = walk_normal_disability(session);
    let session = answer_number(session, Letter::E, "temperature", 37.0);
    let session = answer_choice(session, Letter::E, "rash", "urticaria");

    let threat = session.threat("anaphylaxis").expect("anaphylaxis threat");
    assert_eq!(threat.severity, Severity::Critical);
    let adrenaline = threat
        .interventions
        .iter()
        .find(|i| i.action.contains("IM adrenaline"))
        .expect("IM adrenaline intervention");
    // 0.01 mg/kg at 18 kg.
    assert_eq!(
        adrenaline.dose_display.as_deref(),
        Some("Adrenaline (1 mg/mL) 0.18 mg IM")
    );
    assert!(adrenaline.timer_secs.is_some());
}

#[test]
fn petechial_rash_with_fever_is_critical() {
    let session = child_session(18.0);
    let session = walk_normal_airway(session);
    let session = walk_normal_breathing(session);
    let session = walk_normal_circulation(session);
    let session = walk_normal_disability(session);
    let session = answer_number(session, Letter::E, "temperature", 39.5);
    let session = answer_choice(session, Letter::E, "rash", "petechiae");

    let threat = session.threat("petechial_fever").expect("petechial fever threat");
    assert_eq!(threat.severity, Severity::Critical);
    assert!(threat
        .interventions
        .iter()
        .any(|i| i.action.contains("antibiotic")));
    assert_eq!(session.phase, Phase::Intervention);
}

#[test]
fn choking_interventions_are_age_appropriate() {
    let infant = {
        let session = Session::new(Some(8.0), Some("7 months"), false);
        let session = acute_engine::transitions::start_quick_assessment(session);
        acute_engine::transitions::answer_quick_assessment(
            session,
            acute_core::models::QuickAssessment::Sick,
        )
    };
    let infant = answer_choice(infant, Letter::A, "avpu", "alert");
    let infant = answer_choice(infant, Letter::A, "airway_status", "partially_obstructed");
    let infant = answer_choice(infant, Letter::A, "choking_event", "witnessed_choking");
    let threat = infant.threat("choking_foreign_body").expect("choking threat");
    assert!(threat.interventions[0].action.contains("chest thrusts"));

    let child = child_session(18.0);
    let child = answer_choice(child, Letter::A, "choking_event", "witnessed_choking");
    let threat = child.threat("choking_foreign_body").expect("choking threat");
    assert!(threat.interventions[0].action.contains("abdominal thrusts"));
}

#[test]
fn stridor_adds_nebulised_adrenaline_to_partial_obstruction() {
    let session = child_session(18.0);
    let session = answer_choice(session, Letter::A, "airway_sounds", "stridor");
    let threat = session
        .threat("partial_airway_obstruction")
        .expect("partial obstruction threat");
    assert!(threat
        .interventions
        .iter()
        .any(|i| i.action.contains("nebulised adrenaline")));
}

#[test]
fn neonatal_fever_fires_the_fever_rule_with_a_septic_screen() {
    let session = Session::new(Some(3.5), Some("10 days"), false);
    let session = acute_engine::transitions::start_quick_assessment(session);
    let session = acute_engine::transitions::answer_quick_assessment(
        session,
        acute_core::models::QuickAssessment::Sick,
    );
    let session = answer_number(session, Letter::E, "temperature", 38.2);

    let threat = session.threat("high_fever").expect("fever threat");
    assert!(threat
        .interventions
        .iter()
        .any(|i| i.action.contains("septic screen")));
}

#[test]
fn unresponsive_avpu_is_an_airway_threat() {
    let session = child_session(18.0);
    let session = answer_choice(session, Letter::A, "avpu", "unresponsive");

    let threat = session.threat("unprotected_airway").expect("airway threat");
    assert_eq!(threat.name, "Unresponsive — Airway Not Protected");
    assert_eq!(session.phase, Phase::Intervention);
}

#[test]
fn severe_hypoxemia_beats_moderate_hypoxemia() {
    let session = child_session(18.0);
    let session = walk_normal_airway(session);
    let session = answer_number(session, Letter::B, "spo2", 85.0);
    assert!(session.threat("severe_hypoxemia").is_some());
    assert!(session.threat("moderate_hypoxemia").is_none());
}
