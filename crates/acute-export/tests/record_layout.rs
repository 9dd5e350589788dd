use acute_core::models::{Letter, Phase, QuickAssessment, SampleField, Session};
use acute_engine::transitions::{
    answer_primary_survey, answer_quick_assessment, complete_intervention, record_sample_history,
    start_quick_assessment, Answer,
};
use acute_export::render_clinical_record;

fn obstructed_airway_session() -> Session {
    let session = Session::new(Some(18.0), Some("5 years"), false);
    let session = start_quick_assessment(session);
    let session = answer_quick_assessment(session, QuickAssessment::Sick);

    let avpu = acute_protocol::question(Letter::A, "avpu").unwrap();
    let session = answer_primary_survey(
        session,
        avpu,
        Answer::Choice { value: "alert".to_string() },
    );
    let airway = acute_protocol::question(Letter::A, "airway_status").unwrap();
    answer_primary_survey(
        session,
        airway,
        Answer::Choice { value: "obstructed".to_string() },
    )
}

#[test]
fn record_carries_every_section_header() {
    let record = render_clinical_record(&obstructed_airway_session());

    for header in [
        "ACUTE CLINICAL RECORD",
        "PATIENT",
        "VITAL SIGNS",
        "FLUID RESUSCITATION",
        "FINDINGS",
        "THREATS",
        "SAFETY ALERTS",
        "SAMPLE HISTORY",
        "EVENT LOG",
    ] {
        assert!(record.contains(header), "missing section: {header}");
    }
}

#[test]
fn record_reflects_patient_and_phase() {
    let session = obstructed_airway_session();
    assert_eq!(session.phase, Phase::Intervention);

    let record = render_clinical_record(&session);
    assert!(record.contains("Weight: 18 kg"));
    assert!(record.contains("Age: 5 years (child)"));
    assert!(record.contains("Phase: intervention"));
    assert!(record.contains("Presentation: medical"));
}

#[test]
fn interventions_show_their_lifecycle_as_checkmarks() {
    let session = obstructed_airway_session();
    let first = session.all_pending_critical()[0].id;
    let session = complete_intervention(session, first).unwrap();

    let record = render_clinical_record(&session);
    assert!(record.contains("Airway Obstruction (critical, A)"));
    assert!(record.contains("[x]"));
    assert!(record.contains("[ ]"));
}

#[test]
fn findings_are_tagged_with_letter_and_severity() {
    let record = render_clinical_record(&obstructed_airway_session());
    assert!(record.contains("[A] airway_status = obstructed"));
    assert!(record.contains("(CRITICAL)"));
}

#[test]
fn sample_history_appears_when_taken() {
    let session = obstructed_airway_session();
    let record = render_clinical_record(&session);
    assert!(record.contains("(not taken)"));

    let session = record_sample_history(session, SampleField::Allergies, "penicillin");
    let record = render_clinical_record(&session);
    assert!(record.contains("Allergies: penicillin"));
}

#[test]
fn event_log_lists_every_recorded_event() {
    let session = obstructed_airway_session();
    let record = render_clinical_record(&session);
    let log_lines = record
        .split("EVENT LOG")
        .nth(1)
        .unwrap()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count();
    assert_eq!(log_lines, session.events.len());
}
