use acute_core::models::{AgeBand, Letter, Severity};
use acute_protocol::questions::VitalKind;
use acute_protocol::reference::{airway_position, classify};
use acute_protocol::{all_assessments, question, questions_for};

#[test]
fn every_letter_has_questions() {
    for letter in Letter::sequence(true) {
        assert!(
            !questions_for(*letter).is_empty(),
            "letter {} has no questions",
            letter.code()
        );
    }
}

#[test]
fn question_ids_are_unique_across_the_catalog() {
    let mut seen = std::collections::HashSet::new();
    for assessment in all_assessments() {
        for q in assessment.questions() {
            assert!(seen.insert(q.id), "duplicate question id: {}", q.id);
        }
    }
}

#[test]
fn assessments_cover_the_trauma_sequence_in_order() {
    let letters: Vec<Letter> = all_assessments().iter().map(|a| a.letter()).collect();
    assert_eq!(letters, Letter::sequence(true).to_vec());
}

#[test]
fn avpu_is_assessed_at_airway() {
    let q = question(Letter::A, "avpu").expect("avpu question");
    let unresponsive = q.option("unresponsive").expect("unresponsive option");
    assert_eq!(unresponsive.severity, Severity::Critical);
}

#[test]
fn choice_lookup_returns_none_for_unknown_value() {
    let q = question(Letter::A, "airway_status").unwrap();
    assert!(q.option("no_such_value").is_none());
}

#[test]
fn spo2_classification_thresholds() {
    assert_eq!(classify(VitalKind::Spo2, 88.0, AgeBand::Child).severity, Severity::Critical);
    assert_eq!(classify(VitalKind::Spo2, 92.0, AgeBand::Child).severity, Severity::Urgent);
    assert_eq!(classify(VitalKind::Spo2, 97.0, AgeBand::Child).severity, Severity::Normal);
}

#[test]
fn respiratory_rate_is_age_aware() {
    // 45/min is tachypnea for a child but normal for an infant.
    assert_eq!(
        classify(VitalKind::RespRate, 45.0, AgeBand::Child).severity,
        Severity::Urgent
    );
    assert_eq!(
        classify(VitalKind::RespRate, 45.0, AgeBand::Infant).severity,
        Severity::Normal
    );
    // Double the upper bound is critical.
    assert_eq!(
        classify(VitalKind::RespRate, 65.0, AgeBand::Child).severity,
        Severity::Critical
    );
}

#[test]
fn heart_rate_is_age_aware() {
    assert_eq!(
        classify(VitalKind::HeartRate, 45.0, AgeBand::Adult).severity,
        Severity::Urgent
    );
    assert_eq!(
        classify(VitalKind::HeartRate, 25.0, AgeBand::Adult).severity,
        Severity::Critical
    );
    assert_eq!(
        classify(VitalKind::HeartRate, 130.0, AgeBand::Infant).severity,
        Severity::Normal
    );
    assert_eq!(
        classify(VitalKind::HeartRate, 130.0, AgeBand::Adult).severity,
        Severity::Urgent
    );
}

#[test]
fn capillary_refill_bands() {
    assert_eq!(
        classify(VitalKind::CapillaryRefill, 1.5, AgeBand::Child).severity,
        Severity::Normal
    );
    assert_eq!(
        classify(VitalKind::CapillaryRefill, 2.5, AgeBand::Child).severity,
        Severity::Monitor
    );
    assert_eq!(
        classify(VitalKind::CapillaryRefill, 3.5, AgeBand::Child).severity,
        Severity::Urgent
    );
    assert_eq!(
        classify(VitalKind::CapillaryRefill, 5.0, AgeBand::Child).severity,
        Severity::Critical
    );
}

#[test]
fn hypotension_floor_is_age_banded() {
    assert_eq!(
        classify(VitalKind::SystolicBp, 65.0, AgeBand::Infant).severity,
        Severity::Critical
    );
    assert_eq!(
        classify(VitalKind::SystolicBp, 65.0, AgeBand::Neonate).severity,
        Severity::Normal
    );
    assert_eq!(
        classify(VitalKind::SystolicBp, 85.0, AgeBand::Adult).severity,
        Severity::Critical
    );
}

#[test]
fn any_fever_in_a_neonate_is_critical() {
    assert_eq!(
        classify(VitalKind::Temperature, 38.2, AgeBand::Neonate).severity,
        Severity::Critical
    );
    assert_eq!(
        classify(VitalKind::Temperature, 38.2, AgeBand::Child).severity,
        Severity::Monitor
    );
    assert_eq!(
        classify(VitalKind::Temperature, 39.4, AgeBand::Child).severity,
        Severity::Urgent
    );
    assert_eq!(
        classify(VitalKind::Temperature, 34.0, AgeBand::Child).severity,
        Severity::Urgent
    );
}

#[test]
fn glucose_classification_thresholds() {
    assert_eq!(classify(VitalKind::Glucose, 2.0, AgeBand::Child).severity, Severity::Critical);
    assert_eq!(classify(VitalKind::Glucose, 3.0, AgeBand::Child).severity, Severity::Urgent);
    assert_eq!(classify(VitalKind::Glucose, 5.0, AgeBand::Child).severity, Severity::Normal);
    assert_eq!(classify(VitalKind::Glucose, 12.0, AgeBand::Child).severity, Severity::Monitor);
    assert_eq!(classify(VitalKind::Glucose, 25.0, AgeBand::Child).severity, Severity::Urgent);
}

#[test]
fn airway_positioning_is_neutral_for_infants() {
    assert!(airway_position(AgeBand::Infant).contains("Neutral"));
    assert!(airway_position(AgeBand::Neonate).contains("Neutral"));
    assert!(airway_position(AgeBand::Child).contains("Head-tilt"));
}
