#![allow(dead_code)]

use acute_core::models::{Letter, QuickAssessment, Session};
use acute_engine::transitions::{
    answer_primary_survey, answer_quick_assessment, start_quick_assessment, Answer,
};

/// A 5-year-old (child band) medical presentation, taken through the quick
/// assessment and sitting at the start of the primary survey.
pub fn child_session(weight_kg: f64) -> Session {
    let session = Session::new(Some(weight_kg), Some("5 years"), false);
    let session = start_quick_assessment(session);
    answer_quick_assessment(session, QuickAssessment::Sick)
}

pub fn answer_choice(session: Session, letter: Letter, id: &str, value: &str) -> Session {
    let question = acute_protocol::question(letter, id).expect("question in catalog");
    answer_primary_survey(
        session,
        question,
        Answer::Choice { value: value.to_string() },
    )
}

pub fn answer_number(session: Session, letter: Letter, id: &str, value: f64) -> Session {
    let question = acute_protocol::question(letter, id).expect("question in catalog");
    answer_primary_survey(session, question, Answer::Number { value })
}

pub fn answer_pair(session: Session, letter: Letter, id: &str, first: f64, second: f64) -> Session {
    let question = acute_protocol::question(letter, id).expect("question in catalog");
    answer_primary_survey(session, question, Answer::NumberPair { first, second })
}

pub fn walk_normal_airway(session: Session) -> Session {
    let session = answer_choice(session, Letter::A, "avpu", "alert");
    let session = answer_choice(session, Letter::A, "airway_status", "patent");
    let session = answer_choice(session, Letter::A, "choking_event", "no");
    answer_choice(session, Letter::A, "airway_sounds", "none")
}

pub fn walk_normal_breathing(session: Session) -> Session {
    let session = answer_number(session, Letter::B, "resp_rate", 25.0);
    let session = answer_number(session, Letter::B, "spo2", 98.0);
    let session = answer_choice(session, Letter::B, "work_of_breathing", "normal");
    answer_choice(session, Letter::B, "breath_sounds", "clear")
}

pub fn walk_normal_circulation(session: Session) -> Session {
    let session = answer_number(session, Letter::C, "heart_rate", 100.0);
    let session = answer_number(session, Letter::C, "cap_refill", 1.0);
    let session = answer_pair(session, Letter::C, "blood_pressure", 110.0, 70.0);
    answer_choice(session, Letter::C, "skin_signs", "warm_pink")
}

pub fn walk_normal_disability(session: Session) -> Session {
    let session = answer_number(session, Letter::D, "glucose", 5.0);
    let session = answer_choice(session, Letter::D, "pupils", "equal_reactive");
    answer_choice(session, Letter::D, "seizure_activity", "none")
}

pub fn walk_normal_exposure(session: Session) -> Session {
    let session = answer_number(session, Letter::E, "temperature", 37.0);
    let session = answer_choice(session, Letter::E, "rash", "none");
    answer_choice(session, Letter::E, "exposure_findings", "none")
}
