//! Diagnosis suggestion.
//!
//! A pure function over the finding/vitals snapshot. Confidence is set by
//! rule-specific combinations of corroborating evidence, and every entry
//! carries differentials: the engine suggests, it does not conclude.

use serde::Serialize;
use ts_rs::TS;

use acute_core::models::{AgeBand, Perfusion, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SuggestedDiagnosis {
    pub diagnosis: String,
    pub confidence: Confidence,
    pub supporting_findings: Vec<String>,
    pub differentials: Vec<String>,
    pub protocol: String,
}

/// Candidate diagnoses from the accumulated evidence, highest confidence
/// first.
pub fn suggested_diagnoses(session: &Session) -> Vec<SuggestedDiagnosis> {
    let detectors: &[fn(&Session) -> Option<SuggestedDiagnosis>] = &[
        diabetic_ketoacidosis,
        hyperglycemia_uncorroborated,
        septic_shock,
        meningococcal_sepsis,
        anaphylaxis,
        hemorrhagic_shock,
        cardiogenic_process,
        hypoglycemic_seizure,
        ongoing_seizure,
        croup,
        foreign_body_aspiration,
        lower_airway_obstruction,
        raised_intracranial_pressure,
    ];

    let mut out: Vec<SuggestedDiagnosis> = detectors.iter().filter_map(|d| d(session)).collect();
    out.sort_by_key(|d| d.confidence);
    out
}

fn in_shock(session: &Session) -> bool {
    matches!(
        session.perfusion,
        Some(Perfusion::Compensated | Perfusion::Decompensated)
    )
}

fn fever(session: &Session) -> bool {
    session.vitals.temperature_c.is_some_and(|t| t >= 38.0)
}

fn suggest(
    diagnosis: &str,
    confidence: Confidence,
    supporting: &[String],
    differentials: &[&str],
    protocol: &str,
) -> Option<SuggestedDiagnosis> {
    Some(SuggestedDiagnosis {
        diagnosis: diagnosis.to_string(),
        confidence,
        supporting_findings: supporting.to_vec(),
        differentials: differentials.iter().map(|d| d.to_string()).collect(),
        protocol: protocol.to_string(),
    })
}

fn diabetic_ketoacidosis(s: &Session) -> Option<SuggestedDiagnosis> {
    let glucose = s.vitals.glucose_mmol.filter(|g| *g >= 14.0)?;
    if !s.answer_is("breath_sounds", "kussmaul") {
        return None;
    }
    suggest(
        "Diabetic ketoacidosis",
        Confidence::High,
        &[
            format!("Blood glucose {glucose:.1} mmol/L"),
            "Kussmaul (acidotic) breathing".to_string(),
        ],
        &[
            "Hyperosmolar hyperglycemic state",
            "Salicylate poisoning",
            "Sepsis with stress hyperglycemia",
        ],
        "DKA pathway: confirm ketones and venous gas, cautious rehydration over 48 h, insulin \
         after the first hour, hourly neuro observations",
    )
}

/// Hyperglycemia without acidotic breathing is deliberately not collapsed
/// into DKA; ketone and gas evidence is required for that call.
fn hyperglycemia_uncorroborated(s: &Session) -> Option<SuggestedDiagnosis> {
    let glucose = s.vitals.glucose_mmol.filter(|g| *g >= 14.0)?;
    if s.answer_is("breath_sounds", "kussmaul") {
        return None;
    }
    suggest(
        "Marked hyperglycemia — cause not yet established",
        Confidence::Moderate,
        &[format!("Blood glucose {glucose:.1} mmol/L")],
        &[
            "Diabetic ketoacidosis",
            "Hyperosmolar hyperglycemic state",
            "Stress hyperglycemia",
        ],
        "Check blood ketones and a venous gas before committing to a DKA pathway",
    )
}

fn septic_shock(s: &Session) -> Option<SuggestedDiagnosis> {
    if !(fever(s) && in_shock(s)) {
        return None;
    }
    let temp = s.vitals.temperature_c.unwrap_or_default();
    suggest(
        "Septic shock",
        Confidence::High,
        &[
            format!("Temperature {temp:.1} °C"),
            format!(
                "Perfusion: {}",
                s.perfusion.map(|p| p.label()).unwrap_or("abnormal")
            ),
        ],
        &[
            "Toxic shock syndrome",
            "Myocarditis with fever",
            "Severe dehydration with intercurrent fever",
        ],
        "Sepsis pathway: cultures, broad-spectrum antibiotics within 60 min, 10-20 mL/kg fluid \
         aliquots with reassessment, early inotropes if fluid-refractory",
    )
}

fn meningococcal_sepsis(s: &Session) -> Option<SuggestedDiagnosis> {
    if !(s.answer_is("rash", "petechiae") && fever(s)) {
        return None;
    }
    suggest(
        "Meningococcal sepsis",
        Confidence::High,
        &[
            "Non-blanching petechial/purpuric rash".to_string(),
            "Fever".to_string(),
        ],
        &[
            "Other bacterial sepsis with DIC",
            "Immune thrombocytopenia with viral illness",
            "Henoch-Schönlein purpura",
        ],
        "Immediate ceftriaxone, aggressive shock management, early intensive care referral",
    )
}

fn anaphylaxis(s: &Session) -> Option<SuggestedDiagnosis> {
    let airway = s.answer_is("airway_sounds", "stridor");
    let lower = s.answer_is("breath_sounds", "wheeze");
    if !(s.answer_is("rash", "urticaria") && (airway || lower)) {
        return None;
    }
    let obstruction = if airway { "Stridor" } else { "Wheeze" };
    suggest(
        "Anaphylaxis",
        Confidence::High,
        &[
            "Urticarial rash".to_string(),
            obstruction.to_string(),
        ],
        &["Severe asthma with viral rash", "Angioedema (non-allergic)"],
        "IM adrenaline first; repeat at 5 min; fluid bolus for hypotension",
    )
}

fn hemorrhagic_shock(s: &Session) -> Option<SuggestedDiagnosis> {
    let bleeding = s.answer_is("massive_bleeding", "uncontrolled")
        || s.answer_is("massive_bleeding", "controlled");
    if !(bleeding && in_shock(s)) {
        return None;
    }
    suggest(
        "Hemorrhagic shock",
        Confidence::High,
        &[
            "External hemorrhage".to_string(),
            "Shock physiology".to_string(),
        ],
        &["Occult internal bleeding", "Neurogenic shock (spinal injury)"],
        "Hemorrhage control, tranexamic acid, balanced blood-product resuscitation over \
         crystalloid",
    )
}

fn cardiogenic_process(s: &Session) -> Option<SuggestedDiagnosis> {
    if !(s.answer_is("breath_sounds", "crackles") && in_shock(s)) {
        return None;
    }
    suggest(
        "Cardiogenic shock",
        Confidence::Moderate,
        &[
            "Crackles on auscultation".to_string(),
            "Shock physiology".to_string(),
        ],
        &[
            "Fluid overload from resuscitation",
            "Myocarditis",
            "Pneumonia with sepsis",
        ],
        "Restrict further boluses, early echocardiography, inotropic support",
    )
}

fn hypoglycemic_seizure(s: &Session) -> Option<SuggestedDiagnosis> {
    let glucose = s.vitals.glucose_mmol.filter(|g| *g < 3.3)?;
    let seizing = s.answer_is("seizure_activity", "active_seizure")
        || s.answer_is("seizure_activity", "postictal");
    if !seizing {
        return None;
    }
    suggest(
        "Hypoglycemic seizure",
        Confidence::High,
        &[
            format!("Blood glucose {glucose:.1} mmol/L"),
            "Seizure activity".to_string(),
        ],
        &["Epileptic seizure with incidental low glucose", "Inborn error of metabolism"],
        "Correct glucose first — seizures from hypoglycemia do not respond to benzodiazepines",
    )
}

fn ongoing_seizure(s: &Session) -> Option<SuggestedDiagnosis> {
    if !s.answer_is("seizure_activity", "active_seizure") {
        return None;
    }
    // Covered with higher confidence by the hypoglycemia detector.
    if s.vitals.glucose_mmol.is_some_and(|g| g < 3.3) {
        return None;
    }
    suggest(
        "Convulsive status epilepticus (evolving)",
        Confidence::Moderate,
        &["Ongoing seizure activity".to_string()],
        &[
            "Febrile seizure",
            "CNS infection",
            "Traumatic brain injury",
            "Toxic ingestion",
        ],
        "Benzodiazepine ladder with strict timings; second-line agent at 20 min",
    )
}

fn croup(s: &Session) -> Option<SuggestedDiagnosis> {
    if !(s.answer_is("airway_sounds", "stridor") && fever(s)) {
        return None;
    }
    if s.answer_is("rash", "urticaria") {
        return None;
    }
    suggest(
        "Croup (laryngotracheobronchitis)",
        Confidence::Moderate,
        &["Stridor".to_string(), "Fever".to_string()],
        &["Epiglottitis", "Bacterial tracheitis", "Inhaled foreign body"],
        "Dexamethasone, nebulised adrenaline for stridor at rest, minimal handling",
    )
}

fn foreign_body_aspiration(s: &Session) -> Option<SuggestedDiagnosis> {
    if !s.answer_is("choking_event", "witnessed_choking") {
        return None;
    }
    suggest(
        "Foreign body airway obstruction",
        Confidence::High,
        &["Witnessed choking episode".to_string()],
        &["Croup", "Anaphylaxis with airway swelling"],
        "Age-appropriate choking algorithm; bronchoscopy if below the cords",
    )
}

fn lower_airway_obstruction(s: &Session) -> Option<SuggestedDiagnosis> {
    if !s.answer_is("breath_sounds", "wheeze") {
        return None;
    }
    if s.answer_is("rash", "urticaria") {
        return None;
    }
    match s.age_band {
        AgeBand::Neonate | AgeBand::Infant => suggest(
            "Bronchiolitis",
            Confidence::Moderate,
            &["Wheeze in an infant".to_string()],
            &["Viral-induced wheeze", "Cardiac failure", "Inhaled foreign body"],
            "Supportive: oxygen, minimal handling, NG feeds; bronchodilators rarely help",
        ),
        _ => suggest(
            "Acute asthma",
            Confidence::Moderate,
            &["Wheeze".to_string()],
            &["Viral-induced wheeze", "Inhaled foreign body", "Anaphylaxis"],
            "Burst bronchodilator therapy, early corticosteroid, reassess severity",
        ),
    }
}

fn raised_intracranial_pressure(s: &Session) -> Option<SuggestedDiagnosis> {
    let pupils = s.answer_is("pupils", "unequal") || s.answer_is("pupils", "fixed_dilated");
    if !pupils {
        return None;
    }
    suggest(
        "Raised intracranial pressure",
        Confidence::Moderate,
        &["Abnormal pupillary response".to_string()],
        &[
            "Post-ictal pupillary changes",
            "Toxic ingestion (anticholinergic/opioid)",
            "Direct ocular trauma",
        ],
        "Neuroprotective measures, hypertonic saline, urgent imaging and neurosurgical review",
    )
}
