//! The threat rule registry.
//!
//! Each rule pairs a trigger condition over the session's findings and
//! vitals snapshot with a generator that prescribes interventions from the
//! session state as of detection time. Rules are evaluated in declared
//! order after every recorded finding; a rule whose threat already exists
//! is skipped, so each rule materializes at most once per session.

use std::sync::LazyLock;

use acute_core::models::{
    AgeBand, Dose, Intervention, Letter, Perfusion, Session, Severity, Threat,
};
use acute_protocol::reference::airway_position;

use crate::dose::format_dose;

pub struct ThreatRule {
    pub id: &'static str,
    pub name: &'static str,
    pub letter: Letter,
    pub severity: Severity,
    pub condition: fn(&Session) -> bool,
    pub interventions: fn(&Session) -> Vec<Intervention>,
}

/// All threat rules in declared evaluation order.
pub fn registry() -> &'static [ThreatRule] {
    &RULES
}

/// Look up a rule by id (used by the cardiac-arrest interrupt).
pub(crate) fn rule(id: &str) -> Option<&'static ThreatRule> {
    RULES.iter().find(|r| r.id == id)
}

/// Build the threat for a fired rule, generating its interventions from
/// the session state at this moment.
pub(crate) fn materialize(rule: &ThreatRule, session: &Session) -> Threat {
    Threat::new(
        rule.id,
        rule.name,
        rule.letter,
        rule.severity,
        (rule.interventions)(session),
    )
}

// ── Intervention builders ───────────────────────────────────

fn dosed(
    session: &Session,
    action: &str,
    drug: &str,
    dose_per_kg: f64,
    unit: &str,
    route: &str,
    max_dose: Option<f64>,
) -> Intervention {
    let dose = Dose {
        drug: drug.to_string(),
        dose_per_kg,
        unit: unit.to_string(),
        route: route.to_string(),
        max_dose,
    };
    let display = format_dose(&dose, session.weight_kg);
    Intervention::new(action).with_dose(dose, display)
}

/// A default-fluid bolus. The word "bolus" in the action text is what the
/// fluid tracker keys on.
pub(crate) fn fluid_bolus(session: &Session, ml_per_kg: f64) -> Intervention {
    let fluid = session.fluids.default_fluid.label();
    let dose = Dose {
        drug: fluid.to_string(),
        dose_per_kg: ml_per_kg,
        unit: "mL".to_string(),
        route: "IV/IO".to_string(),
        max_dose: Some(1000.0),
    };
    let display = format_dose(&dose, session.weight_kg);
    Intervention::new(format!("Fluid bolus {ml_per_kg:.0} mL/kg {fluid}"))
        .with_dose(dose, display)
        .with_timer(600, "Reassess perfusion after the bolus")
        .with_checks(&[
            "Recheck heart rate and capillary refill",
            "Auscultate for new crackles",
            "Palpate the liver edge",
            "Recheck blood pressure",
        ])
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

// ── Rule registry ───────────────────────────────────────────

static RULES: LazyLock<Vec<ThreatRule>> = LazyLock::new(|| {
    vec![
        ThreatRule {
            id: "massive_hemorrhage",
            name: "Massive External Hemorrhage",
            letter: Letter::X,
            severity: Severity::Critical,
            condition: |s| s.answer_is("massive_bleeding", "uncontrolled"),
            interventions: |s| {
                vec![
                    Intervention::new(
                        "Direct pressure — apply a tourniquet if limb bleeding is uncontrolled",
                    ),
                    Intervention::new("Establish two large-bore IV/IO access points"),
                    dosed(
                        s,
                        "Give tranexamic acid",
                        "Tranexamic acid",
                        15.0,
                        "mg",
                        "IV over 10 min",
                        Some(1000.0),
                    ),
                    fluid_bolus(s, 10.0),
                    Intervention::new("Activate the major hemorrhage protocol and crossmatch"),
                ]
            },
        },
        ThreatRule {
            id: "airway_obstruction",
            name: "Airway Obstruction",
            letter: Letter::A,
            severity: Severity::Critical,
            condition: |s| s.answer_is("airway_status", "obstructed"),
            interventions: |s| {
                vec![
                    Intervention::new(format!(
                        "Position airway: {}",
                        airway_position(s.age_band)
                    ))
                    .with_timer(120, "Recheck air entry after positioning")
                    .with_checks(&["Look for chest rise", "Listen for air entry at both axillae"]),
                    Intervention::new("Suction visible secretions under direct vision"),
                    Intervention::new("Insert an oropharyngeal airway if there is no gag reflex"),
                    Intervention::new("Prepare for advanced airway — call senior airway support"),
                ]
            },
        },
        ThreatRule {
            id: "choking_foreign_body",
            name: "Choking — Foreign Body Airway Obstruction",
            letter: Letter::A,
            severity: Severity::Critical,
            condition: |s| s.answer_is("choking_event", "witnessed_choking"),
            interventions: |s| {
                let thrusts = match s.age_band {
                    AgeBand::Neonate | AgeBand::Infant => {
                        "Five back blows followed by five chest thrusts"
                    }
                    _ => "Five back blows followed by five abdominal thrusts",
                };
                vec![
                    Intervention::new(thrusts),
                    Intervention::new(
                        "If the child becomes unresponsive: start CPR and inspect the mouth \
                         before each set of ventilations",
                    ),
                    Intervention::new("Do not perform blind finger sweeps"),
                ]
            },
        },
        ThreatRule {
            id: "unprotected_airway",
            name: "Unresponsive — Airway Not Protected",
            letter: Letter::A,
            severity: Severity::Critical,
            condition: |s| s.answer_is("avpu", "unresponsive"),
            interventions: |s| {
                vec![
                    Intervention::new(format!(
                        "Open the airway: {}",
                        airway_position(s.age_band)
                    )),
                    Intervention::new("Insert an oropharyngeal airway"),
                    Intervention::new("Bag-valve-mask with high-flow oxygen ready at the bedside"),
                    Intervention::new("Prepare for intubation — call senior airway support"),
                ]
            },
        },
        ThreatRule {
            id: "partial_airway_obstruction",
            name: "Partial Airway Obstruction",
            letter: Letter::A,
            severity: Severity::Urgent,
            condition: |s| {
                s.answer_is("airway_status", "partially_obstructed")
                    || s.answer_is("airway_sounds", "gurgling")
                    || s.answer_is("airway_sounds", "stridor")
            },
            interventions: |s| {
                let mut list = vec![
                    Intervention::new("Allow a position of comfort — do not force supine"),
                    Intervention::new("Suction only secretions you can see (gurgling)"),
                ];
                if s.answer_is("airway_sounds", "stridor") {
                    list.push(
                        dosed(
                            s,
                            "Give nebulised adrenaline for stridor at rest",
                            "Adrenaline (nebulised)",
                            0.5,
                            "mg",
                            "NEB",
                            Some(5.0),
                        )
                        .with_timer(1200, "Reassess stridor and work of breathing"),
                    );
                }
                list
            },
        },
        ThreatRule {
            id: "severe_hypoxemia",
            name: "Severe Hypoxemia",
            letter: Letter::B,
            severity: Severity::Critical,
            condition: |s| s.vitals.spo2.is_some_and(|v| v < 90.0),
            interventions: |_| {
                vec![
                    Intervention::new("High-flow oxygen 15 L/min via non-rebreather mask")
                        .with_timer(300, "Recheck SpO2 on high-flow oxygen")
                        .with_checks(&["Recheck SpO2", "Reassess work of breathing"]),
                    Intervention::new(
                        "Bag-valve-mask ventilation if saturations do not respond to oxygen",
                    ),
                ]
            },
        },
        ThreatRule {
            id: "respiratory_failure",
            name: "Respiratory Failure",
            letter: Letter::B,
            severity: Severity::Critical,
            condition: |s| {
                s.answer_is("work_of_breathing", "exhaustion")
                    || s.answer_is("breath_sounds", "absent")
                    || s.finding_severity("resp_rate") == Some(Severity::Critical)
            },
            interventions: |_| {
                vec![
                    Intervention::new("Bag-valve-mask ventilation with 100% oxygen").with_checks(&[
                        "Chest rise with each breath",
                        "SpO2 trend",
                        "Heart rate response",
                    ]),
                    Intervention::new("Prepare for intubation — call senior airway support"),
                    Intervention::new("Continuous SpO2 and ECG monitoring"),
                ]
            },
        },
        ThreatRule {
            id: "silent_chest",
            name: "Unilateral Silent Chest",
            letter: Letter::B,
            severity: Severity::Critical,
            condition: |s| s.answer_is("breath_sounds", "silent_unilateral"),
            interventions: |_| {
                vec![
                    Intervention::new(
                        "Assess for tension pneumothorax: tracheal deviation, distended neck \
                         veins, worsening shock",
                    ),
                    Intervention::new(
                        "Needle decompression, second intercostal space mid-clavicular line, \
                         if tension signs are present",
                    ),
                    Intervention::new("Urgent senior review and chest imaging once stabilized"),
                ]
            },
        },
        ThreatRule {
            id: "moderate_hypoxemia",
            name: "Hypoxemia",
            letter: Letter::B,
            severity: Severity::Urgent,
            condition: |s| s.vitals.spo2.is_some_and(|v| (90.0..94.0).contains(&v)),
            interventions: |_| {
                vec![
                    Intervention::new("Titrate supplemental oxygen to SpO2 ≥ 94%")
                        .with_timer(600, "Recheck SpO2 on supplemental oxygen"),
                ]
            },
        },
        ThreatRule {
            id: "bronchospasm",
            name: "Bronchospasm",
            letter: Letter::B,
            severity: Severity::Urgent,
            condition: |s| s.answer_is("breath_sounds", "wheeze"),
            interventions: |s| {
                vec![
                    dosed(
                        s,
                        "Give nebulised salbutamol",
                        "Salbutamol (nebulised)",
                        0.15,
                        "mg",
                        "NEB",
                        Some(5.0),
                    )
                    .with_timer(1200, "Reassess air entry and wheeze after the nebuliser")
                    .with_checks(&["Air entry", "Respiratory rate", "SpO2"]),
                    dosed(
                        s,
                        "Give an oral corticosteroid",
                        "Prednisolone",
                        1.0,
                        "mg",
                        "PO",
                        Some(40.0),
                    ),
                ]
            },
        },
        ThreatRule {
            id: "severe_respiratory_distress",
            name: "Severe Respiratory Distress",
            letter: Letter::B,
            severity: Severity::Urgent,
            condition: |s| {
                s.answer_is("work_of_breathing", "severe_retractions")
                    || s.finding_severity("resp_rate") == Some(Severity::Urgent)
            },
            interventions: |_| {
                vec![
                    Intervention::new("Supplemental oxygen; allow an upright position")
                        .with_timer(600, "Reassess work of breathing"),
                    Intervention::new("Keep nil by mouth; minimal handling"),
                ]
            },
        },
        ThreatRule {
            id: "decompensated_shock",
            name: "Decompensated Shock",
            letter: Letter::C,
            severity: Severity::Critical,
            condition: |s| s.perfusion == Some(Perfusion::Decompensated),
            interventions: |s| {
                let ml_per_kg = if s.age_band == AgeBand::Neonate { 10.0 } else { 20.0 };
                vec![
                    Intervention::new("Establish IV/IO access — two points if possible"),
                    fluid_bolus(s, ml_per_kg),
                    Intervention::new(
                        "Reassess perfusion after each bolus before ordering the next",
                    ),
                    Intervention::new(
                        "Early senior involvement — anticipate vasoactive support",
                    ),
                ]
            },
        },
        ThreatRule {
            id: "compensated_shock",
            name: "Compensated Shock",
            letter: Letter::C,
            severity: Severity::Urgent,
            condition: |s| s.perfusion == Some(Perfusion::Compensated),
            interventions: |s| {
                vec![
                    Intervention::new("Establish IV access"),
                    fluid_bolus(s, 10.0),
                    Intervention::new(
                        "Frequent reassessment of heart rate and capillary refill",
                    ),
                ]
            },
        },
        ThreatRule {
            id: "bradycardia_poor_perfusion",
            name: "Bradycardia with Poor Perfusion",
            letter: Letter::C,
            severity: Severity::Critical,
            condition: |s| {
                s.age_band != AgeBand::Adult
                    && s.vitals.heart_rate.is_some_and(|h| h < 60.0)
                    && in_shock(s)
            },
            interventions: |s| {
                vec![
                    Intervention::new("Ensure effective oxygenation and ventilation first"),
                    Intervention::new(
                        "Start chest compressions if heart rate stays below 60/min with poor \
                         perfusion despite ventilation",
                    ),
                    dosed(
                        s,
                        "Give adrenaline",
                        "Adrenaline",
                        0.01,
                        "mg",
                        "IV/IO",
                        Some(1.0),
                    )
                    .with_timer(180, "Repeat adrenaline every 3-5 min while bradycardic"),
                    Intervention::new(
                        "Search for reversible causes: hypoxia, acidosis, hyperkalemia, drugs",
                    ),
                ]
            },
        },
        ThreatRule {
            id: "severe_hypoglycemia",
            name: "Severe Hypoglycemia",
            letter: Letter::D,
            severity: Severity::Critical,
            condition: |s| s.vitals.glucose_mmol.is_some_and(|g| g < 2.2),
            interventions: |s| {
                vec![
                    dosed(
                        s,
                        "Give IV dextrose",
                        "Dextrose 10%",
                        2.0,
                        "mL",
                        "IV",
                        Some(250.0),
                    )
                    .with_timer(900, "Recheck blood glucose 15 min after dextrose")
                    .with_checks(&["Repeat blood glucose", "Reassess conscious level"]),
                    Intervention::new(
                        "Start maintenance dextrose once corrected; look for the cause",
                    ),
                ]
            },
        },
        ThreatRule {
            id: "hypoglycemia",
            name: "Hypoglycemia",
            letter: Letter::D,
            severity: Severity::Urgent,
            condition: |s| {
                s.vitals.glucose_mmol.is_some_and(|g| (2.2..3.3).contains(&g))
            },
            interventions: |_| {
                vec![
                    Intervention::new(
                        "Oral glucose if conscious and protecting the airway",
                    )
                    .with_timer(900, "Recheck blood glucose in 15 minutes"),
                ]
            },
        },
        ThreatRule {
            id: "active_seizure",
            name: "Active Seizure",
            letter: Letter::D,
            severity: Severity::Critical,
            condition: |s| s.answer_is("seizure_activity", "active_seizure"),
            interventions: |s| {
                vec![
                    Intervention::new("Protect from injury; do not restrain; note the time"),
                    Intervention::new("High-flow oxygen; suction ready"),
                    dosed(
                        s,
                        "Give a benzodiazepine",
                        "Midazolam",
                        0.15,
                        "mg",
                        "IV/IM",
                        Some(10.0),
                    )
                    .with_timer(600, "If still seizing after 10 min, give the second dose"),
                    Intervention::new("Check blood glucose now"),
                ]
            },
        },
        ThreatRule {
            id: "raised_icp",
            name: "Signs of Raised Intracranial Pressure",
            letter: Letter::D,
            severity: Severity::Critical,
            condition: |s| {
                s.answer_is("pupils", "unequal") || s.answer_is("pupils", "fixed_dilated")
            },
            interventions: |s| {
                vec![
                    Intervention::new("Head midline; elevate the head of the bed 30°"),
                    Intervention::new(
                        "Maintain oxygenation and normocapnia; avoid hypotension",
                    ),
                    dosed(
                        s,
                        "Give hypertonic saline",
                        "Hypertonic saline 3%",
                        3.0,
                        "mL",
                        "IV over 10-15 min",
                        Some(250.0),
                    ),
                    Intervention::new("Urgent neurosurgical / intensive care consult"),
                ]
            },
        },
        ThreatRule {
            id: "dka_risk",
            name: "Marked Hyperglycemia — DKA Risk",
            letter: Letter::D,
            severity: Severity::Urgent,
            condition: |s| s.vitals.glucose_mmol.is_some_and(|g| g >= 14.0),
            interventions: |s| {
                let fluid = s.fluids.default_fluid.label();
                let dose = Dose {
                    drug: fluid.to_string(),
                    dose_per_kg: 10.0,
                    unit: "mL".to_string(),
                    route: "IV".to_string(),
                    max_dose: Some(500.0),
                };
                let display = format_dose(&dose, s.weight_kg);
                vec![
                    Intervention::new(
                        "Confirm with blood ketones and a venous gas before treating as DKA",
                    ),
                    Intervention::new(format!(
                        "Cautious fluid bolus 10 mL/kg {fluid} over 60 minutes"
                    ))
                    .with_dose(dose, display)
                    .with_timer(3600, "Reassess hydration and repeat the gas"),
                    dosed(
                        s,
                        "Start an insulin infusion after the first hour of fluids",
                        "Soluble insulin",
                        0.05,
                        "units/h",
                        "IV infusion",
                        None,
                    ),
                    Intervention::new(
                        "Add potassium to maintenance fluids once serum potassium is known",
                    ),
                    Intervention::new(
                        "Hourly glucose and neurological observations (cerebral edema risk)",
                    ),
                ]
            },
        },
        ThreatRule {
            id: "petechial_fever",
            name: "Petechial Rash with Fever",
            letter: Letter::E,
            severity: Severity::Critical,
            condition: |s| s.answer_is("rash", "petechiae") && (fever(s) || in_shock(s)),
            interventions: |s| {
                let mut list = vec![
                    Intervention::new("Take blood cultures — do not delay antibiotics for them"),
                    dosed(
                        s,
                        "Give a broad-spectrum antibiotic",
                        "Ceftriaxone",
                        80.0,
                        "mg",
                        "IV",
                        Some(4000.0),
                    ),
                ];
                if in_shock(s) {
                    list.push(fluid_bolus(s, 20.0));
                }
                list.push(Intervention::new(
                    "Urgent senior review; notify public health if meningococcal disease is \
                     confirmed",
                ));
                list
            },
        },
        ThreatRule {
            id: "anaphylaxis",
            name: "Anaphylaxis Pattern",
            letter: Letter::E,
            severity: Severity::Critical,
            condition: |s| {
                s.answer_is("rash", "urticaria")
                    && (s.answer_is("breath_sounds", "wheeze")
                        || s.answer_is("airway_sounds", "stridor"))
            },
            interventions: |s| {
                let mut list = vec![
                    dosed(
                        s,
                        "Give IM adrenaline into the anterolateral thigh",
                        "Adrenaline (1 mg/mL)",
                        0.01,
                        "mg",
                        "IM",
                        Some(0.5),
                    )
                    .with_timer(300, "Repeat IM adrenaline after 5 min if no improvement")
                    .with_checks(&["Airway swelling", "Work of breathing", "Blood pressure"]),
                    Intervention::new("Remove the trigger if still present"),
                    Intervention::new("High-flow oxygen; lie flat with legs raised"),
                ];
                if s.perfusion == Some(Perfusion::Decompensated) {
                    list.push(fluid_bolus(s, 20.0));
                }
                list
            },
        },
        ThreatRule {
            id: "high_fever",
            name: "High Fever",
            letter: Letter::E,
            severity: Severity::Urgent,
            condition: |s| {
                s.vitals.temperature_c.is_some_and(|t| {
                    t >= 39.0 || (t >= 38.0 && s.age_band == AgeBand::Neonate)
                })
            },
            interventions: |s| {
                let mut list = vec![
                    dosed(
                        s,
                        "Give an antipyretic",
                        "Paracetamol",
                        15.0,
                        "mg",
                        "PO/IV",
                        Some(1000.0),
                    ),
                    Intervention::new(
                        "Expose; keep the environment tepid — do not cool to shivering",
                    ),
                ];
                if s.age_band == AgeBand::Neonate {
                    list.push(Intervention::new(
                        "Full septic screen including lumbar puncture",
                    ));
                }
                list
            },
        },
        ThreatRule {
            id: "hypothermia",
            name: "Hypothermia",
            letter: Letter::E,
            severity: Severity::Urgent,
            condition: |s| s.vitals.temperature_c.is_some_and(|t| t < 35.0),
            interventions: |_| {
                vec![
                    Intervention::new("Remove wet clothing; dry and insulate"),
                    Intervention::new("Active external rewarming (forced warm air)")
                        .with_timer(900, "Recheck core temperature"),
                    Intervention::new("Use warmed IV fluids"),
                ]
            },
        },
        // Materialized by the cardiac-arrest interrupt, never by survey
        // answers.
        ThreatRule {
            id: "cardiac_arrest",
            name: "Cardiac Arrest",
            letter: Letter::C,
            severity: Severity::Critical,
            condition: |_| false,
            interventions: |s| {
                vec![
                    Intervention::new("Start CPR — 15:2 compressions to ventilations")
                        .with_timer(120, "Rhythm check at the end of this 2-minute cycle")
                        .with_checks(&[
                            "Rhythm check",
                            "Rotate the compressor",
                            "Check for signs of ROSC",
                        ]),
                    Intervention::new("Attach a defibrillator or AED as soon as available"),
                    dosed(
                        s,
                        "Give adrenaline",
                        "Adrenaline",
                        0.01,
                        "mg",
                        "IV/IO",
                        Some(1.0),
                    )
                    .with_timer(180, "Repeat adrenaline every 3-5 minutes"),
                    Intervention::new("Work through reversible causes: 4 Hs and 4 Ts"),
                ]
            },
        },
    ]
});
