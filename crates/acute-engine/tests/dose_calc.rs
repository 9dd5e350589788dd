use acute_core::models::Dose;
use acute_engine::dose::format_dose;

fn adrenaline() -> Dose {
    Dose {
        drug: "Adrenaline".to_string(),
        dose_per_kg: 0.01,
        unit: "mg".to_string(),
        route: "IV".to_string(),
        max_dose: Some(1.0),
    }
}

#[test]
fn missing_weight_renders_the_per_kilogram_rate() {
    let rendered = format_dose(&adrenaline(), None);
    assert_eq!(rendered, "Adrenaline 0.01 mg/kg IV");
}

#[test]
fn non_positive_weight_renders_the_per_kilogram_rate() {
    assert!(format_dose(&adrenaline(), Some(0.0)).contains("/kg"));
    assert!(format_dose(&adrenaline(), Some(-4.0)).contains("/kg"));
}

#[test]
fn oversized_patient_hits_the_dose_ceiling() {
    let rendered = format_dose(&adrenaline(), Some(200.0));
    assert!(rendered.contains('1'));
    assert!(rendered.contains("MAX DOSE"));
    assert_eq!(rendered, "Adrenaline 1.0 mg IV (MAX DOSE)");
}

#[test]
fn meeting_the_cap_exactly_is_still_marked() {
    let rendered = format_dose(&adrenaline(), Some(100.0));
    assert!(rendered.contains("MAX DOSE"));
}

#[test]
fn rounding_policy_varies_with_magnitude() {
    let salbutamol = Dose {
        drug: "Salbutamol".to_string(),
        dose_per_kg: 0.15,
        unit: "mg".to_string(),
        route: "NEB".to_string(),
        max_dose: None,
    };
    // Under 1: two decimals.
    assert_eq!(format_dose(&salbutamol, Some(5.0)), "Salbutamol 0.75 mg NEB");
    // Under 10: one decimal.
    assert_eq!(format_dose(&salbutamol, Some(40.0)), "Salbutamol 6.0 mg NEB");

    let paracetamol = Dose {
        drug: "Paracetamol".to_string(),
        dose_per_kg: 15.0,
        unit: "mg".to_string(),
        route: "PO".to_string(),
        max_dose: None,
    };
    // 10 and above: whole numbers.
    assert_eq!(format_dose(&paracetamol, Some(18.0)), "Paracetamol 270 mg PO");
}

#[test]
fn unclamped_amounts_grow_with_weight() {
    let dose = Dose {
        drug: "Ceftriaxone".to_string(),
        dose_per_kg: 80.0,
        unit: "mg".to_string(),
        route: "IV".to_string(),
        max_dose: None,
    };
    assert_eq!(format_dose(&dose, Some(10.0)), "Ceftriaxone 800 mg IV");
    assert_eq!(format_dose(&dose, Some(20.0)), "Ceftriaxone 1600 mg IV");
}
