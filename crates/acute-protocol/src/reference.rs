//! Age-banded vital-sign reference ranges and the interpretation
//! functions that map a raw numeric answer to a severity and label.
//!
//! Ranges follow pediatric resuscitation course values; the adult column
//! is standard adult physiology.

use acute_core::models::{AgeBand, Severity};

use crate::questions::{Interpretation, VitalKind};

/// Normal-range table for one age band.
#[derive(Debug, Clone, Copy)]
pub struct VitalReference {
    /// Breaths per minute (low, high).
    pub resp_rate: (f64, f64),
    /// Beats per minute (low, high).
    pub heart_rate: (f64, f64),
    /// Systolic blood pressure below which the patient is hypotensive.
    pub systolic_floor: f64,
}

const NEONATE: VitalReference = VitalReference {
    resp_rate: (30.0, 60.0),
    heart_rate: (100.0, 180.0),
    systolic_floor: 60.0,
};

const INFANT: VitalReference = VitalReference {
    resp_rate: (25.0, 50.0),
    heart_rate: (100.0, 180.0),
    systolic_floor: 70.0,
};

const CHILD: VitalReference = VitalReference {
    resp_rate: (20.0, 30.0),
    heart_rate: (70.0, 140.0),
    systolic_floor: 75.0,
};

const ADOLESCENT: VitalReference = VitalReference {
    resp_rate: (12.0, 20.0),
    heart_rate: (60.0, 120.0),
    systolic_floor: 90.0,
};

const ADULT: VitalReference = VitalReference {
    resp_rate: (12.0, 20.0),
    heart_rate: (60.0, 100.0),
    systolic_floor: 90.0,
};

pub fn reference_for(band: AgeBand) -> &'static VitalReference {
    match band {
        AgeBand::Neonate => &NEONATE,
        AgeBand::Infant => &INFANT,
        AgeBand::Child => &CHILD,
        AgeBand::Adolescent => &ADOLESCENT,
        AgeBand::Adult => &ADULT,
    }
}

/// Airway positioning guidance by age band. Large occiputs flex the neck,
/// so neonates and infants are positioned neutral rather than extended.
pub fn airway_position(band: AgeBand) -> &'static str {
    match band {
        AgeBand::Neonate | AgeBand::Infant => {
            "Neutral ('sniffing') position — shoulder roll, avoid neck hyperextension"
        }
        _ => "Head-tilt chin-lift (jaw thrust if cervical spine injury suspected)",
    }
}

/// Interpret a numeric answer for the given vital against the patient's
/// age band.
pub fn classify(vital: VitalKind, value: f64, band: AgeBand) -> Interpretation {
    match vital {
        VitalKind::RespRate => classify_resp_rate(value, band),
        VitalKind::Spo2 => classify_spo2(value),
        VitalKind::HeartRate => classify_heart_rate(value, band),
        VitalKind::CapillaryRefill => classify_cap_refill(value),
        VitalKind::SystolicBp => classify_systolic_bp(value, band),
        VitalKind::Temperature => classify_temperature(value, band),
        VitalKind::Glucose => classify_glucose(value),
    }
}

fn interpretation(severity: Severity, label: impl Into<String>) -> Interpretation {
    Interpretation { severity, label: label.into() }
}

fn classify_resp_rate(value: f64, band: AgeBand) -> Interpretation {
    let (low, high) = reference_for(band).resp_rate;
    if value <= low * 0.5 {
        interpretation(Severity::Critical, "Severe bradypnea / agonal breathing")
    } else if value < low {
        interpretation(Severity::Urgent, "Bradypnea")
    } else if value >= high * 2.0 {
        interpretation(Severity::Critical, "Severe tachypnea")
    } else if value > high {
        interpretation(Severity::Urgent, "Tachypnea")
    } else {
        interpretation(Severity::Normal, "Respiratory rate normal for age")
    }
}

fn classify_spo2(value: f64) -> Interpretation {
    if value < 90.0 {
        interpretation(Severity::Critical, "Severe hypoxemia")
    } else if value < 94.0 {
        interpretation(Severity::Urgent, "Mild hypoxemia")
    } else {
        interpretation(Severity::Normal, "Oxygen saturation adequate")
    }
}

fn classify_heart_rate(value: f64, band: AgeBand) -> Interpretation {
    let (low, high) = reference_for(band).heart_rate;
    if value <= low * 0.5 {
        interpretation(Severity::Critical, "Severe bradycardia")
    } else if value < low {
        interpretation(Severity::Urgent, "Bradycardia")
    } else if value >= high * 1.5 {
        interpretation(Severity::Critical, "Extreme tachycardia")
    } else if value > high {
        interpretation(Severity::Urgent, "Tachycardia")
    } else {
        interpretation(Severity::Normal, "Heart rate normal for age")
    }
}

fn classify_cap_refill(value: f64) -> Interpretation {
    if value >= 5.0 {
        interpretation(Severity::Critical, "Markedly delayed capillary refill")
    } else if value >= 3.0 {
        interpretation(Severity::Urgent, "Delayed capillary refill")
    } else if value >= 2.0 {
        interpretation(Severity::Monitor, "Borderline capillary refill")
    } else {
        interpretation(Severity::Normal, "Brisk capillary refill")
    }
}

fn classify_systolic_bp(value: f64, band: AgeBand) -> Interpretation {
    let floor = reference_for(band).systolic_floor;
    if value < floor {
        interpretation(Severity::Critical, "Hypotension for age")
    } else if value < floor + 10.0 {
        interpretation(Severity::Urgent, "Low-normal blood pressure")
    } else {
        interpretation(Severity::Normal, "Blood pressure adequate for age")
    }
}

fn classify_temperature(value: f64, band: AgeBand) -> Interpretation {
    if value < 35.0 {
        interpretation(Severity::Urgent, "Hypothermia")
    } else if value < 36.0 {
        interpretation(Severity::Monitor, "Low temperature")
    } else if value < 38.0 {
        interpretation(Severity::Normal, "Temperature normal")
    } else if band == AgeBand::Neonate {
        // Any fever in the first month is an emergency presentation.
        interpretation(Severity::Critical, "Fever in neonate")
    } else if value >= 39.0 {
        interpretation(Severity::Urgent, "High fever")
    } else {
        interpretation(Severity::Monitor, "Fever")
    }
}

fn classify_glucose(value: f64) -> Interpretation {
    if value < 2.2 {
        interpretation(Severity::Critical, "Severe hypoglycemia")
    } else if value < 3.3 {
        interpretation(Severity::Urgent, "Hypoglycemia")
    } else if value >= 14.0 {
        interpretation(Severity::Urgent, "Marked hyperglycemia")
    } else if value > 11.0 {
        interpretation(Severity::Monitor, "Hyperglycemia")
    } else {
        interpretation(Severity::Normal, "Blood glucose normal")
    }
}
