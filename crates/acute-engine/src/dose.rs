//! Weight-scaled dose rendering.

use acute_core::models::Dose;

/// Render a dose descriptor against the known patient weight.
///
/// Without a usable weight the per-kilogram rate is shown instead of an
/// absolute amount. Amounts are clamped to `max_dose`; a dose that meets
/// or exceeds the cap is marked `(MAX DOSE)`.
pub fn format_dose(dose: &Dose, weight_kg: Option<f64>) -> String {
    let Some(weight) = weight_kg.filter(|w| *w > 0.0) else {
        return format!(
            "{} {} {}/kg {}",
            dose.drug,
            format_amount(dose.dose_per_kg),
            dose.unit,
            dose.route
        );
    };

    let raw = dose.dose_per_kg * weight;
    let (amount, capped) = match dose.max_dose {
        Some(max) if raw >= max => (max, true),
        _ => (raw, false),
    };

    let mut rendered = format!(
        "{} {} {} {}",
        dose.drug,
        format_amount(amount),
        dose.unit,
        dose.route
    );
    if capped {
        rendered.push_str(" (MAX DOSE)");
    }
    rendered
}

/// Rounding policy: two decimals under 1, one decimal under 10, whole
/// numbers above.
fn format_amount(amount: f64) -> String {
    if amount < 1.0 {
        format!("{amount:.2}")
    } else if amount < 10.0 {
        format!("{amount:.1}")
    } else {
        format!("{}", amount.round() as i64)
    }
}
