use acute_core::models::{InterventionStatus, Letter, Session, Severity};

/// Render the whole session as a fixed-layout text record.
pub fn render_clinical_record(session: &Session) -> String {
    let mut out = String::new();

    out.push_str("ACUTE CLINICAL RECORD\n");
    out.push_str("=====================\n\n");
    push_patient(&mut out, session);
    push_vitals(&mut out, session);
    push_fluids(&mut out, session);
    push_findings(&mut out, session);
    push_threats(&mut out, session);
    push_alerts(&mut out, session);
    push_sample(&mut out, session);
    push_events(&mut out, session);

    tracing::debug!(bytes = out.len(), "rendered clinical record");
    out
}

fn push_patient(out: &mut String, session: &Session) {
    out.push_str("PATIENT\n");
    match session.weight_kg {
        Some(weight) => out.push_str(&format!("  Weight: {weight} kg\n")),
        None => out.push_str("  Weight: not recorded\n"),
    }
    match &session.age_input {
        Some(age) => out.push_str(&format!(
            "  Age: {age} ({})\n",
            session.age_band.label()
        )),
        None => out.push_str(&format!("  Age: not recorded ({})\n", session.age_band.label())),
    }
    out.push_str(&format!(
        "  Presentation: {}\n",
        if session.trauma { "trauma" } else { "medical" }
    ));
    out.push_str(&format!("  Phase: {}\n", session.phase.label()));
    if let Some(diagnosis) = &session.definitive_diagnosis {
        out.push_str(&format!("  Definitive diagnosis: {diagnosis}\n"));
    }
    out.push('\n');
}

fn push_vitals(out: &mut String, session: &Session) {
    out.push_str("VITAL SIGNS\n");
    let vitals = &session.vitals;
    let rows = [
        ("Respiratory rate", vitals.resp_rate, "breaths/min"),
        ("SpO2", vitals.spo2, "%"),
        ("Heart rate", vitals.heart_rate, "beats/min"),
        ("Capillary refill", vitals.cap_refill_secs, "s"),
        ("Systolic BP", vitals.systolic_bp, "mmHg"),
        ("Temperature", vitals.temperature_c, "°C"),
        ("Glucose", vitals.glucose_mmol, "mmol/L"),
    ];
    let mut any = false;
    for (label, value, unit) in rows {
        if let Some(v) = value {
            out.push_str(&format!("  {label}: {v} {unit}\n"));
            any = true;
        }
    }
    if !any {
        out.push_str("  (none recorded)\n");
    }
    if let Some(perfusion) = session.perfusion {
        out.push_str(&format!("  Perfusion: {}\n", perfusion.label()));
    }
    out.push('\n');
}

fn push_fluids(out: &mut String, session: &Session) {
    let fluids = &session.fluids;
    out.push_str("FLUID RESUSCITATION\n");
    out.push_str(&format!("  Boluses given: {}\n", fluids.bolus_count));
    out.push_str(&format!(
        "  Total volume: {:.0} mL ({:.1} mL/kg)\n",
        fluids.total_volume_ml, fluids.total_volume_per_kg
    ));
    out.push_str(&format!("  Default fluid: {}\n", fluids.default_fluid.label()));
    if fluids.fluid_refractory {
        out.push_str("  *** FLUID-REFRACTORY SHOCK ***\n");
    }
    out.push('\n');
}

fn push_findings(out: &mut String, session: &Session) {
    out.push_str("FINDINGS\n");
    if session.findings.is_empty() {
        out.push_str("  (none recorded)\n\n");
        return;
    }
    for letter in Letter::sequence(session.trauma) {
        for finding in session.findings.iter().filter(|f| f.letter == *letter) {
            let mut line = format!(
                "  [{}] {} = {}",
                letter.code(),
                finding.question_id,
                finding.value
            );
            if let Some(unit) = &finding.unit {
                line.push_str(&format!(" {unit}"));
            }
            line.push_str(&format!(" — {}", finding.description));
            if finding.severity != Severity::Normal {
                line.push_str(&format!(" ({})", finding.severity.label().to_uppercase()));
            }
            line.push('\n');
            out.push_str(&line);
        }
    }
    out.push('\n');
}

fn checkmark(status: InterventionStatus) -> &'static str {
    match status {
        InterventionStatus::Pending => "[ ]",
        InterventionStatus::InProgress => "[~]",
        InterventionStatus::Completed => "[x]",
        InterventionStatus::Skipped => "[-]",
    }
}

fn push_threats(out: &mut String, session: &Session) {
    out.push_str("THREATS\n");
    if session.threats.is_empty() {
        out.push_str("  (none detected)\n\n");
        return;
    }
    for threat in &session.threats {
        out.push_str(&format!(
            "  {} ({}, {}){} — detected {}\n",
            threat.name,
            threat.severity.label(),
            threat.letter.code(),
            if threat.resolved { " [resolved]" } else { "" },
            threat.detected_at.strftime("%H:%M:%S"),
        ));
        for intervention in &threat.interventions {
            out.push_str(&format!(
                "    {} {}\n",
                checkmark(intervention.status),
                intervention.action
            ));
            if let Some(display) = &intervention.dose_display {
                out.push_str(&format!("        dose: {display}\n"));
            }
            if let Some(secs) = intervention.timer_secs {
                let prompt = intervention.reassess_prompt.as_deref().unwrap_or("reassess");
                out.push_str(&format!("        timer: {secs} s — {prompt}\n"));
            }
        }
    }
    out.push('\n');
}

fn push_alerts(out: &mut String, session: &Session) {
    out.push_str("SAFETY ALERTS\n");
    if session.safety_alerts.is_empty() {
        out.push_str("  (none)\n\n");
        return;
    }
    for alert in &session.safety_alerts {
        out.push_str(&format!(
            "  [!] {} — {} ({})\n",
            alert.rule_id,
            alert.message,
            if alert.acknowledged { "acknowledged" } else { "UNACKNOWLEDGED" },
        ));
    }
    out.push('\n');
}

fn push_sample(out: &mut String, session: &Session) {
    out.push_str("SAMPLE HISTORY\n");
    if session.sample.is_empty() {
        out.push_str("  (not taken)\n\n");
        return;
    }
    let sample = &session.sample;
    let entries = [
        ("Signs/Symptoms", &sample.signs),
        ("Allergies", &sample.allergies),
        ("Medications", &sample.medications),
        ("Past history", &sample.past_history),
        ("Last meal", &sample.last_meal),
        ("Events leading up", &sample.events),
    ];
    for (label, value) in entries {
        if let Some(text) = value {
            out.push_str(&format!("  {label}: {text}\n"));
        }
    }
    out.push('\n');
}

fn push_events(out: &mut String, session: &Session) {
    out.push_str("EVENT LOG\n");
    if session.events.is_empty() {
        out.push_str("  (empty)\n");
        return;
    }
    for event in &session.events {
        out.push_str(&format!(
            "  {}  {}\n",
            event.at.strftime("%H:%M:%S"),
            event.summary
        ));
    }
}
