use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SampleField {
    Signs,
    Allergies,
    Medications,
    PastHistory,
    LastMeal,
    Events,
}

impl SampleField {
    pub fn label(&self) -> &'static str {
        match self {
            SampleField::Signs => "Signs/Symptoms",
            SampleField::Allergies => "Allergies",
            SampleField::Medications => "Medications",
            SampleField::PastHistory => "Past history",
            SampleField::LastMeal => "Last meal",
            SampleField::Events => "Events leading up",
        }
    }
}

/// Partial SAMPLE history, filled in as the clinician gathers it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SampleHistory {
    pub signs: Option<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub past_history: Option<String>,
    pub last_meal: Option<String>,
    pub events: Option<String>,
}

impl SampleHistory {
    pub fn set(&mut self, field: SampleField, text: impl Into<String>) {
        let slot = match field {
            SampleField::Signs => &mut self.signs,
            SampleField::Allergies => &mut self.allergies,
            SampleField::Medications => &mut self.medications,
            SampleField::PastHistory => &mut self.past_history,
            SampleField::LastMeal => &mut self.last_meal,
            SampleField::Events => &mut self.events,
        };
        *slot = Some(text.into());
    }

    pub fn get(&self, field: SampleField) -> Option<&str> {
        match field {
            SampleField::Signs => self.signs.as_deref(),
            SampleField::Allergies => self.allergies.as_deref(),
            SampleField::Medications => self.medications.as_deref(),
            SampleField::PastHistory => self.past_history.as_deref(),
            SampleField::LastMeal => self.last_meal.as_deref(),
            SampleField::Events => self.events.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_none()
            && self.allergies.is_none()
            && self.medications.is_none()
            && self.past_history.is_none()
            && self.last_meal.is_none()
            && self.events.is_none()
    }
}
