use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age bucket used to select vital-sign reference ranges, airway
/// positioning guidance, and the default resuscitation fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBand {
    /// First 28 days of life.
    Neonate,
    /// Under one year.
    Infant,
    /// One to twelve years.
    Child,
    /// Thirteen to seventeen years.
    Adolescent,
    Adult,
}

impl AgeBand {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Neonate => "neonate",
            AgeBand::Infant => "infant",
            AgeBand::Child => "child",
            AgeBand::Adolescent => "adolescent",
            AgeBand::Adult => "adult",
        }
    }

    /// Classify a free-text age entry ("5 years", "3 weeks", "newborn")
    /// into an age band. Unparseable input falls back to `Child`.
    pub fn parse(input: &str) -> AgeBand {
        let text = input.trim().to_lowercase();
        if text.is_empty() {
            return AgeBand::Child;
        }

        if text.contains("newborn") || text.contains("neonat") {
            return AgeBand::Neonate;
        }
        if text.contains("adult") {
            return AgeBand::Adult;
        }
        if text.contains("adolescen") || text.contains("teen") {
            return AgeBand::Adolescent;
        }
        if text.contains("infant") || text.contains("baby") {
            return AgeBand::Infant;
        }

        let number: Option<f64> = text
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .find(|part| !part.is_empty())
            .and_then(|part| part.parse().ok());

        let Some(n) = number else {
            return AgeBand::Child;
        };

        if text.contains("day") {
            return if n <= 28.0 { AgeBand::Neonate } else { AgeBand::Infant };
        }
        if text.contains("week") {
            return if n <= 4.0 { AgeBand::Neonate } else { AgeBand::Infant };
        }
        if text.contains("month") {
            return if n < 12.0 { AgeBand::Infant } else { AgeBand::Child };
        }

        // Bare numbers are read as years.
        match n {
            years if years < 1.0 => AgeBand::Infant,
            years if years < 13.0 => AgeBand::Child,
            years if years < 18.0 => AgeBand::Adolescent,
            _ => AgeBand::Adult,
        }
    }
}
