use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One letter of the XABCDE primary survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Letter {
    X,
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    /// Survey order: X is only assessed for trauma presentations.
    pub fn sequence(trauma: bool) -> &'static [Letter] {
        if trauma {
            &[Letter::X, Letter::A, Letter::B, Letter::C, Letter::D, Letter::E]
        } else {
            &[Letter::A, Letter::B, Letter::C, Letter::D, Letter::E]
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Letter::X => "eXsanguination",
            Letter::A => "Airway",
            Letter::B => "Breathing",
            Letter::C => "Circulation",
            Letter::D => "Disability",
            Letter::E => "Exposure",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Letter::X => "X",
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
        }
    }
}

impl FromStr for Letter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Letter::X),
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            "E" => Ok(Letter::E),
            other => Err(CoreError::InvalidLetter(other.to_string())),
        }
    }
}
