//! Enumerations and field types for tasks.
//!
//! This module defines the structured values a task carries besides its free-form
//! description: the priority level and the meridiem used when entering reminder times.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

/// Priority classification for task urgency.
///
/// Serialised exactly as shown to the user (`"Low"`, `"Medium"`, `"High"`).
#[derive(Debug, Clone, Copy, Default, Serialize, ValueEnum, PartialEq, Eq)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Parse user input the way the priority prompt does: trimmed, first letter
    /// upper-cased and the rest lower-cased, then matched against the three names.
    ///
    /// Returns `None` when the normalised text is not a known priority.
    pub fn from_input(input: &str) -> Option<Self> {
        let normalised = capitalise(input.trim());
        Self::ALL.into_iter().find(|p| p.as_str() == normalised)
    }

    /// Like [`Priority::from_input`] but falls back to `Low` for empty or unknown input.
    pub fn from_input_or_default(input: &str) -> Self {
        Self::from_input(input).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Single-letter tag shown in task rows.
    pub fn initial(self) -> char {
        match self {
            Priority::Low => 'L',
            Priority::Medium => 'M',
            Priority::High => 'H',
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown strings in a hand-edited file degrade to Low rather than failing the whole load.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Priority::from_input(&raw).unwrap_or_else(|| {
            log::warn!("unknown priority {raw:?} in task file, using Low");
            Priority::Low
        }))
    }
}

/// Half of the day for 12-hour clock input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Accepts `AM`/`PM` in any case with surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
