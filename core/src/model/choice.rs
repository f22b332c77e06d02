use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RecordError;

/// What a person is doing on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Choice {
    #[default]
    Unknown,
    Driver,
    Passenger,
    NotGoing,
}

impl Choice {
    /// Display order, also the order the editor cycles through.
    pub const ALL: [Choice; 4] = [
        Choice::Unknown,
        Choice::Driver,
        Choice::Passenger,
        Choice::NotGoing,
    ];

    /// The token written to the `Wybor` column.
    pub fn token(self) -> &'static str {
        match self {
            Choice::Unknown => "?",
            Choice::Driver => "kierowca",
            Choice::Passenger => "pasażer",
            Choice::NotGoing => "nie jadę",
        }
    }

    pub fn points(self) -> i64 {
        match self {
            Choice::Driver => 2,
            Choice::Passenger => 1,
            Choice::NotGoing | Choice::Unknown => 0,
        }
    }

    pub fn next(self) -> Choice {
        match self {
            Choice::Unknown => Choice::Driver,
            Choice::Driver => Choice::Passenger,
            Choice::Passenger => Choice::NotGoing,
            Choice::NotGoing => Choice::Unknown,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Choice {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Choice::Unknown);
        }
        match trimmed.to_lowercase().as_str() {
            "?" | "u" | "unknown" => Ok(Choice::Unknown),
            "kierowca" | "d" | "driver" => Ok(Choice::Driver),
            "pasażer" | "p" | "passenger" => Ok(Choice::Passenger),
            "nie jadę" | "n" | "no" | "not going" => Ok(Choice::NotGoing),
            _ => Err(RecordError::UnknownChoice(trimmed.to_string())),
        }
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
