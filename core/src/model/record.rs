use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;
use crate::model::choice::Choice;

/// One stored fact: who chose what on which day of which week.
///
/// Field names are the column headers every backend shares.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    #[serde(rename = "Data_Week")]
    pub week: String,
    #[serde(rename = "Dzien")]
    pub day: String,
    #[serde(rename = "Osoba")]
    pub person: String,
    #[serde(rename = "Wybor")]
    pub choice: Choice,
}

impl Record {
    pub fn new(
        week: impl Into<String>,
        day: impl Into<String>,
        person: impl Into<String>,
        choice: Choice,
    ) -> Self {
        Self {
            week: week.into(),
            day: day.into(),
            person: person.into(),
            choice,
        }
    }

    /// Parses a raw row as handed back by a store. Values may arrive as
    /// strings or numbers (spreadsheet proxies do both).
    pub fn from_row(row: &Value) -> Result<Self, RecordError> {
        let week = field(row, "Data_Week")?;
        let day = field(row, "Dzien")?;
        let person = field(row, "Osoba")?;
        let choice = match row.get("Wybor") {
            Some(Value::String(s)) => s.parse()?,
            Some(Value::Null) | None => return Err(RecordError::MissingField("Wybor")),
            Some(other) => return Err(RecordError::UnknownChoice(other.to_string())),
        };
        Ok(Record {
            week,
            day,
            person,
            choice,
        })
    }
}

fn field(row: &Value, name: &'static str) -> Result<String, RecordError> {
    let text = match row.get(name) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    if text.is_empty() {
        return Err(RecordError::MissingField(name));
    }
    Ok(text)
}

/// Parses every row, dropping (and logging) the ones that are malformed.
pub fn parse_rows(rows: &[Value]) -> Vec<Record> {
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for (idx, row) in rows.iter().enumerate() {
        match Record::from_row(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                dropped += 1;
                tracing::warn!(row = idx, error = %err, "dropping malformed record");
            }
        }
    }
    if dropped > 0 {
        tracing::debug!(kept = records.len(), dropped, "parsed stored rows");
    }
    records
}
