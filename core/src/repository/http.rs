use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;
use crate::model::record::{parse_rows, Record};
use crate::model::week::WeekKey;
use crate::repository::traits::RecordStore;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Store behind a small script endpoint that proxies a spreadsheet.
///
/// `GET <url>` answers with the rows, either as a bare JSON array or as
/// `{"records": [...]}`. `POST <url>` with a `replace_week` action
/// overwrites one week.
pub struct HttpRecordStore {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct ReplaceWeekRequest<'a> {
    action: &'static str,
    week: String,
    records: &'a [Record],
}

impl HttpRecordStore {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Pulls the row array out of a fetch response body.
fn rows_from_body(body: Value) -> Result<Vec<Value>, StoreError> {
    check_status(&body)?;
    match body {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut map) => match map.remove("records") {
            Some(Value::Array(rows)) => Ok(rows),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(other) => Err(StoreError::Rejected(format!(
                "expected a list of records, got {}",
                other
            ))),
        },
        Value::Null => Ok(Vec::new()),
        other => Err(StoreError::Rejected(format!("unexpected response: {}", other))),
    }
}

/// A JSON reply carrying `"status": "error"` is a refusal even on HTTP 200.
fn check_status(body: &Value) -> Result<(), StoreError> {
    if body.get("status").and_then(Value::as_str) == Some("error") {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no message");
        return Err(StoreError::Rejected(message.to_string()));
    }
    Ok(())
}

/// A save only counts when the endpoint answers with JSON. Script hosts
/// serve HTML error and login pages with status 200.
fn check_save_reply(text: &str) -> Result<(), StoreError> {
    let body: Value = serde_json::from_str(text).map_err(|_| {
        let snippet: String = text.trim().chars().take(80).collect();
        StoreError::Rejected(format!("save reply is not JSON: {}", snippet))
    })?;
    check_status(&body)
}

impl RecordStore for HttpRecordStore {
    fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        let text = response.text()?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows = rows_from_body(serde_json::from_str(&text)?)?;
        tracing::debug!(url = %self.url, rows = rows.len(), "fetched remote records");
        Ok(parse_rows(&rows))
    }

    fn replace_week(&self, week: &WeekKey, records: &[Record]) -> Result<(), StoreError> {
        let request = ReplaceWeekRequest {
            action: "replace_week",
            week: week.to_string(),
            records,
        };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()?
            .error_for_status()?;
        let text = response.text()?;
        check_save_reply(&text)?;
        tracing::debug!(url = %self.url, week = %week, rows = records.len(), "replaced remote week");
        Ok(())
    }
}
