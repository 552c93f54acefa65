//! Form decoding and validation for the modal creation flows.
//!
//! Submissions arrive urlencoded; fields are parsed into a multi-value map
//! so multi-select inputs bind naturally, then coerced and validated into a
//! typed payload. Failures come back as a field -> messages map that is
//! rendered inline with the re-displayed fragment.

pub mod disputes;
pub mod orders;
pub mod returns;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use validator::ValidationErrors;

pub use disputes::DisputePayload;
pub use orders::OrderPayload;
pub use returns::ReturnPayload;

/// Parsed urlencoded form body. Preserves repeated fields.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
}

impl FormData {
    pub fn parse(body: &str) -> Self {
        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            fields.entry(key.into_owned()).or_default().push(value.into_owned());
        }
        Self { fields }
    }

    /// First submitted value for a field, trimmed. `None` if absent.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(|value| value.trim())
    }

    /// All submitted values for a field (multi-select inputs).
    pub fn all(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First values keyed by field, for re-rendering a failed submission.
    pub fn values_map(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|(key, values)| {
                values
                    .first()
                    .map(|value| (key.clone(), value.trim().to_string()))
            })
            .collect()
    }
}

/// Field-level validation errors, ordered by field name for stable output.
#[derive(Debug, Default, Serialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Vec<String>> {
        self.0.get(name)
    }

    /// Fold `validator` derive output into the map, keeping declared messages.
    pub fn absorb(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Enter a valid value.".to_string());
                self.add(field, message);
            }
        }
    }
}

/// Required string field: missing or empty is a field error.
fn required(data: &FormData, name: &str, errors: &mut FormErrors) -> String {
    match data.first(name) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            errors.add(name, "This field is required.");
            String::new()
        }
    }
}

/// Optional string field: absent and empty both collapse to `None`.
fn optional(data: &FormData, name: &str) -> Option<String> {
    data.first(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Datetime field from a `datetime-local` input. Absent defaults to now.
fn datetime_or_now(data: &FormData, name: &str, errors: &mut FormErrors) -> DateTime<Utc> {
    match data.first(name) {
        Some(raw) if !raw.is_empty() => match parse_datetime(raw) {
            Some(parsed) => parsed,
            None => {
                errors.add(name, "Enter a valid date/time.");
                Utc::now()
            }
        },
        _ => Utc::now(),
    }
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    // datetime-local submits without an offset, with or without seconds
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Optional integer id field (single-select widgets).
fn optional_id(data: &FormData, name: &str, errors: &mut FormErrors) -> Option<i32> {
    match data.first(name) {
        Some(raw) if !raw.is_empty() => match raw.parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.add(name, "Select a valid choice.");
                None
            }
        },
        _ => None,
    }
}

/// Multi-select integer id field. Repeated values collapse to one; the
/// association rows they feed are keyed on the id.
fn id_list(data: &FormData, name: &str, errors: &mut FormErrors) -> Vec<i32> {
    let mut ids = Vec::new();
    for raw in data.all(name) {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match raw.parse::<i32>() {
            Ok(id) => {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            Err(_) => errors.add(name, "Select a valid choice."),
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_fields() {
        let data = FormData::parse("linked_returns=1&linked_returns=2&title=Case");
        assert_eq!(data.all("linked_returns"), ["1", "2"]);
        assert_eq!(data.first("title"), Some("Case"));
        assert_eq!(data.first("missing"), None);
    }

    #[test]
    fn decodes_percent_encoding() {
        let data = FormData::parse("title=Damaged%20item%20%26%20box");
        assert_eq!(data.first("title"), Some("Damaged item & box"));
    }

    #[test]
    fn datetime_local_formats_parse() {
        assert!(parse_datetime("2024-05-01T10:30").is_some());
        assert!(parse_datetime("2024-05-01T10:30:15").is_some());
        assert!(parse_datetime("2024-05-01T10:30:15Z").is_some());
        assert!(parse_datetime("not a date").is_none());
    }

    #[test]
    fn repeated_ids_collapse_to_one() {
        let mut errors = FormErrors::default();
        let data = FormData::parse("linked_returns=5&linked_returns=5&linked_returns=2");
        assert_eq!(id_list(&data, "linked_returns", &mut errors), [5, 2]);
        assert!(errors.is_empty());
    }

    #[test]
    fn errors_accumulate_per_field() {
        let mut errors = FormErrors::default();
        errors.add("title", "This field is required.");
        errors.add("title", "Too long.");
        assert_eq!(errors.field("title").unwrap().len(), 2);
        assert!(!errors.is_empty());
    }
}
