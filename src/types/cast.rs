//! Lenient field casts for request payloads.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` on `Option` fields.
//! `null` reads as absent. A value that cannot be cast fails deserialization.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

/// Text field: strings as-is, numbers and booleans in their JSON spelling.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_text(&value).map(Some).map_err(D::Error::custom),
    }
}

/// Numeric field: JSON numbers, or strings holding a number.
/// An empty string reads as absent.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("{} is not a finite number", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("cannot cast \"{}\" to a number", s))),
        Some(other) => Err(D::Error::custom(format!(
            "cannot cast {} to a number",
            kind(&other)
        ))),
    }
}

/// Timestamp field: RFC 3339, a bare date or date-time (read as UTC),
/// or epoch milliseconds. An empty string reads as absent.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .and_then(|millis| DateTime::from_timestamp_millis(millis as i64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("{} is out of range for a date", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => parse_timestamp(s.trim())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("cannot cast \"{}\" to a date", s))),
        Some(other) => Err(D::Error::custom(format!(
            "cannot cast {} to a date",
            kind(&other)
        ))),
    }
}

/// Tag list: an array of scalars, or a single scalar as a one-element list.
pub fn tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(scalar_text)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(D::Error::custom),
        Some(value) => scalar_text(&value)
            .map(|tag| Some(vec![tag]))
            .map_err(D::Error::custom),
    }
}

fn scalar_text(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("cannot cast {} to text", kind(other))),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "number")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "timestamp")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "tags")]
        tags: Option<Vec<String>>,
    }

    fn parse(value: serde_json::Value) -> Result<Fields, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_missing_and_null_are_absent() {
        let fields = parse(json!({"text": null, "number": null})).unwrap();
        assert!(fields.text.is_none());
        assert!(fields.number.is_none());
        assert!(fields.at.is_none());
        assert!(fields.tags.is_none());
    }

    #[test]
    fn test_text_accepts_scalars() {
        assert_eq!(parse(json!({"text": 123})).unwrap().text.as_deref(), Some("123"));
        assert_eq!(parse(json!({"text": true})).unwrap().text.as_deref(), Some("true"));
        assert!(parse(json!({"text": {"a": 1}})).is_err());
    }

    #[test]
    fn test_number_accepts_fractions_and_numeric_strings() {
        assert_eq!(parse(json!({"number": 2.5})).unwrap().number, Some(2.5));
        assert_eq!(parse(json!({"number": 3})).unwrap().number, Some(3.0));
        assert_eq!(parse(json!({"number": " 4 "})).unwrap().number, Some(4.0));
        assert_eq!(parse(json!({"number": ""})).unwrap().number, None);
    }

    #[test]
    fn test_number_rejects_words() {
        let err = parse(json!({"number": "two"})).unwrap_err();
        assert!(err.to_string().contains("cannot cast \"two\" to a number"));
        assert!(parse(json!({"number": [1]})).is_err());
    }

    #[test]
    fn test_timestamp_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(parse(json!({"at": "2024-01-01"})).unwrap().at, Some(midnight));
        assert_eq!(
            parse(json!({"at": "2024-01-01T00:00:00Z"})).unwrap().at,
            Some(midnight)
        );
        assert_eq!(
            parse(json!({"at": "2024-01-01T00:00:00"})).unwrap().at,
            Some(midnight)
        );
        assert_eq!(
            parse(json!({"at": 1_704_067_200_000_i64})).unwrap().at,
            Some(midnight)
        );
        assert!(parse(json!({"at": "yesterday"})).is_err());
    }

    #[test]
    fn test_tags_wraps_single_value() {
        assert_eq!(
            parse(json!({"tags": "rust"})).unwrap().tags,
            Some(vec!["rust".to_string()])
        );
        assert_eq!(
            parse(json!({"tags": ["rust", 2]})).unwrap().tags,
            Some(vec!["rust".to_string(), "2".to_string()])
        );
        assert!(parse(json!({"tags": [{"name": "rust"}]})).is_err());
    }
}
