//! Serde helpers for the upstream wire format.
//!
//! The service is loose with scalar types: numbers arrive as strings or as
//! JSON numbers depending on the endpoint, and "no value" shows up as a
//! missing key, `null`, or an empty string. Every helper here maps all of
//! those to `None` instead of failing the whole decode, so a single odd
//! field never costs the caller the rest of the payload.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::content_type::ContentTypeId;

fn scalar_string(v: Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_u32(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?.and_then(scalar_string))
}

pub fn opt_u32<'de, D>(d: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(scalar_u32))
}

pub fn opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(scalar_f64))
}

pub fn opt_content_type<'de, D>(d: D) -> Result<Option<ContentTypeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?
        .as_ref()
        .and_then(scalar_u32)
        .and_then(ContentTypeId::from_code))
}

/// Timestamps arrive as `YYYYMMDDHHMMSS`, occasionally truncated to a bare
/// `YYYYMMDD` date.
pub fn opt_compact_datetime<'de, D>(d: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?
        .and_then(scalar_string)
        .and_then(|s| parse_compact_datetime(&s)))
}

fn parse_compact_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::parse_compact_datetime;

    #[test]
    fn test_parse_full_timestamp() {
        let dt = parse_compact_datetime("20240115143022").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 14:30:22");
    }

    #[test]
    fn test_parse_date_only() {
        let dt = parse_compact_datetime("20240115").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 00:00:00");
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_compact_datetime("not-a-date").is_none());
        assert!(parse_compact_datetime("").is_none());
    }
}
