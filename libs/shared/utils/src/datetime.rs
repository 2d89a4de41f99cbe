use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const SCHEDULED_AT_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a caller-supplied appointment timestamp. An explicit offset is
/// dropped and the wall-clock time kept as written.
pub fn parse_scheduled_at(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();

    for format in SCHEDULED_AT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .map_err(|_| {
            format!(
                "scheduled_at inválido: {:?} (se espera YYYY-MM-DDTHH:MM[:SS])",
                raw
            )
        })
}

pub fn deserialize_scheduled_at<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_scheduled_at(&raw).map_err(serde::de::Error::custom)
}

/// Strict `YYYY-MM-DD`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
