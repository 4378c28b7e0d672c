//! Custom serde helpers for backend wire formats.

/// Deserializes `created_at` from an RFC 3339 string, a SQL-style
/// `YYYY-MM-DD HH:MM:SS[.fff][+zz]` string, or Unix millis.
///
/// The orders endpoint returns database timestamps as ISO 8601 strings, but
/// some drivers pass the column text through and some deployments serialize
/// epoch milliseconds. Timestamps without an offset are read as UTC.
pub mod flexible_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Millis(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis))),
            Raw::Text(text) => parse_text(text.trim())
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp {:?}", text))),
        }
    }

    const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z"];
    const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    fn parse_text(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Some(dt) = OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Deserializes a monetary amount sent as a JSON number or a numeric string.
///
/// SQL `numeric` columns arrive as strings (`"15.99"`) from most drivers.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(Decimal::from(n)),
            Raw::Float(f) => Decimal::try_from(f)
                .map(|d| d.normalize())
                .map_err(|e| serde::de::Error::custom(format!("Invalid amount {}: {}", f, e))),
            Raw::Text(s) => Decimal::from_str(s.trim())
                .map_err(|e| serde::de::Error::custom(format!("Invalid amount {:?}: {}", s, e))),
        }
    }
}
