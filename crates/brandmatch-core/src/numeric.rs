//! Lenient numeric parsing for form-sourced records.
//!
//! Numeric fields arrive either as numbers or as strings typed into a form.
//! Anything that does not parse to a finite number is treated as absent, so
//! it contributes 0 to every calculation.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Parse a user-entered amount such as `"1,200.50"` or `"$300"`.
///
/// Returns `None` for empty, non-numeric, or non-finite input.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

struct LenientNumber;

impl<'de> Visitor<'de> for LenientNumber {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v).filter(|v| v.is_finite()))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(parse_amount(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// `deserialize_with` helper for optional numeric fields.
///
/// # Errors
///
/// Only fails when the underlying deserializer itself fails; malformed
/// values become `None`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientNumber)
}

/// `deserialize_with` helper for whole-number fields such as a timeframe in
/// months. Fractions are truncated; malformed values become `0`.
///
/// # Errors
///
/// Only fails when the underlying deserializer itself fails.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserializer.deserialize_any(LenientNumber)?;
    #[allow(clippy::cast_possible_truncation)]
    Ok(value.map_or(0, |v| v.trunc() as i64))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_i64")]
        months: i64,
    }

    #[test]
    fn parse_amount_accepts_plain_numbers() {
        assert_eq!(parse_amount("1000"), Some(1000.0));
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
    }

    #[test]
    fn parse_amount_strips_currency_and_separators() {
        assert_eq!(parse_amount("$1,200.50"), Some(1200.5));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn lenient_fields_accept_numbers_and_strings() {
        let row: Row = serde_json::from_str(r#"{"amount": "250", "months": "12"}"#).unwrap();
        assert_eq!(row.amount, Some(250.0));
        assert_eq!(row.months, 12);

        let row: Row = serde_json::from_str(r#"{"amount": 99.5, "months": 6}"#).unwrap();
        assert_eq!(row.amount, Some(99.5));
        assert_eq!(row.months, 6);
    }

    #[test]
    fn lenient_fields_coerce_malformed_values() {
        let row: Row =
            serde_json::from_str(r#"{"amount": "twelve", "months": "soon"}"#).unwrap();
        assert_eq!(row.amount, None);
        assert_eq!(row.months, 0);

        let row: Row = serde_json::from_str(r#"{"amount": null, "months": true}"#).unwrap();
        assert_eq!(row.amount, None);
        assert_eq!(row.months, 0);
    }

    #[test]
    fn lenient_fields_default_when_missing() {
        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.amount, None);
        assert_eq!(row.months, 0);
    }
}
