//! Serialization adapter between stored records and the wire format.
//!
//! JSON has no native representation for timestamps or arbitrary-precision
//! numerics, so the wire form carries:
//!
//! - timestamps as ISO-8601 strings in canonical `YYYY-MM-DDTHH:mm:ss.sssZ`
//!   form, always UTC;
//! - decimals as plain decimal strings, no thousands separators, full
//!   precision preserved.
//!
//! The [`iso_millis`] and [`decimal_string`] serde modules apply these
//! encodings on model fields; the `parse_*` helpers decode values read back
//! from the store, failing with [`AppError::Serialization`] when a stored
//! value is not a valid calendar date or decimal. That failure is an
//! internal bug by definition and must never masquerade as a missing
//! record.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

use crate::{AppError, Result};

/// Encode a timestamp in canonical wire form (`2024-01-01T00:00:00.000Z`).
#[must_use]
pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp string back into a UTC instant.
///
/// # Errors
///
/// Returns `AppError::Serialization` when the value is not a valid
/// ISO-8601 calendar date.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| AppError::Serialization(format!("field {field}: invalid timestamp {raw:?}: {err}")))
}

/// Parse a stored decimal string back into a [`Decimal`].
///
/// # Errors
///
/// Returns `AppError::Serialization` when the value cannot be parsed at
/// full precision.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal> {
    raw.parse::<Decimal>()
        .map_err(|err| AppError::Serialization(format!("field {field}: invalid decimal {raw:?}: {err}")))
}

/// Serde adapter for timestamp fields: canonical ISO-8601 millis on the
/// wire, `DateTime<Utc>` in memory.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as `YYYY-MM-DDTHH:mm:ss.sssZ`.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&super::encode_timestamp(ts))
    }

    /// Deserialize from any RFC 3339 string, normalizing to UTC.
    ///
    /// # Errors
    ///
    /// Fails when the input is not a valid RFC 3339 timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for arbitrary-precision numeric fields: decimal string on
/// the wire, [`rust_decimal::Decimal`] in memory.
///
/// Deserialization also accepts plain JSON numbers so that clients may post
/// `"salary": 90000` on create; the canonical outbound form is always a
/// string.
pub mod decimal_string {
    use std::fmt;
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{de, Deserializer, Serializer};

    /// Serialize at full precision with no separators.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(value: &Decimal, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&value.to_string())
    }

    struct DecimalVisitor;

    impl de::Visitor<'_> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Decimal::from_str(v).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            Decimal::try_from(v).map_err(E::custom)
        }
    }

    /// Deserialize from a decimal string or a plain JSON number.
    ///
    /// # Errors
    ///
    /// Fails when the input is neither.
    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Decimal, D::Error> {
        de.deserialize_any(DecimalVisitor)
    }
}
