//! # Lenient Numeric Deserialization
//!
//! Optional numeric fields on store records are filled by document
//! extraction and are often junk (`"N/A"`, `"pending"`, `true`). A junk value
//! must not reject the whole snapshot, so these deserializers map anything
//! that is not a usable number to `None` and log it at `debug`.
//!
//! Numeric strings (`"1200.50"`) are parsed. Integer targets accept floats
//! only when they are whole and in range.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so that a missing
//! field is also `None`.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess};

/// What the visitor saw.
enum Raw {
    Number(f64),
    Absent,
    Junk(&'static str),
}

struct RawVisitor;

impl<'de> de::Visitor<'de> for RawVisitor {
    type Value = Raw;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Raw, E> {
        Ok(Raw::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Raw, E> {
        Ok(Raw::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Raw, E> {
        Ok(Raw::Number(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Raw, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(Raw::Absent);
        }
        Ok(trimmed
            .parse::<f64>()
            .map_or(Raw::Junk("non-numeric string"), Raw::Number))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Raw, E> {
        Ok(Raw::Junk("boolean"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Raw, E> {
        Ok(Raw::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Raw, E> {
        Ok(Raw::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Raw, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Raw, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Raw::Junk("sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Raw, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Raw::Junk("map"))
    }
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match deserializer.deserialize_any(RawVisitor)? {
        Raw::Number(v) if v.is_finite() => Ok(Some(v)),
        Raw::Number(v) => {
            tracing::debug!(value = %v, "non-finite number treated as absent");
            Ok(None)
        }
        Raw::Absent => Ok(None),
        Raw::Junk(kind) => {
            tracing::debug!(kind, "malformed numeric field treated as absent");
            Ok(None)
        }
    }
}

fn whole_in_range(v: f64, min: f64, max: f64) -> Option<f64> {
    let ok = v.fract() == 0.0 && (min..=max).contains(&v);
    if !ok {
        tracing::debug!(value = %v, "number out of integer range treated as absent");
    }
    ok.then_some(v)
}

/// Optional `f64`; junk becomes `None`.
pub fn opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    number(deserializer)
}

/// `f64` defaulting to `0.0`; junk becomes `0.0`.
pub fn f64_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(number(deserializer)?.unwrap_or_default())
}

/// Optional `i32`; junk, fractions and out-of-range values become `None`.
pub fn opt_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(number(deserializer)?
        .and_then(|v| whole_in_range(v, f64::from(i32::MIN), f64::from(i32::MAX)))
        .map(|v| v as i32))
}

/// Optional `u8`; junk, fractions and out-of-range values become `None`.
pub fn opt_u8<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    Ok(number(deserializer)?
        .and_then(|v| whole_in_range(v, 0.0, f64::from(u8::MAX)))
        .map(|v| v as u8))
}
