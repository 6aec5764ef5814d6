// SPDX-License-Identifier: MPL-2.0
//! Dynamically typed JSON values carried by association payloads.
//!
//! Decoding probes the input in a fixed priority order: integer, float,
//! boolean, string, list, map. A JSON number with an integral value
//! (including `3.0`) therefore decodes as [`AnyValue::Int`], never as
//! [`AnyValue::Float`]. `null` is rejected.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of value shapes an association payload may contain.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    List(Vec<AnyValue>),
    Map(BTreeMap<String, AnyValue>),
}

impl AnyValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value of an `Int` or `Float`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            // Magnitudes above 2^53 round to the nearest representable value
            #[allow(clippy::cast_precision_loss)]
            AnyValue::Int(i) => Some(*i as f64),
            AnyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[AnyValue]> {
        match self {
            AnyValue::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, AnyValue>> {
        match self {
            AnyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the list as strings if every element is a string.
    #[must_use]
    pub fn as_string_list(&self) -> Option<Vec<&str>> {
        self.as_list()?.iter().map(AnyValue::as_str).collect()
    }
}

/// Returns the integer an `f64` exactly represents, if any.
fn integral_value(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or above it overflows i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if value.is_finite() && value.fract() == 0.0 && value >= -LIMIT && value < LIMIT {
        // Checked above: integral and in range
        #[allow(clippy::cast_possible_truncation)]
        Some(value as i64)
    } else {
        None
    }
}

struct AnyValueVisitor;

impl<'de> Visitor<'de> for AnyValueVisitor {
    type Value = AnyValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, float, boolean, string, list or map")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AnyValue, E> {
        Ok(AnyValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AnyValue, E> {
        // Too large for i64: falls through to float
        match i64::try_from(v) {
            Ok(i) => Ok(AnyValue::Int(i)),
            Err(_) => Ok(AnyValue::Float(v as f64)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AnyValue, E> {
        match integral_value(v) {
            Some(i) => Ok(AnyValue::Int(i)),
            None => Ok(AnyValue::Float(v)),
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<AnyValue, E> {
        Ok(AnyValue::Bool(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AnyValue, E> {
        Ok(AnyValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<AnyValue, E> {
        Ok(AnyValue::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AnyValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(AnyValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AnyValue, A::Error> {
        let mut map = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, AnyValue>()? {
            map.insert(key, value);
        }
        Ok(AnyValue::Map(map))
    }

    fn visit_unit<E: de::Error>(self) -> Result<AnyValue, E> {
        Err(E::custom("Unsupported type"))
    }

    fn visit_none<E: de::Error>(self) -> Result<AnyValue, E> {
        Err(E::custom("Unsupported type"))
    }
}

impl<'de> Deserialize<'de> for AnyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AnyValueVisitor)
    }
}

impl Serialize for AnyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnyValue::Int(i) => serializer.serialize_i64(*i),
            AnyValue::Float(f) => serializer.serialize_f64(*f),
            AnyValue::Bool(b) => serializer.serialize_bool(*b),
            AnyValue::String(s) => serializer.serialize_str(s),
            AnyValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            AnyValue::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}
