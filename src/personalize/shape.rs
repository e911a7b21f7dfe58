//! Building blocks shared by every Personalize value object.
//!
//! A shape is a struct whose fields are all optional. `shape!` expands a
//! struct declaration into the struct itself (every field wrapped in
//! `Option`, absent fields skipped on the wire), one fluent setter per field
//! and a `Display` impl that renders the shape as `{field: value,...}`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::error::PersonalizeError;

macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::personalize::shape::render(self, f)
            }
        }
    };
}

/// Inserts `key` into a lazily created map, refusing to replace an
/// existing entry.
pub(crate) fn insert_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), PersonalizeError> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => {
            tracing::debug!(field, key = %existing.key(), "rejected duplicate map entry");
            Err(PersonalizeError::DuplicateKey {
                field,
                key: existing.key().clone(),
            })
        }
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

pub(crate) fn render<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let value = serde_json::to_value(value).map_err(|_| fmt::Error)?;
    write_value(&value, f)
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Object(fields) => {
            f.write_str("{")?;
            for (i, (key, field)) in fields.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{key}: ")?;
                write_value(field, f)?;
            }
            f.write_str("}")
        }
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(item, f)?;
            }
            f.write_str("]")
        }
        Value::String(s) => f.write_str(s),
        other => write!(f, "{other}"),
    }
}

/// Timestamps travel as fractional epoch seconds with millisecond
/// precision. Anything finer is dropped on the wire, so a value holding
/// sub-millisecond time only equals its decoded copy once truncated with
/// `SubsecRound::trunc_subsecs(3)`.
pub(crate) mod epoch_seconds {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_f64(ts.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let millis = (secs * 1000.0).round() as i64;
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}")))
    }
}
