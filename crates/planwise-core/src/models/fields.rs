//! Lenient field decoders for backend payloads.
//!
//! The project-detail endpoint is loosely typed: ids arrive as strings or
//! numbers and optional fields arrive as `null` as often as they are omitted.
//! These helpers absorb that so a single odd field never rejects a project.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Decode an id given as a string, a number or `null` (empty string).
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(option_id_string(deserializer)?.unwrap_or_default())
}

/// Decode an optional id given as a string or a number; `null` stays `None`.
pub(crate) fn option_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    }))
}

/// Decode a value where `null` means the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a flag where `null` means `true`.
pub(crate) fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub(crate) fn default_true() -> bool {
    true
}
