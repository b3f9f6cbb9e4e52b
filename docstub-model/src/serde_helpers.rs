//! Serde helpers for fields the doc generator may emit as `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize a `null` as the type's default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
