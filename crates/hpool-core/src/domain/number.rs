use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Accepts a decimal string or a JSON number for the same field and
/// normalizes to `f64`. `null` decodes as `0.0`.
///
/// The API sends most balances as strings (`"12.5"`) but is not consistent
/// about it, so fields declared as strings are decoded through this.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WireNumber {
        Number(f64),
        Text(String),
    }

    match Option::<WireNumber>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(WireNumber::Number(value)) => Ok(value),
        Some(WireNumber::Text(text)) => text
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid decimal string '{text}'"))),
    }
}

/// Decodes an explicit `null` as the field type's default. Paired with
/// `#[serde(default)]` on the struct, absent and `null` fields read the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
