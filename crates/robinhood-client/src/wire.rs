//! Serde helpers for the service's JSON conventions.
//!
//! Prices, balances and quantities travel as JSON strings (`"12.34"`) and may
//! be `null`. Plain string fields are also nullable on the wire.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum {
    Str(String),
    Num(f64),
}

fn parse_decimal<E: serde::de::Error>(raw: Option<StrOrNum>) -> Result<Option<f64>, E> {
    match raw {
        None => Ok(None),
        Some(StrOrNum::Num(n)) => Ok(Some(n)),
        Some(StrOrNum::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(StrOrNum::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::custom(format!("invalid decimal string {:?}", s))),
    }
}

/// `f64` carried as a string. `null` and `""` decode to `0.0`.
pub mod f64_str {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = Option::<StrOrNum>::deserialize(deserializer)?;
        Ok(parse_decimal::<D::Error>(raw)?.unwrap_or_default())
    }
}

/// Optional `f64` carried as a string. `null` and `""` decode to `None`.
pub mod opt_f64_str {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        let raw = Option::<StrOrNum>::deserialize(deserializer)?;
        parse_decimal::<D::Error>(raw)
    }
}

/// Treat `null` as the type's default.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn is_zero(value: &f64) -> bool {
    *value == 0.0
}
