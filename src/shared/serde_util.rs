//! Custom serde helpers for backend wire formats.

/// Deserializes a `Decimal` from either a JSON number or a JSON string.
///
/// The fee API sends amounts as plain numbers (`"barrier": 33.2`) while
/// big-integer wei values arrive as strings. With `serde-str` enabled the
/// stock `Decimal` impl only accepts strings.
pub mod decimal_flexible {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(u64),
        Signed(i64),
        Float(f64),
    }

    /// Always written back as a string so no precision is lost.
    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Str(s) => Decimal::from_str(s.trim())
                .map_err(|e| serde::de::Error::custom(format!("Invalid decimal '{}': {}", s, e))),
            Raw::Int(n) => Ok(Decimal::from(n)),
            Raw::Signed(n) => Ok(Decimal::from(n)),
            Raw::Float(f) => Decimal::try_from(f)
                .map_err(|e| serde::de::Error::custom(format!("Invalid decimal {}: {}", f, e))),
        }
    }
}

/// Same as [`decimal_flexible`] for optional fields (`null` or absent → `None`).
pub mod decimal_flexible_opt {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super::decimal_flexible")] Decimal);

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(d)| d))
    }
}
