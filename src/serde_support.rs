//! Serde support behind the `serde` feature
//!
//! A value travels as `{ "numerator": "...", "denominator": "..." }` with both
//! parts as decimal strings, so arbitrarily large values survive formats whose
//! integers are fixed-width. Input is renormalized through
//! [`Rational::from_parts`]; zero denominators decode to the special values.

use crate::rational::Rational;
use num_bigint::BigInt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct PartsOut {
    numerator: String,
    denominator: String,
}

#[derive(Deserialize)]
struct PartsIn {
    numerator: String,
    denominator: String,
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PartsOut {
            numerator: self.numerator.to_string(),
            denominator: self.denominator.to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = PartsIn::deserialize(deserializer)?;
        let numerator: BigInt = raw
            .numerator
            .parse()
            .map_err(|e| de::Error::custom(format!("bad numerator {:?}: {e}", raw.numerator)))?;
        let denominator: BigInt = raw
            .denominator
            .parse()
            .map_err(|e| de::Error::custom(format!("bad denominator {:?}: {e}", raw.denominator)))?;
        Ok(Rational::from_parts(numerator, denominator))
    }
}
