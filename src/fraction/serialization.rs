//! # Serialization
//!
//! A fraction is written as its `numerator/denominator` text. Reading accepts everything
//! `FromStr` does, so decimal literals can be used in input as well.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fraction::Fraction;

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
