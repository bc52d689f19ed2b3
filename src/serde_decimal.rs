//! Serde helpers to serialize/deserialize block numbers as decimal strings.
//!
//! - `BlockNumber` itself implements `Serialize`/`Deserialize` as its
//!   canonical decimal text.
//! - `decimal_vec`: for `Vec<BlockNumber>` fields, as a list of decimal strings.
//!
//! Strings are parsed with `BlockNumber::parse`, so signs, separators and
//! empty strings are rejected.

use crate::number::{BlockNumber, NumberError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur during decimal (de)serialization.
#[derive(Debug, Error)]
pub enum DecimalSerdeError {
    /// The string was not valid unsigned decimal text.
    #[error(transparent)]
    Number(#[from] NumberError),

    /// An element of a decimal list was not valid unsigned decimal text.
    #[error("list entry {index}: {source}")]
    Entry { index: usize, source: NumberError },
}

fn parse_decimal<E: serde::de::Error>(s: &str) -> Result<BlockNumber, E> {
    BlockNumber::parse(s).map_err(|e| E::custom(DecimalSerdeError::from(e).to_string()))
}

impl Serialize for BlockNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for BlockNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        parse_decimal(&s)
    }
}

/// Serde helpers for `Vec<BlockNumber>` as a list of decimal strings.
pub mod decimal_vec {
    use super::*;

    /// Serialize each number as its decimal string.
    pub fn serialize<S>(numbers: &[BlockNumber], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(numbers.iter().map(|n| n.to_decimal_string()))
    }

    /// Deserialize a list of decimal strings.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<BlockNumber>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let strings: Vec<String> = Vec::deserialize(deserializer)?;
        strings
            .iter()
            .enumerate()
            .map(|(index, s)| {
                BlockNumber::parse(s).map_err(|source| {
                    serde::de::Error::custom(DecimalSerdeError::Entry { index, source }.to_string())
                })
            })
            .collect()
    }
}
