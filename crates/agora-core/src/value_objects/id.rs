//! Opaque 64-bit identifier
//!
//! The engine never mints ids; users and content items arrive from the owning
//! platform already identified. Ids serialize as strings in JSON so that
//! JavaScript clients never lose precision past 2^53.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque identifier for users and content items
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id(i64);

impl Id {
    /// Create an Id from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse::<i64>().map(Id).map_err(|_| IdParseError::InvalidFormat)
    }
}

/// Error when parsing an Id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

// Serialize as string for JSON (JavaScript precision safety)
impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = Id;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Id, E>
            where
                E: de::Error,
            {
                Ok(Id(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Id, E>
            where
                E: de::Error,
            {
                Ok(Id(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<Id, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(Id)
                    .map_err(|_| de::Error::custom("invalid id string"))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
