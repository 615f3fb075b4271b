//! Platform identifiers.
//!
//! An [`Id`] is a non-zero 64-bit value whose text form is exactly sixteen
//! hex digits. Users, orgs, and every other resource share the same id space.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Length of the text form of an [`Id`].
pub const ID_LENGTH: usize = 16;

/// Unique identifier for a user or any other resource.
///
/// Zero is reserved and never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

impl Id {
    /// Creates an id from its numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_core::Id;
    ///
    /// let id = Id::new(1).unwrap();
    /// assert_eq!(id.to_string(), "0000000000000001");
    /// assert!(Id::new(0).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(Error::invalid("id must not be zero"));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Id {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != ID_LENGTH {
            return Err(Error::invalid(format!(
                "id must have a length of {ID_LENGTH}, got {} ('{s}')",
                s.len()
            )));
        }
        // from_str_radix tolerates a leading '+', which is not hex
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid(format!("id '{s}' is not hexadecimal")));
        }
        let value = u64::from_str_radix(s, 16)
            .map_err(|e| Error::invalid(format!("id '{s}' is not hexadecimal: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<u64> for Id {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Id> for u64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
