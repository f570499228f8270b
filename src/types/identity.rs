//! Identity value (Farcaster fid)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::DnaError;

/// A validated, strictly positive account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct IdentityValue(u64);

impl IdentityValue {
    /// Create from a raw integer, rejecting zero
    pub fn new(value: u64) -> Result<Self, DnaError> {
        if value == 0 {
            return Err(DnaError::InvalidIdentity("identity must be positive".into()));
        }
        Ok(Self(value))
    }

    /// Raw integer value
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Canonical decimal form. This exact string is what gets hashed.
    pub fn to_decimal(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for IdentityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for IdentityValue {
    type Error = DnaError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for IdentityValue {
    type Error = DnaError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(DnaError::InvalidIdentity(format!("{} is not positive", value)));
        }
        Self::new(value as u64)
    }
}

impl From<IdentityValue> for u64 {
    fn from(value: IdentityValue) -> Self {
        value.0
    }
}

impl FromStr for IdentityValue {
    type Err = DnaError;

    /// Parse a decimal string. No whitespace, no sign, digits only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DnaError::InvalidIdentity("identity is absent".into()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DnaError::InvalidIdentity(format!("{:?} is not an integer", s)));
        }
        let value: u64 = s
            .parse()
            .map_err(|_| DnaError::InvalidIdentity(format!("{:?} is out of range", s)))?;
        Self::new(value)
    }
}
