//! DNA digest: `0x` + 64 lowercase hex characters

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::DnaError;
use crate::DNA_PREFIX;

lazy_static! {
    /// Full-length digest, optional prefix, either case
    static ref RE_DIGEST: Regex = Regex::new(r"^(0[xX])?[0-9a-fA-F]{64}$").unwrap();
}

/// Keccak-256 digest of an identity, in canonical string form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest(String);

impl Digest {
    /// Wrap 32 raw hash bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(format!("{}{}", DNA_PREFIX, hex::encode(bytes)))
    }

    /// Strict parse: exactly 64 hex chars, optional `0x`.
    /// Normalizes to lowercase with prefix.
    pub fn parse(s: &str) -> Result<Self, DnaError> {
        if !RE_DIGEST.is_match(s) {
            return Err(DnaError::MalformedDigest {
                offset: 0,
                window: s.chars().take(16).collect(),
            });
        }
        let raw = strip_prefix(s);
        Ok(Self(format!("{}{}", DNA_PREFIX, raw.to_ascii_lowercase())))
    }

    /// Full string including `0x`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex characters without the prefix
    pub fn raw_hex(&self) -> &str {
        strip_prefix(&self.0)
    }
}

/// Drop a leading `0x`/`0X` if present
pub fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = DnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Digest {
    type Error = DnaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Digest> for String {
    fn from(value: Digest) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = "0xc89efdaa54c0f20c7adf612882df0950f5a951637e0307cdcb4c672f298b8bc6";

    #[test]
    fn test_parse_canonical() {
        let d = Digest::parse(ONE).unwrap();
        assert_eq!(d.as_str(), ONE);
        assert_eq!(d.raw_hex().len(), 64);
    }

    #[test]
    fn test_parse_normalizes() {
        let upper = ONE[2..].to_ascii_uppercase();
        let d = Digest::parse(&upper).unwrap();
        assert_eq!(d.as_str(), ONE);
    }

    #[test]
    fn test_parse_rejects_bad_length_and_chars() {
        assert!(Digest::parse(&ONE[..65]).is_err());
        assert!(Digest::parse(&format!("{}0", ONE)).is_err());
        let bad = ONE.replacen('c', "g", 1);
        assert!(Digest::parse(&bad).is_err());
        assert!(Digest::parse("").is_err());
    }

    #[test]
    fn test_from_bytes() {
        let d = Digest::from_bytes(&[0xab; 32]);
        assert!(d.as_str().starts_with("0xabab"));
        assert_eq!(d.as_str().len(), 66);
    }
}
