//! DNA generator: fid → Keccak-256 digest
//!
//! The hashed bytes are the UTF-8 decimal string of the fid, never its binary
//! encoding. Identity 123 hashes the three bytes "123". Changing this changes
//! every planet ever generated.

use sha3::{Digest as _, Keccak256};

use crate::types::{Digest, DnaError, IdentityValue};

/// Deterministic DNA generator
#[derive(Debug, Clone, Default)]
pub struct DnaGenerator;

impl DnaGenerator {
    /// Create new generator
    pub fn new() -> Self {
        Self
    }

    /// Hash a validated identity
    pub fn generate(&self, identity: IdentityValue) -> Digest {
        keccak_hex(identity.to_decimal().as_bytes())
    }

    /// Hash a raw, possibly absent identity.
    /// Absent or non-positive input is rejected before hashing.
    pub fn generate_checked(&self, raw: Option<i64>) -> Result<Digest, DnaError> {
        let raw = raw.ok_or_else(|| DnaError::InvalidIdentity("identity is absent".into()))?;
        let identity = IdentityValue::try_from(raw)?;
        Ok(self.generate(identity))
    }
}

/// Hash an identity with a throwaway generator
pub fn digest(identity: IdentityValue) -> Digest {
    DnaGenerator::new().generate(identity)
}

/// Keccak-256 of arbitrary bytes as a `0x` hex digest
pub fn keccak_hex(data: &[u8]) -> Digest {
    let hash: [u8; 32] = Keccak256::digest(data).into();
    Digest::from_bytes(&hash)
}
