//! Trait decoder: DNA → trait record
//!
//! Layout v1 (offsets into raw hex, prefix stripped):
//! - color:     [2..4)   byte mod 6
//! - mouth:     [6..8)   byte mod 4
//! - eyes:      [8..10)  byte mod 3
//! - accessory: [10..12) byte mod 3
//! - ring:      [12]     nibble even

use crate::{
    BYTE_WINDOW, OFFSET_ACCESSORY, OFFSET_COLOR, OFFSET_EYES, OFFSET_MOUTH, OFFSET_RING,
    REQUIRED_DNA_LEN,
};
use crate::types::{
    strip_prefix, Accessory, Digest, DnaError, EyeStyle, Mouth, PrimaryColor, TraitRecord,
};

/// One trait's reserved window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitWindow {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
}

/// All windows of layout v1, in hex order
pub const WINDOWS: [TraitWindow; 5] = [
    TraitWindow { name: "primary_color", offset: OFFSET_COLOR, len: BYTE_WINDOW },
    TraitWindow { name: "mouth", offset: OFFSET_MOUTH, len: BYTE_WINDOW },
    TraitWindow { name: "eye_style", offset: OFFSET_EYES, len: BYTE_WINDOW },
    TraitWindow { name: "accessory", offset: OFFSET_ACCESSORY, len: BYTE_WINDOW },
    TraitWindow { name: "has_ring", offset: OFFSET_RING, len: 1 },
];

/// Trait decoder
#[derive(Debug, Clone, Default)]
pub struct TraitDecoder;

impl TraitDecoder {
    /// Create new decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a canonical digest
    pub fn decode(&self, dna: &Digest) -> Result<TraitRecord, DnaError> {
        self.decode_str(dna.as_str())
    }

    /// Decode any hex string, `0x` optional.
    /// Bounds are checked before anything is sliced.
    pub fn decode_str(&self, dna: &str) -> Result<TraitRecord, DnaError> {
        let raw = strip_prefix(dna).as_bytes();
        if raw.len() < REQUIRED_DNA_LEN {
            return Err(DnaError::TruncatedDigest {
                required: REQUIRED_DNA_LEN,
                actual: raw.len(),
            });
        }

        Ok(TraitRecord {
            primary_color: pick(raw, OFFSET_COLOR, &PrimaryColor::ALL)?,
            mouth: pick(raw, OFFSET_MOUTH, &Mouth::ALL)?,
            eye_style: pick(raw, OFFSET_EYES, &EyeStyle::ALL)?,
            accessory: pick(raw, OFFSET_ACCESSORY, &Accessory::ALL)?,
            has_ring: read_window(raw, OFFSET_RING, 1)? % 2 == 0,
        })
    }

    /// Raw window values, for verbose output
    pub fn window_values(&self, dna: &str) -> Result<Vec<(TraitWindow, u8)>, DnaError> {
        let raw = strip_prefix(dna).as_bytes();
        if raw.len() < REQUIRED_DNA_LEN {
            return Err(DnaError::TruncatedDigest {
                required: REQUIRED_DNA_LEN,
                actual: raw.len(),
            });
        }
        WINDOWS
            .iter()
            .map(|w| read_window(raw, w.offset, w.len).map(|v| (*w, v)))
            .collect()
    }
}

/// Decode with a throwaway decoder
pub fn decode(dna: &Digest) -> Result<TraitRecord, DnaError> {
    TraitDecoder::new().decode(dna)
}

/// `options[window mod len]`
fn pick<T: Copy>(raw: &[u8], offset: usize, options: &[T]) -> Result<T, DnaError> {
    let value = read_window(raw, offset, BYTE_WINDOW)?;
    Ok(options[value as usize % options.len()])
}

/// Parse `len` (1 or 2) hex characters at `offset`. Caller checked bounds.
fn read_window(raw: &[u8], offset: usize, len: usize) -> Result<u8, DnaError> {
    let window = &raw[offset..offset + len];
    let mut value: u8 = 0;
    for &c in window {
        let nibble = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => {
                return Err(DnaError::MalformedDigest {
                    offset,
                    window: String::from_utf8_lossy(window).into_owned(),
                })
            }
        };
        value = (value << 4) | nibble;
    }
    Ok(value)
}
