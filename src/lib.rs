//! Zeta Planets: deterministic planet avatars from a Farcaster fid
//!
//! fid → Keccak-256 DNA → trait windows → SVG planet

pub mod core;
pub mod types;

// =============================================================================
// TRAIT LAYOUT v1 [FROZEN] - offsets into the raw hex DNA (no 0x prefix)
// =============================================================================

/// Layout version tagged onto every shared planet.
/// Changing any offset or option list below requires bumping this.
pub const LAYOUT_VERSION: u16 = 1;

/// Width of a byte window in hex characters
pub const BYTE_WINDOW: usize = 2;

/// Primary color window
pub const OFFSET_COLOR: usize = 2;

/// Mouth glyph window
pub const OFFSET_MOUTH: usize = 6;

/// Eye glyph window
pub const OFFSET_EYES: usize = 8;

/// Accessory window
pub const OFFSET_ACCESSORY: usize = 10;

/// Ring nibble (single hex character)
pub const OFFSET_RING: usize = 12;

/// Minimum raw hex length the decoder needs
pub const REQUIRED_DNA_LEN: usize = OFFSET_RING + 1;

// =============================================================================
// DIGEST
// =============================================================================

/// Prefix carried by every canonical DNA string
pub const DNA_PREFIX: &str = "0x";

/// Hex characters in a Keccak-256 digest
pub const DNA_HEX_LEN: usize = 64;

/// Generic message shown to users for any generation failure
pub const GENERIC_FAILURE: &str = "could not generate";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.1.0";
