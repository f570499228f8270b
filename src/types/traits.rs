//! Trait option sets and the decoded trait record
//!
//! The order of every `ALL` array is part of layout v1. Reordering or
//! resizing any of them reinterprets every existing DNA.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Digest, IdentityValue};
use crate::LAYOUT_VERSION;

/// Planet body color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryColor {
    Sky,
    Mint,
    Gold,
    Coral,
    Violet,
    Charcoal,
}

impl PrimaryColor {
    pub const ALL: [PrimaryColor; 6] = [
        Self::Sky,
        Self::Mint,
        Self::Gold,
        Self::Coral,
        Self::Violet,
        Self::Charcoal,
    ];

    /// CSS color used in the SVG
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Sky => "#6aa9ff",
            Self::Mint => "#6aff9d",
            Self::Gold => "#ffd36a",
            Self::Coral => "#ff6a6a",
            Self::Violet => "#b06aff",
            Self::Charcoal => "#222",
        }
    }

    /// RGB triple (for terminal swatches)
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Sky => (0x6a, 0xa9, 0xff),
            Self::Mint => (0x6a, 0xff, 0x9d),
            Self::Gold => (0xff, 0xd3, 0x6a),
            Self::Coral => (0xff, 0x6a, 0x6a),
            Self::Violet => (0xb0, 0x6a, 0xff),
            Self::Charcoal => (0x22, 0x22, 0x22),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sky => "sky",
            Self::Mint => "mint",
            Self::Gold => "gold",
            Self::Coral => "coral",
            Self::Violet => "violet",
            Self::Charcoal => "charcoal",
        }
    }
}

/// Mouth glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mouth {
    Flat,
    Open,
    Dash,
    Wavy,
}

impl Mouth {
    pub const ALL: [Mouth; 4] = [Self::Flat, Self::Open, Self::Dash, Self::Wavy];

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Flat => "_",
            Self::Open => "o",
            Self::Dash => "-",
            Self::Wavy => "~",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Open => "open",
            Self::Dash => "dash",
            Self::Wavy => "wavy",
        }
    }
}

/// Eye glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    Dot,
    Bullet,
    Ring,
}

impl EyeStyle {
    pub const ALL: [EyeStyle; 3] = [Self::Dot, Self::Bullet, Self::Ring];

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::Bullet => "•",
            Self::Ring => "o",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Bullet => "bullet",
            Self::Ring => "ring",
        }
    }
}

/// Optional decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessory {
    None,
    Hat,
    Smoke,
}

impl Accessory {
    pub const ALL: [Accessory; 3] = [Self::None, Self::Hat, Self::Smoke];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hat => "hat",
            Self::Smoke => "smoke",
        }
    }
}

/// Complete set of decoded traits. Never partially filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitRecord {
    pub primary_color: PrimaryColor,
    pub mouth: Mouth,
    pub eye_style: EyeStyle,
    pub accessory: Accessory,
    pub has_ring: bool,
}

impl fmt::Display for TraitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color={} mouth={} eyes={} accessory={} ring={}",
            self.primary_color.name(),
            self.mouth.name(),
            self.eye_style.name(),
            self.accessory.name(),
            if self.has_ring { "yes" } else { "no" }
        )
    }
}

/// Shareable planet: traits plus the layout they were decoded with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Trait layout used to decode `dna`
    pub layout_version: u16,
    pub identity: IdentityValue,
    pub dna: Digest,
    pub traits: TraitRecord,
}

impl Planet {
    /// Bundle under the current layout version
    pub fn new(identity: IdentityValue, dna: Digest, traits: TraitRecord) -> Self {
        Self {
            layout_version: LAYOUT_VERSION,
            identity,
            dna,
            traits,
        }
    }
}
