//! Reason codes for session transitions

use serde::{Deserialize, Serialize};

/// Why a session ended up where it is after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R001: Identity detection
    // =========================================================================
    /// Asked the identity source
    R001_DETECTION_STARTED,
    /// Identity source yielded a value
    R001_IDENTITY_DETECTED,
    /// Identity source yielded nothing (not an error)
    R001_IDENTITY_ABSENT,

    // =========================================================================
    // R002: Generation
    // =========================================================================
    /// Planet derived from the detected identity
    R002_PLANET_GENERATED,
    /// Generate requested again, same planet
    R002_PLANET_UNCHANGED,
    /// DNA could not be decoded
    R002_GENERATION_FAILED,

    // =========================================================================
    // R003: Lifecycle
    // =========================================================================
    /// Back to IDLE, identity and planet dropped
    R003_SESSION_RESET,

    // =========================================================================
    // R004: Rejections
    // =========================================================================
    /// Event makes no sense in the current state
    R004_EVENT_IGNORED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R001_DETECTION_STARTED => "R001_DETECTION_STARTED",
            Self::R001_IDENTITY_DETECTED => "R001_IDENTITY_DETECTED",
            Self::R001_IDENTITY_ABSENT => "R001_IDENTITY_ABSENT",
            Self::R002_PLANET_GENERATED => "R002_PLANET_GENERATED",
            Self::R002_PLANET_UNCHANGED => "R002_PLANET_UNCHANGED",
            Self::R002_GENERATION_FAILED => "R002_GENERATION_FAILED",
            Self::R003_SESSION_RESET => "R003_SESSION_RESET",
            Self::R004_EVENT_IGNORED => "R004_EVENT_IGNORED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R001_DETECTION_STARTED => "Looking for identity",
            Self::R001_IDENTITY_DETECTED => "Identity detected",
            Self::R001_IDENTITY_ABSENT => "Open inside Farcaster",
            Self::R002_PLANET_GENERATED => "Planet generated",
            Self::R002_PLANET_UNCHANGED => "Planet unchanged",
            Self::R002_GENERATION_FAILED => "Could not generate",
            Self::R003_SESSION_RESET => "Session reset",
            Self::R004_EVENT_IGNORED => "Event ignored",
        }
    }

    /// Did the event move the session forward?
    pub fn is_progress(&self) -> bool {
        matches!(
            self,
            Self::R001_DETECTION_STARTED
                | Self::R001_IDENTITY_DETECTED
                | Self::R002_PLANET_GENERATED
        )
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
