//! Session state definitions

use serde::{Deserialize, Serialize};

/// The four states of a planet session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// Nothing known yet
    Idle,
    /// Waiting on the identity source
    Detecting,
    /// Identity known, no planet yet
    Detected,
    /// Planet derived
    Generated,
}

impl SessionState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SessionState::Idle => "\x1b[90m",      // Gray
            SessionState::Detecting => "\x1b[33m", // Yellow
            SessionState::Detected => "\x1b[36m",  // Cyan
            SessionState::Generated => "\x1b[32m", // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for state
    pub fn emoji(&self) -> &'static str {
        match self {
            SessionState::Idle => "⏳",
            SessionState::Detecting => "🔭",
            SessionState::Detected => "👤",
            SessionState::Generated => "🪐",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Idle => "IDLE",
            SessionState::Detecting => "DETECTING",
            SessionState::Detected => "DETECTED",
            SessionState::Generated => "GENERATED",
        };
        write!(f, "{}", name)
    }
}
