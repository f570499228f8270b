//! Output structures for terminal display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Planet, ReasonCode, SessionState};

/// Output of a single session transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// State after the event
    pub state: SessionState,
    /// Reason for current state
    pub reason: ReasonCode,
    /// Planet, once generated
    pub planet: Option<Planet>,
}

impl SessionOutput {
    /// Create new output
    pub fn new(state: SessionState, reason: ReasonCode, planet: Option<Planet>) -> Self {
        Self {
            timestamp: Utc::now(),
            state,
            reason,
            planet,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.state.color_code();
        let reset = SessionState::color_reset();
        let emoji = self.state.emoji();

        format!(
            "{}{} state={} | {} | {}{}",
            color,
            emoji,
            self.state,
            self.reason.code(),
            self.reason.description(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        match &self.planet {
            Some(planet) => format!(
                "state={} | reason={} | dna={}",
                self.state,
                self.reason.code(),
                planet.dna
            ),
            None => format!("state={} | reason={}", self.state, self.reason.code()),
        }
    }
}
