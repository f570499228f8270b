//! Planet session: immutable state, unidirectional updates
//!
//! State transitions:
//! - IDLE → DETECTING: Detect
//! - DETECTING → DETECTED: identity resolved
//! - DETECTING → IDLE: no identity (not an error)
//! - DETECTED → GENERATED: Generate
//! - any → IDLE: Reset
//!
//! Every `apply` returns a fresh session; the old one is never touched.

use crate::core::{DnaGenerator, TraitDecoder};
use crate::types::{IdentityValue, Planet, ReasonCode, SessionOutput, SessionState};

/// Inputs to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Start asking the identity source
    Detect,
    /// Identity source answered
    IdentityResolved(Option<IdentityValue>),
    /// Derive the planet
    Generate,
    /// Drop everything
    Reset,
}

/// Snapshot of one user session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    identity: Option<IdentityValue>,
    planet: Option<Planet>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of applying one event
#[derive(Debug, Clone)]
pub struct Transition {
    /// Session after the event
    pub session: Session,
    /// What happened
    pub output: SessionOutput,
}

impl Session {
    /// Fresh IDLE session
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            identity: None,
            planet: None,
        }
    }

    /// Apply an event, returning the next session
    pub fn apply(&self, event: SessionEvent) -> Transition {
        let (next, reason) = self.compute_transition(event);

        if next.state != self.state {
            tracing::debug!(from = %self.state, to = %next.state, reason = reason.code(), "session transition");
        }

        let output = SessionOutput::new(next.state, reason, next.planet.clone());
        Transition { session: next, output }
    }

    /// Compute next session and reason
    fn compute_transition(&self, event: SessionEvent) -> (Session, ReasonCode) {
        match (self.state, event) {
            (_, SessionEvent::Reset) => (Session::new(), ReasonCode::R003_SESSION_RESET),

            (SessionState::Idle, SessionEvent::Detect) => (
                Session { state: SessionState::Detecting, identity: None, planet: None },
                ReasonCode::R001_DETECTION_STARTED,
            ),

            (SessionState::Detecting, SessionEvent::IdentityResolved(Some(identity))) => (
                Session { state: SessionState::Detected, identity: Some(identity), planet: None },
                ReasonCode::R001_IDENTITY_DETECTED,
            ),

            (SessionState::Detecting, SessionEvent::IdentityResolved(None)) => {
                (Session::new(), ReasonCode::R001_IDENTITY_ABSENT)
            }

            (SessionState::Detected, SessionEvent::Generate) => match self.identity {
                Some(identity) => match generate_planet(identity) {
                    Ok(planet) => (
                        Session {
                            state: SessionState::Generated,
                            identity: Some(identity),
                            planet: Some(planet),
                        },
                        ReasonCode::R002_PLANET_GENERATED,
                    ),
                    Err(err) => {
                        tracing::warn!(code = err.code(), error = %err, "planet generation failed");
                        (self.clone(), ReasonCode::R002_GENERATION_FAILED)
                    }
                },
                None => (self.clone(), ReasonCode::R004_EVENT_IGNORED),
            },

            (SessionState::Generated, SessionEvent::Generate) => {
                (self.clone(), ReasonCode::R002_PLANET_UNCHANGED)
            }

            _ => (self.clone(), ReasonCode::R004_EVENT_IGNORED),
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Detected identity, if any
    pub fn identity(&self) -> Option<IdentityValue> {
        self.identity
    }

    /// Generated planet, if any
    pub fn planet(&self) -> Option<&Planet> {
        self.planet.as_ref()
    }
}

/// identity → DNA → traits, bundled with the layout version
pub fn generate_planet(identity: IdentityValue) -> Result<Planet, crate::types::DnaError> {
    let dna = DnaGenerator::new().generate(identity);
    let traits = TraitDecoder::new().decode(&dna)?;
    Ok(Planet::new(identity, dna, traits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: u64) -> IdentityValue {
        IdentityValue::new(v).unwrap()
    }

    fn detected(v: u64) -> Session {
        Session::new()
            .apply(SessionEvent::Detect)
            .session
            .apply(SessionEvent::IdentityResolved(Some(id(v))))
            .session
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(Session::new().state(), SessionState::Idle);
    }

    #[test]
    fn test_idle_to_detecting() {
        let t = Session::new().apply(SessionEvent::Detect);
        assert_eq!(t.session.state(), SessionState::Detecting);
        assert_eq!(t.output.reason, ReasonCode::R001_DETECTION_STARTED);
    }

    #[test]
    fn test_detecting_to_detected() {
        let session = detected(5);
        assert_eq!(session.state(), SessionState::Detected);
        assert_eq!(session.identity(), Some(id(5)));
        assert!(session.planet().is_none());
    }

    #[test]
    fn test_absent_identity_returns_to_idle() {
        let t = Session::new()
            .apply(SessionEvent::Detect)
            .session
            .apply(SessionEvent::IdentityResolved(None));
        assert_eq!(t.session.state(), SessionState::Idle);
        assert_eq!(t.output.reason, ReasonCode::R001_IDENTITY_ABSENT);
    }

    #[test]
    fn test_generate() {
        let t = detected(1).apply(SessionEvent::Generate);
        assert_eq!(t.session.state(), SessionState::Generated);
        assert_eq!(t.output.reason, ReasonCode::R002_PLANET_GENERATED);
        let planet = t.session.planet().unwrap();
        assert_eq!(planet.identity, id(1));
        assert_eq!(t.output.planet.as_ref(), Some(planet));
    }

    #[test]
    fn test_generate_again_is_unchanged() {
        let first = detected(9).apply(SessionEvent::Generate).session;
        let t = first.apply(SessionEvent::Generate);
        assert_eq!(t.output.reason, ReasonCode::R002_PLANET_UNCHANGED);
        assert_eq!(t.session, first);
    }

    #[test]
    fn test_generate_without_identity_ignored() {
        let t = Session::new().apply(SessionEvent::Generate);
        assert_eq!(t.session.state(), SessionState::Idle);
        assert_eq!(t.output.reason, ReasonCode::R004_EVENT_IGNORED);
        assert!(t.output.planet.is_none());
    }

    #[test]
    fn test_reset_from_any_state() {
        let generated = detected(3).apply(SessionEvent::Generate).session;
        for session in [Session::new(), detected(3), generated] {
            let t = session.apply(SessionEvent::Reset);
            assert_eq!(t.session, Session::new());
            assert_eq!(t.output.reason, ReasonCode::R003_SESSION_RESET);
        }
    }

    #[test]
    fn test_apply_does_not_mutate() {
        let before = detected(11);
        let copy = before.clone();
        let _ = before.apply(SessionEvent::Generate);
        assert_eq!(before, copy);
    }

    #[test]
    fn test_stray_identity_ignored() {
        let t = Session::new().apply(SessionEvent::IdentityResolved(Some(id(2))));
        assert_eq!(t.session.state(), SessionState::Idle);
        assert_eq!(t.output.reason, ReasonCode::R004_EVENT_IGNORED);
    }
}
