//! Where the fid comes from
//!
//! Detection is the only suspension point before the core runs. Everything
//! after it is synchronous.

use std::future::Future;

use crate::core::session::{Session, SessionEvent, Transition};
use crate::types::IdentityValue;

/// Provider of the current session's identity. `None` means "not yet".
pub trait IdentitySource {
    fn identity(&self) -> impl Future<Output = Option<IdentityValue>> + Send;
}

/// Identity known up front (CLI flag, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIdentity(pub Option<IdentityValue>);

impl IdentitySource for FixedIdentity {
    async fn identity(&self) -> Option<IdentityValue> {
        self.0
    }
}

/// Identity read from an environment variable at detection time
#[derive(Debug, Clone)]
pub struct EnvIdentity {
    var: String,
}

impl EnvIdentity {
    /// Default variable name
    pub const DEFAULT_VAR: &'static str = "ZETA_FID";

    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvIdentity {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

impl IdentitySource for EnvIdentity {
    async fn identity(&self) -> Option<IdentityValue> {
        let raw = std::env::var(&self.var).ok()?;
        match raw.parse::<IdentityValue>() {
            Ok(identity) => Some(identity),
            Err(err) => {
                tracing::warn!(var = %self.var, code = err.code(), "ignoring invalid identity");
                None
            }
        }
    }
}

/// Detect → await source → resolve. Returns the final transition.
pub async fn detect<S: IdentitySource>(session: &Session, source: &S) -> Transition {
    let detecting = session.apply(SessionEvent::Detect).session;
    let identity = source.identity().await;
    detecting.apply(SessionEvent::IdentityResolved(identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReasonCode, SessionState};

    #[tokio::test]
    async fn test_fixed_identity_detected() {
        let source = FixedIdentity(Some(IdentityValue::new(77).unwrap()));
        let t = detect(&Session::new(), &source).await;
        assert_eq!(t.session.state(), SessionState::Detected);
        assert_eq!(t.session.identity().map(|v| v.get()), Some(77));
    }

    #[tokio::test]
    async fn test_missing_identity_stays_idle() {
        let t = detect(&Session::new(), &FixedIdentity(None)).await;
        assert_eq!(t.session.state(), SessionState::Idle);
        assert_eq!(t.output.reason, ReasonCode::R001_IDENTITY_ABSENT);
    }

    #[tokio::test]
    async fn test_env_identity() {
        std::env::set_var("ZETA_TEST_FID_OK", "12345");
        let source = EnvIdentity::new("ZETA_TEST_FID_OK");
        assert_eq!(source.identity().await.map(|v| v.get()), Some(12345));
    }

    #[tokio::test]
    async fn test_env_identity_invalid_is_absent() {
        std::env::set_var("ZETA_TEST_FID_BAD", "-4");
        assert!(EnvIdentity::new("ZETA_TEST_FID_BAD").identity().await.is_none());
        assert!(EnvIdentity::new("ZETA_TEST_FID_UNSET").identity().await.is_none());
    }

    #[tokio::test]
    async fn test_detect_from_non_idle_is_ignored() {
        let source = FixedIdentity(Some(IdentityValue::new(1).unwrap()));
        let detected = detect(&Session::new(), &source).await.session;
        let again = detect(&detected, &source).await;
        // Detect is ignored outside IDLE, so the stray resolution is too
        assert_eq!(again.session, detected);
        assert_eq!(again.output.reason, ReasonCode::R004_EVENT_IGNORED);
    }
}
