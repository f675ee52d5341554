pub mod jwt;
pub mod middleware;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("dashboard password is not configured (set {0})")]
    MissingConfiguration(&'static str),
}

/// Capability for checking the dashboard access password.
///
/// Injected into the login boundary so access control carries no implicit
/// process-wide session state.
pub trait PasswordVerifier: Send + Sync {
    /// Ok(true) when the candidate matches the configured secret;
    /// Err when no secret is configured at all.
    fn verify(&self, candidate: &str) -> Result<bool, AuthError>;
}

/// Compares candidates against the single configured shared secret
pub struct SharedSecretVerifier {
    secret: Option<String>,
}

impl SharedSecretVerifier {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }
}

impl PasswordVerifier for SharedSecretVerifier {
    fn verify(&self, candidate: &str) -> Result<bool, AuthError> {
        match &self.secret {
            Some(secret) => Ok(secret == candidate),
            None => Err(AuthError::MissingConfiguration("DASHBOARD_PASSWORD")),
        }
    }
}
