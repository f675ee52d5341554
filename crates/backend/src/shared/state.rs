use std::sync::Arc;

use crate::shared::config::Config;
use crate::system::auth::{jwt, PasswordVerifier, SharedSecretVerifier};
use crate::system::tasks::{InMemorySendGate, SendGate};

/// Explicit state for the HTTP and scheduler boundaries: configuration plus
/// the injected password-verification and send-gate capabilities.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    jwt_secret: Arc<String>,
    verifier: Arc<dyn PasswordVerifier>,
    send_gate: Arc<dyn SendGate>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let verifier = SharedSecretVerifier::new(config.dashboard.password.clone());
        let jwt_secret = config
            .dashboard
            .jwt_secret
            .clone()
            .unwrap_or_else(jwt::generate_secret);

        Self::with_capabilities(
            config,
            jwt_secret,
            Arc::new(verifier),
            Arc::new(InMemorySendGate::default()),
        )
    }

    /// Assemble state from externally-provided capabilities
    pub fn with_capabilities(
        config: Config,
        jwt_secret: String,
        verifier: Arc<dyn PasswordVerifier>,
        send_gate: Arc<dyn SendGate>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            jwt_secret: Arc::new(jwt_secret),
            verifier,
            send_gate,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn verifier(&self) -> &dyn PasswordVerifier {
        self.verifier.as_ref()
    }

    pub fn send_gate(&self) -> &dyn SendGate {
        self.send_gate.as_ref()
    }
}
