pub mod report;
pub mod smtp;

use thiserror::Error;

/// Errors from the email boundary. Configuration problems are fatal for the
/// email path; transport failures propagate to the caller untouched.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("missing required email configuration: {0}")]
    MissingConfiguration(&'static str),

    #[error("invalid mail address: {0}")]
    Address(String),

    #[error("smtp transport error: {0}")]
    Transport(String),
}

/// A fully-resolved outbound message
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub subject: String,
    pub body_text: String,
}
