use serde::{Deserialize, Serialize};

/// Outcome of a manual or scheduled daily-report send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendStatus {
    Sent,
    /// The send gate already recorded a delivery for today
    AlreadySentToday,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendDailyResponse {
    pub status: SendStatus,
}
