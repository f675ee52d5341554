pub mod daily_report;

use std::sync::Mutex;

use chrono::NaiveDate;

/// Gate limiting the daily report to one delivery per calendar day.
///
/// Injected into the send path so the "already sent today" decision is
/// explicit state rather than a hidden process global.
pub trait SendGate: Send + Sync {
    fn already_sent(&self, day: NaiveDate) -> bool;
    fn mark_sent(&self, day: NaiveDate);
}

/// Process-lifetime gate; resets when the process restarts
#[derive(Default)]
pub struct InMemorySendGate {
    last_sent: Mutex<Option<NaiveDate>>,
}

impl SendGate for InMemorySendGate {
    fn already_sent(&self, day: NaiveDate) -> bool {
        match self.last_sent.lock() {
            Ok(last_sent) => *last_sent == Some(day),
            Err(_) => false,
        }
    }

    fn mark_sent(&self, day: NaiveDate) {
        if let Ok(mut last_sent) = self.last_sent.lock() {
            *last_sent = Some(day);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn gate_allows_one_send_per_day() {
        let gate = InMemorySendGate::default();
        let today = day("2025-06-01");

        assert!(!gate.already_sent(today));
        gate.mark_sent(today);
        assert!(gate.already_sent(today));

        // A new calendar day opens the gate again
        assert!(!gate.already_sent(day("2025-06-02")));
    }
}
