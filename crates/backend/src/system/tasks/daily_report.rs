use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use contracts::system::email::SendStatus;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::dashboards::d300_revenue_summary::service;
use crate::email::{report, smtp::SmtpMailer, EmailError};
use crate::shared::state::AppState;

/// Background worker that delivers the daily revenue report.
///
/// Each tick checks the configured cron schedule and the send gate; the gate
/// guarantees at most one delivery per calendar day per process lifetime.
pub struct DailyReportWorker {
    state: AppState,
    interval_seconds: u64,
}

impl DailyReportWorker {
    pub fn new(state: AppState, interval_seconds: u64) -> Self {
        Self {
            state,
            interval_seconds,
        }
    }

    pub async fn run_loop(&self) {
        info!(
            "Daily report worker started with interval {} seconds (schedule '{}')",
            self.interval_seconds,
            self.state.config().report.schedule
        );
        let mut interval = time::interval(time::Duration::from_secs(self.interval_seconds));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            if let Err(e) = self.tick(Local::now()).await {
                error!("Daily report tick failed: {:?}", e);
            }
        }
    }

    async fn tick(&self, now: DateTime<Local>) -> Result<()> {
        let today = now.date_naive();
        if self.state.send_gate().already_sent(today) {
            return Ok(());
        }
        if !schedule_due(&self.state.config().report.schedule, now)? {
            return Ok(());
        }

        match send_daily_report(&self.state).await? {
            SendStatus::Sent => info!("Scheduled daily report delivered"),
            SendStatus::AlreadySentToday => {}
        }
        Ok(())
    }
}

/// Whether today's scheduled send time has already passed
fn schedule_due(expression: &str, now: DateTime<Local>) -> Result<bool> {
    let schedule = cron::Schedule::from_str(expression)
        .with_context(|| format!("invalid report schedule '{expression}'"))?;

    let Some(midnight) = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|t| t.and_local_timezone(Local).single())
    else {
        return Ok(false);
    };

    match schedule.after(&midnight).next() {
        Some(due) => Ok(due.date_naive() == now.date_naive() && due <= now),
        None => Ok(false),
    }
}

/// Build and send the daily revenue email through the send gate.
///
/// Missing configuration is fatal for this path; transport failures
/// propagate to the caller untouched. No retries.
pub async fn send_daily_report(state: &AppState) -> Result<SendStatus> {
    let today = Local::now().date_naive();
    if state.send_gate().already_sent(today) {
        info!("Daily report already sent today, skipping");
        return Ok(SendStatus::AlreadySentToday);
    }

    let config = state.config();
    let dashboard_url = config
        .email
        .dashboard_url
        .clone()
        .ok_or(EmailError::MissingConfiguration("DASHBOARD_URL"))?;

    let mailer = SmtpMailer::from_config(&config.email)?;

    let summary =
        service::get_revenue_summary(config).context("building the daily revenue summary")?;
    let message = report::build_report(
        &summary.metrics,
        &summary.changes,
        &summary.signals,
        &dashboard_url,
    );

    mailer.send(&message).await?;
    state.send_gate().mark_sent(today);
    info!(
        "Daily revenue email sent to {} recipient(s)",
        mailer.recipient_count()
    );

    Ok(SendStatus::Sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(s: &str) -> DateTime<Local> {
        let naive = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        Local.from_local_datetime(&naive).unwrap()
    }

    #[test]
    fn schedule_not_due_before_send_time() {
        assert!(!schedule_due("0 0 8 * * *", local("2025-06-01 07:59:00")).unwrap());
    }

    #[test]
    fn schedule_due_after_send_time() {
        assert!(schedule_due("0 0 8 * * *", local("2025-06-01 08:00:00")).unwrap());
        assert!(schedule_due("0 0 8 * * *", local("2025-06-01 23:00:00")).unwrap());
    }

    #[test]
    fn invalid_schedule_is_an_error() {
        assert!(schedule_due("not a schedule", local("2025-06-01 08:00:00")).is_err());
    }
}
