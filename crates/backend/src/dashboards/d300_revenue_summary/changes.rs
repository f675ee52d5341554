use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use contracts::dashboards::d300_revenue_summary::{OrderRow, RevenueChanges};

use crate::shared::format::round2;

/// Compute WoW / MoM percentage deltas, the day-over-day absolute delta and
/// the 30-day run rate over the prepared window.
pub fn compute_revenue_changes(rows: &[OrderRow]) -> RevenueChanges {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        *daily.entry(row.day).or_insert(0.0) += row.net_sales;
    }

    let weekly = resample(&daily, week_end, |d| d + Duration::days(7));
    let monthly = resample(&daily, month_end, |d| month_end(d + Duration::days(1)));
    let daily_values: Vec<f64> = daily.values().copied().collect();

    let wow_pct = pct_change(&weekly);
    let run_rate = if daily_values.is_empty() {
        0.0
    } else {
        round2(daily_values.iter().sum::<f64>() / daily_values.len() as f64 * 30.0)
    };

    RevenueChanges {
        wow_pct,
        mom_pct: pct_change(&monthly),
        // Same weekly series on purpose: the source report wires the AOV
        // delta to the revenue WoW series.
        aov_wow: wow_pct,
        day_delta: abs_change(&daily_values),
        run_rate,
        latest_day: daily.keys().next_back().copied(),
    }
}

/// Sum the daily series into periods keyed by their last day, ascending.
/// Periods inside the span with no sales still appear with a zero sum.
fn resample(
    daily: &BTreeMap<NaiveDate, f64>,
    boundary: fn(NaiveDate) -> NaiveDate,
    advance: fn(NaiveDate) -> NaiveDate,
) -> Vec<f64> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for (day, net) in daily {
        *buckets.entry(boundary(*day)).or_insert(0.0) += net;
    }

    let (Some(first), Some(last)) = (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    let mut cursor = first;
    while cursor < last {
        cursor = advance(cursor);
        buckets.entry(cursor).or_insert(0.0);
    }

    buckets.into_values().collect()
}

/// The Sunday ending the week the day belongs to
fn week_end(day: NaiveDate) -> NaiveDate {
    let days_to_sunday = 6 - day.weekday().num_days_from_monday() as i64;
    day + Duration::days(days_to_sunday)
}

/// Last calendar day of the day's month
fn month_end(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_of_next| first_of_next - Duration::days(1))
        .unwrap_or(day)
}

/// Percent change between the two most recent periods; None when fewer than
/// two periods exist or the prior period is exactly zero.
fn pct_change(series: &[f64]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let prev = series[series.len() - 2];
    let curr = series[series.len() - 1];
    if prev == 0.0 {
        return None;
    }
    Some(round2((curr - prev) / prev * 100.0))
}

/// Absolute change between the two most recent values
fn abs_change(series: &[f64]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    Some(round2(series[series.len() - 1] - series[series.len() - 2]))
}
