//! Pure aggregation over water entries.
//!
//! Every function takes the clock as an explicit argument so results are
//! reproducible; day boundaries come from the timezone of the supplied
//! `now`.

use std::collections::HashMap;

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::WaterEntry;

/// One calendar day's total intake. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub amount: i64,
}

/// Trailing window selectable on the trends screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    Week,
    Month,
}

impl StatsPeriod {
    pub fn days(self) -> usize {
        match self {
            StatsPeriod::Week => 7,
            StatsPeriod::Month => 30,
        }
    }
}

fn entry_date<Tz: TimeZone>(entry: &WaterEntry, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(entry.timestamp, 0).map(|utc| utc.with_timezone(tz).date_naive())
}

/// Sum of amounts logged on `now`'s calendar day. Entry order is
/// irrelevant; no entries means 0.
pub fn today_total<Tz: TimeZone>(entries: &[WaterEntry], now: &DateTime<Tz>) -> i64 {
    let tz = now.timezone();
    let today = now.date_naive();

    entries
        .iter()
        .filter(|e| entry_date(e, &tz) == Some(today))
        .map(|e| e.amount)
        .sum()
}

/// Fraction of the goal reached, clamped to 1.0. A non-positive goal is
/// rejected rather than divided by.
pub fn progress_fraction(total: i64, goal: i64) -> Result<f64, AppError> {
    if goal <= 0 {
        return Err(AppError::NonPositiveGoal(goal));
    }
    Ok((total as f64 / goal as f64).min(1.0))
}

/// Ounces still needed to reach the goal, never negative.
pub fn remaining(total: i64, goal: i64) -> i64 {
    (goal - total).max(0)
}

/// Per-day totals for the trailing window ending on `now`'s calendar day,
/// oldest first. Always exactly `window_days` buckets; days with no
/// entries appear with amount 0.
pub fn daily_series<Tz: TimeZone>(
    entries: &[WaterEntry],
    window_days: usize,
    now: &DateTime<Tz>,
) -> Vec<DailyBucket> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut by_day: HashMap<NaiveDate, i64> = HashMap::new();
    for entry in entries {
        if let Some(date) = entry_date(entry, &tz) {
            *by_day.entry(date).or_insert(0) += entry.amount;
        }
    }

    (0..window_days)
        .rev()
        .map(|offset| {
            let date = today - Days::new(offset as u64);
            DailyBucket {
                date,
                amount: by_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Arithmetic mean of bucket amounts; 0 for an empty series.
pub fn average(series: &[DailyBucket]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let total: i64 = series.iter().map(|b| b.amount).sum();
    total as f64 / series.len() as f64
}

/// Largest bucket amount; 0 for an empty series.
pub fn best(series: &[DailyBucket]) -> i64 {
    series.iter().map(|b| b.amount).max().unwrap_or(0)
}

/// Percentage of buckets that met the goal, in [0, 100].
pub fn goal_achievement_rate(series: &[DailyBucket], goal: i64) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let met = series.iter().filter(|b| b.amount >= goal).count();
    met as f64 / series.len() as f64 * 100.0
}
