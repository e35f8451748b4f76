use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Settings, WaterEntry};
use crate::stats::DailyBucket;

#[derive(Debug, Serialize)]
pub struct WaterEntryResponse {
    pub id: i64,
    pub amount: i64,
    pub timestamp: i64,
}

impl From<WaterEntry> for WaterEntryResponse {
    fn from(entry: WaterEntry) -> Self {
        Self {
            id: entry.id.unwrap_or(0),
            amount: entry.amount,
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub daily_goal: i64,
    pub notifications_enabled: bool,
    pub notification_start: String,
    pub notification_end: String,
    pub notification_interval: u32,
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            daily_goal: settings.daily_goal,
            notifications_enabled: settings.notifications_enabled,
            notification_start: settings.notification_start,
            notification_end: settings.notification_end,
            notification_interval: settings.notification_interval,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub total: i64,
    pub goal: i64,
    /// Fraction of the goal reached, clamped to 1.0.
    pub progress: f64,
    pub remaining: i64,
    pub goal_reached: bool,
}

#[derive(Debug, Serialize)]
pub struct DailyBucketResponse {
    pub date: NaiveDate,
    pub amount: i64,
}

impl From<DailyBucket> for DailyBucketResponse {
    fn from(bucket: DailyBucket) -> Self {
        Self {
            date: bucket.date,
            amount: bucket.amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    /// Dense per-day series for the selected period, oldest first.
    pub daily: Vec<DailyBucketResponse>,
    pub today_total: i64,
    pub today_progress: f64,
    pub average: f64,
    pub best: i64,
    pub goal_achievement_rate: f64,
}
