use std::sync::{Arc, Mutex};

use chrono::Local;

use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::{Settings, WaterEntry};
use crate::stats::{
    average, best, daily_series, goal_achievement_rate, progress_fraction, remaining, today_total,
    StatsPeriod,
};

use super::{DailyBucketResponse, TodayResponse, TrendsResponse};

/// State for the main screen: today's total against the goal.
pub fn get_today_view(db: &Arc<Mutex<Database>>) -> Result<TodayResponse, AppError> {
    let (entries, settings) = load_store(db)?;

    let now = Local::now();
    let total = today_total(&entries, &now);
    let progress = progress_fraction(total, settings.daily_goal)?;
    let left = remaining(total, settings.daily_goal);

    Ok(TodayResponse {
        total,
        goal: settings.daily_goal,
        progress,
        remaining: left,
        goal_reached: left == 0,
    })
}

/// State for the trends screen over the selected trailing window.
pub fn get_trends_view(
    db: &Arc<Mutex<Database>>,
    period: StatsPeriod,
) -> Result<TrendsResponse, AppError> {
    let (entries, settings) = load_store(db)?;

    let now = Local::now();
    let series = daily_series(&entries, period.days(), &now);
    let total = today_total(&entries, &now);

    Ok(TrendsResponse {
        today_total: total,
        today_progress: progress_fraction(total, settings.daily_goal)?,
        average: average(&series),
        best: best(&series),
        goal_achievement_rate: goal_achievement_rate(&series, settings.daily_goal),
        daily: series.into_iter().map(DailyBucketResponse::from).collect(),
    })
}

fn load_store(db: &Arc<Mutex<Database>>) -> Result<(Vec<WaterEntry>, Settings), AppError> {
    with_connection(db, "load statistics", |conn| {
        Ok((
            WaterEntry::find_all(conn)?,
            Settings::get_or_create(conn)?,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use tempfile::TempDir;

    fn setup() -> (Arc<Mutex<Database>>, TempDir) {
        let (db, dir) = setup_test_db();
        (Arc::new(Mutex::new(db)), dir)
    }

    fn log_now(db: &Arc<Mutex<Database>>, amount: i64, hours_ago: i64) {
        let db = db.lock().unwrap();
        let timestamp = Local::now().timestamp() - hours_ago * 3600;
        let mut entry = WaterEntry::with_timestamp(amount, timestamp);
        entry.save(db.connection()).unwrap();
    }

    #[test]
    fn test_today_view_empty_store() {
        let (db, _dir) = setup();

        let view = get_today_view(&db).unwrap();
        assert_eq!(view.total, 0);
        assert_eq!(view.goal, 100);
        assert_eq!(view.progress, 0.0);
        assert_eq!(view.remaining, 100);
        assert!(!view.goal_reached);
    }

    #[test]
    fn test_today_view_counts_only_recent_day() {
        let (db, _dir) = setup();

        log_now(&db, 8, 0);
        log_now(&db, 16, 0);
        log_now(&db, 40, 24 * 8); // over a week old

        let view = get_today_view(&db).unwrap();
        assert_eq!(view.total, 24);
        assert_eq!(view.remaining, 76);
    }

    #[test]
    fn test_today_view_goal_reached() {
        let (db, _dir) = setup();

        log_now(&db, 40, 0);
        log_now(&db, 40, 0);
        log_now(&db, 40, 0);

        let view = get_today_view(&db).unwrap();
        assert_eq!(view.total, 120);
        assert_eq!(view.progress, 1.0);
        assert_eq!(view.remaining, 0);
        assert!(view.goal_reached);
    }

    #[test]
    fn test_trends_view_week_has_seven_buckets() {
        let (db, _dir) = setup();

        log_now(&db, 24, 0);

        let view = get_trends_view(&db, StatsPeriod::Week).unwrap();
        assert_eq!(view.daily.len(), 7);
        assert_eq!(view.daily.last().unwrap().amount, 24);
        assert_eq!(view.best, 24);
        assert!(view.average > 0.0);
    }

    #[test]
    fn test_trends_view_month_has_thirty_buckets() {
        let (db, _dir) = setup();

        let view = get_trends_view(&db, StatsPeriod::Month).unwrap();
        assert_eq!(view.daily.len(), 30);
        assert_eq!(view.best, 0);
        assert_eq!(view.average, 0.0);
        assert_eq!(view.goal_achievement_rate, 0.0);
    }
}
