//! Weekly profession tasks and their capped EXP awards.

use crate::constants::{EXP_PER_TASK, MAX_COUNTED_TASKS, MAX_MONTHLY_TASK_EXP};
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// EXP earned for the tasks completed in a week. Only 4 tasks count.
pub fn weekly_task_exp(tasks_completed: u32) -> u64 {
    tasks_completed.min(MAX_COUNTED_TASKS) as u64 * EXP_PER_TASK
}

/// EXP earned for the tasks completed in a month.
///
/// Uses the same 4-task ceiling as the weekly figure, so a month tops out at
/// 20,000 regardless of how many weeks it spans. Kept as observed in play.
pub fn monthly_task_exp(tasks_this_month: u32) -> u64 {
    tasks_this_month.min(MAX_COUNTED_TASKS) as u64 * EXP_PER_TASK
}

/// The Sunday on or before `date`.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    let days_since_sunday = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(days_since_sunday)
}

/// The Sunday starting the current week, by the local calendar.
pub fn current_week_start() -> NaiveDate {
    week_start_for(Local::now().date_naive())
}

/// Per-character weekly task counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTaskProgress {
    #[serde(default = "current_week_start")]
    pub current_week: NaiveDate,
    pub tasks_completed: u32,
    pub tasks_this_month: u32,
    pub exp_earned_this_week: u64,
    pub exp_earned_this_month: u64,
}

impl Default for WeeklyTaskProgress {
    fn default() -> Self {
        Self::starting(current_week_start())
    }
}

impl WeeklyTaskProgress {
    /// Empty counters for the week containing `date`.
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            current_week: week_start_for(date),
            tasks_completed: 0,
            tasks_this_month: 0,
            exp_earned_this_week: 0,
            exp_earned_this_month: 0,
        }
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.current_week == week_start_for(today)
    }

    /// Moves the counters forward to the week containing `today`.
    ///
    /// Weekly counters reset when a later week starts. Monthly counters
    /// reset only when the new week starts in a different calendar month
    /// than the stored one. Dates in the stored week or earlier leave the
    /// counters alone. Returns true if the week changed.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        let week = week_start_for(today);
        if week <= self.current_week {
            return false;
        }

        let new_month =
            (week.year(), week.month()) != (self.current_week.year(), self.current_week.month());

        tracing::debug!(
            from = %self.current_week,
            to = %week,
            new_month,
            "rolling weekly task progress"
        );

        self.current_week = week;
        self.tasks_completed = 0;
        self.exp_earned_this_week = 0;
        if new_month {
            self.tasks_this_month = 0;
            self.exp_earned_this_month = 0;
        }
        true
    }

    /// Records one completed task on `today` and returns the weekly EXP it
    /// awarded, which is 0 once the weekly cap has been reached.
    pub fn record_task(&mut self, today: NaiveDate) -> u64 {
        self.roll_over(today);

        let before = self.exp_earned_this_week;
        self.tasks_completed = self.tasks_completed.saturating_add(1);
        self.tasks_this_month = self.tasks_this_month.saturating_add(1);
        self.exp_earned_this_week = weekly_task_exp(self.tasks_completed);
        self.exp_earned_this_month = monthly_task_exp(self.tasks_this_month);

        self.exp_earned_this_week.saturating_sub(before)
    }

    /// Tasks still worth EXP this week.
    pub fn remaining_this_week(&self) -> u32 {
        MAX_COUNTED_TASKS.saturating_sub(self.tasks_completed)
    }

    pub fn weekly_progress_percent(&self) -> f64 {
        (self.tasks_completed as f64 / MAX_COUNTED_TASKS as f64 * 100.0).min(100.0)
    }

    pub fn monthly_progress_percent(&self) -> f64 {
        (self.exp_earned_this_month as f64 / MAX_MONTHLY_TASK_EXP as f64 * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_cap() {
        assert_eq!(weekly_task_exp(0), 0);
        assert_eq!(weekly_task_exp(1), 5_000);
        assert_eq!(weekly_task_exp(4), 20_000);
        assert_eq!(weekly_task_exp(10), 20_000);
    }

    #[test]
    fn test_monthly_cap_matches_weekly() {
        assert_eq!(monthly_task_exp(3), 15_000);
        assert_eq!(monthly_task_exp(16), 20_000);
        for n in 0..20 {
            assert_eq!(monthly_task_exp(n), weekly_task_exp(n));
        }
    }

    #[test]
    fn test_week_start_for() {
        // 2026-10-18 is a Sunday
        assert_eq!(week_start_for(date(2026, 10, 18)), date(2026, 10, 18));
        assert_eq!(week_start_for(date(2026, 10, 24)), date(2026, 10, 18));
        assert_eq!(week_start_for(date(2026, 10, 17)), date(2026, 10, 11));
        // Crosses a month boundary
        assert_eq!(week_start_for(date(2026, 10, 1)), date(2026, 9, 27));
    }

    #[test]
    fn test_current_week_start_is_sunday() {
        let start = current_week_start();
        assert_eq!(start.weekday(), chrono::Weekday::Sun);
        assert!(start <= Local::now().date_naive());
    }

    #[test]
    fn test_record_task_awards_until_cap() {
        let today = date(2026, 10, 20);
        let mut progress = WeeklyTaskProgress::starting(today);

        for _ in 0..4 {
            assert_eq!(progress.record_task(today), 5_000);
        }
        assert_eq!(progress.record_task(today), 0);
        assert_eq!(progress.tasks_completed, 5);
        assert_eq!(progress.exp_earned_this_week, 20_000);
        assert_eq!(progress.remaining_this_week(), 0);
        assert_eq!(progress.weekly_progress_percent(), 100.0);
        assert_eq!(progress.monthly_progress_percent(), 100.0);
    }

    #[test]
    fn test_roll_over_same_week_is_noop() {
        let mut progress = WeeklyTaskProgress::starting(date(2026, 10, 18));
        progress.record_task(date(2026, 10, 18));
        assert!(!progress.roll_over(date(2026, 10, 24)));
        assert_eq!(progress.tasks_completed, 1);
    }

    #[test]
    fn test_earlier_date_does_not_reset_week() {
        let mut progress = WeeklyTaskProgress::starting(date(2026, 10, 18));
        let mut awarded = 0;
        for _ in 0..4 {
            awarded += progress.record_task(date(2026, 10, 19));
        }

        assert!(!progress.roll_over(date(2026, 10, 17)));
        assert_eq!(progress.record_task(date(2026, 10, 17)), 0);
        assert_eq!(progress.current_week, date(2026, 10, 18));
        assert_eq!(progress.tasks_completed, 5);
        assert_eq!(progress.exp_earned_this_week, 20_000);

        awarded += progress.record_task(date(2026, 10, 19));
        assert_eq!(awarded, 20_000);
        assert_eq!(progress.tasks_completed, 6);
        assert_eq!(progress.tasks_this_month, 6);
    }

    #[test]
    fn test_roll_over_keeps_month_within_month() {
        let mut progress = WeeklyTaskProgress::starting(date(2026, 10, 4));
        progress.record_task(date(2026, 10, 5));
        progress.record_task(date(2026, 10, 6));

        assert!(progress.roll_over(date(2026, 10, 12)));
        assert_eq!(progress.current_week, date(2026, 10, 11));
        assert_eq!(progress.tasks_completed, 0);
        assert_eq!(progress.exp_earned_this_week, 0);
        assert_eq!(progress.tasks_this_month, 2);
        assert_eq!(progress.exp_earned_this_month, 10_000);
        assert_eq!(progress.monthly_progress_percent(), 50.0);
    }

    #[test]
    fn test_roll_over_resets_month() {
        let mut progress = WeeklyTaskProgress::starting(date(2026, 10, 25));
        progress.record_task(date(2026, 10, 26));
        assert!(progress.roll_over(date(2026, 11, 2)));
        assert_eq!(progress.tasks_this_month, 0);
        assert_eq!(progress.exp_earned_this_month, 0);
    }

    #[test]
    fn test_deserialize_without_week_uses_current() {
        let json = r#"{"tasksCompleted":3,"tasksThisMonth":12,"expEarnedThisWeek":15000,"expEarnedThisMonth":20000}"#;
        let progress: WeeklyTaskProgress = serde_json::from_str(json).unwrap();
        assert_eq!(progress.current_week, current_week_start());
        assert_eq!(progress.tasks_this_month, 12);
    }

    #[test]
    fn test_serialize_week_as_iso_date() {
        let progress = WeeklyTaskProgress::starting(date(2026, 10, 21));
        let json = serde_json::to_string(&progress).unwrap();
        assert!(json.contains("\"currentWeek\":\"2026-10-18\""));
    }
}
