//! Integration test: weekly profession tasks across weeks and months

use chrono::{Datelike, NaiveDate, Weekday};
use twopiece::weekly_tasks::{monthly_task_exp, week_start_for, weekly_task_exp, WeeklyTaskProgress};
use twopiece::Character;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_caps() {
    assert_eq!(weekly_task_exp(0), 0);
    assert_eq!(weekly_task_exp(4), 20_000);
    assert_eq!(weekly_task_exp(10), 20_000);
    // Monthly figure shares the weekly ceiling
    assert_eq!(monthly_task_exp(16), 20_000);
}

#[test]
fn test_week_start_is_always_a_preceding_sunday() {
    let mut day = date(2026, 1, 1);
    while day.year() == 2026 {
        let start = week_start_for(day);
        assert_eq!(start.weekday(), Weekday::Sun);
        assert!(start <= day);
        assert!((day - start).num_days() < 7);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn test_a_month_of_tasks() {
    // October 2026: weeks start on the 4th, 11th, 18th and 25th
    let mut progress = WeeklyTaskProgress::starting(date(2026, 10, 4));
    let mut awarded = 0;

    for week_start in [4, 11, 18, 25] {
        for offset in 0..5 {
            awarded += progress.record_task(date(2026, 10, week_start + offset));
        }
        assert_eq!(progress.tasks_completed, 5);
        assert_eq!(progress.exp_earned_this_week, 20_000);
    }

    assert_eq!(awarded, 4 * 20_000);
    assert_eq!(progress.tasks_this_month, 20);
    assert_eq!(progress.exp_earned_this_month, 20_000);

    // First task in November starts a fresh month
    assert_eq!(progress.record_task(date(2026, 11, 2)), 5_000);
    assert_eq!(progress.tasks_this_month, 1);
    assert_eq!(progress.exp_earned_this_month, 5_000);
}

#[test]
fn test_skipped_weeks_still_roll_over() {
    let mut progress = WeeklyTaskProgress::starting(date(2026, 10, 4));
    progress.record_task(date(2026, 10, 5));
    assert!(progress.roll_over(date(2026, 10, 29)));
    assert_eq!(progress.current_week, date(2026, 10, 25));
    assert_eq!(progress.tasks_completed, 0);
    assert_eq!(progress.tasks_this_month, 1);
}

#[test]
fn test_character_levels_from_tasks() {
    let mut character = Character::new("10".to_string(), "Usopp".to_string(), "Sogeking".to_string());
    character.xp = 45_000;
    character.weekly_tasks = WeeklyTaskProgress::starting(date(2026, 10, 18));

    character.complete_weekly_task(date(2026, 10, 19));
    assert_eq!(character.xp, 50_000);
    assert_eq!(character.level, 2);
}
