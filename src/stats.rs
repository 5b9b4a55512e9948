use crate::calendar::{self, is_consecutive_day, parse_date};
use crate::entries::has_entry;
use crate::models::{Entries, Habit, MetricType, StatId};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSnapshot {
    pub streak: u32,
    pub longest_streak: u32,
    pub average: f64,
    pub standard_deviation: f64,
    pub total: f64,
    pub number_of_days: u32,
}

impl StatSnapshot {
    pub fn get(&self, id: StatId) -> f64 {
        match id {
            StatId::Streak => f64::from(self.streak),
            StatId::LongestStreak => f64::from(self.longest_streak),
            StatId::Average => self.average,
            StatId::StandardDeviation => self.standard_deviation,
            StatId::Total => self.total,
            StatId::NumberOfDays => f64::from(self.number_of_days),
        }
    }
}

/// One selected statistic, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatDisplay {
    pub id: StatId,
    pub label: &'static str,
    pub value: String,
}

pub fn compute_stats(habit: &Habit) -> StatSnapshot {
    compute_stats_at(calendar::today(), &habit.entries)
}

pub fn compute_stats_at(today: NaiveDate, entries: &Entries) -> StatSnapshot {
    let values: Vec<f64> = entries.values().copied().filter(|v| *v > 0.0).collect();
    if values.is_empty() {
        return StatSnapshot::default();
    }

    let count = values.len() as f64;
    let total: f64 = values.iter().sum();
    let average = total / count;
    let variance = values
        .iter()
        .map(|v| (v - average) * (v - average))
        .sum::<f64>()
        / count;

    StatSnapshot {
        streak: current_streak(today, entries),
        longest_streak: longest_streak(entries),
        average,
        standard_deviation: variance.sqrt(),
        total,
        number_of_days: values.len() as u32,
    }
}

/// Consecutive days with an entry ending today. Zero when today itself has
/// no entry, even if yesterday does.
pub fn current_streak(today: NaiveDate, entries: &Entries) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while has_entry(entries, &calendar::format_date(day)) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

pub fn longest_streak(entries: &Entries) -> u32 {
    // Valid `YYYY-MM-DD` keys sort chronologically in the map.
    let dates = entries
        .iter()
        .filter(|(key, value)| **value > 0.0 && parse_date(key).is_some())
        .map(|(key, _)| key.as_str());

    let mut longest = 0;
    let mut running = 0;
    let mut previous: Option<&str> = None;
    for date in dates {
        running = match previous {
            Some(prev) if is_consecutive_day(prev, date) => running + 1,
            _ => 1,
        };
        longest = longest.max(running);
        previous = Some(date);
    }
    longest
}

/// Display string for a statistic. Counts are whole numbers; other values
/// keep one decimal below 10 unless the habit is a plain yes/no habit.
pub fn format_stat_value(value: f64, metric: MetricType, stat: StatId) -> String {
    if stat.is_count() || metric == MetricType::None || value >= 10.0 {
        return (value.round() as i64).to_string();
    }
    one_decimal(value)
}

/// One decimal place, with exact ties rounded up. Values are never negative,
/// and the only exact ties at one decimal are multiples of 0.25.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (value * 10.0).ceil() as i64;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{value:.1}")
}

/// Formatted statistics for the habit's selected ids, in selection order.
pub fn display_stats(habit: &Habit, snapshot: &StatSnapshot) -> Vec<StatDisplay> {
    habit
        .selected_stats
        .iter()
        .map(|&id| StatDisplay {
            id,
            label: id.info().label,
            value: format_stat_value(snapshot.get(id), habit.metric.kind, id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn entries(pairs: &[(&str, f64)]) -> Entries {
        pairs
            .iter()
            .map(|(date, value)| (date.to_string(), *value))
            .collect()
    }

    #[test]
    fn empty_entries_give_zero_snapshot() {
        let stats = compute_stats_at(ymd(2024, 6, 10), &Entries::new());
        assert_eq!(stats, StatSnapshot::default());
    }

    #[test]
    fn standard_deviation_is_population() {
        let data = entries(&[("2024-01-01", 1.0), ("2024-01-05", 2.0), ("2024-01-09", 3.0)]);
        let stats = compute_stats_at(ymd(2024, 6, 10), &data);
        assert_eq!(stats.total, 6.0);
        assert_eq!(stats.number_of_days, 3);
        assert!((stats.average - 2.0).abs() < 1e-12);
        assert!((stats.standard_deviation - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((stats.standard_deviation - 0.8165).abs() < 1e-4);
    }

    #[test]
    fn non_positive_values_are_ignored() {
        let data = entries(&[("2024-06-09", 0.0), ("2024-06-10", 4.0), ("2024-06-11", -2.0)]);
        let stats = compute_stats_at(ymd(2024, 6, 10), &data);
        assert_eq!(stats.number_of_days, 1);
        assert_eq!(stats.total, 4.0);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn longest_streak_skips_gaps() {
        let data = entries(&[
            ("2024-01-01", 1.0),
            ("2024-01-02", 1.0),
            ("2024-01-03", 1.0),
            ("2024-01-05", 1.0),
        ]);
        assert_eq!(longest_streak(&data), 3);
    }

    #[test]
    fn longest_streak_crosses_year_boundary() {
        let data = entries(&[("2023-12-30", 1.0), ("2023-12-31", 2.0), ("2024-01-01", 3.0)]);
        assert_eq!(longest_streak(&data), 3);
    }

    #[test]
    fn isolated_entry_is_a_streak_of_one() {
        let data = entries(&[("2024-01-01", 1.0), ("2024-03-01", 1.0)]);
        assert_eq!(longest_streak(&data), 1);
    }

    #[test]
    fn current_streak_includes_today() {
        let data = entries(&[("2024-06-08", 1.0), ("2024-06-09", 1.0), ("2024-06-10", 1.0)]);
        assert_eq!(current_streak(ymd(2024, 6, 10), &data), 3);
    }

    #[test]
    fn current_streak_is_zero_without_today() {
        let data = entries(&[("2024-06-08", 1.0), ("2024-06-09", 1.0)]);
        assert_eq!(current_streak(ymd(2024, 6, 10), &data), 0);
    }

    #[test]
    fn current_streak_stops_at_first_gap() {
        let data = entries(&[("2024-06-06", 1.0), ("2024-06-07", 1.0), ("2024-06-09", 1.0), ("2024-06-10", 1.0)]);
        let stats = compute_stats_at(ymd(2024, 6, 10), &data);
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.longest_streak, 2);
    }

    #[test]
    fn compute_stats_does_not_touch_entries() {
        let data = entries(&[("2024-06-10", 2.0), ("2024-06-11", 0.0)]);
        let before = data.clone();
        compute_stats_at(ymd(2024, 6, 10), &data);
        assert_eq!(data, before);
    }

    #[test]
    fn formats_measured_values() {
        assert_eq!(format_stat_value(7.89, MetricType::Minutes, StatId::Average), "7.9");
        assert_eq!(format_stat_value(15.2, MetricType::Minutes, StatId::Average), "15");
        assert_eq!(format_stat_value(7.0, MetricType::Hours, StatId::Total), "7.0");
        assert_eq!(format_stat_value(9.96, MetricType::Steps, StatId::StandardDeviation), "10.0");
    }

    #[test]
    fn one_decimal_ties_round_up() {
        assert_eq!(format_stat_value(1.25, MetricType::Minutes, StatId::Average), "1.3");
        assert_eq!(format_stat_value(0.25, MetricType::Minutes, StatId::Average), "0.3");
        assert_eq!(format_stat_value(0.75, MetricType::Hours, StatId::Average), "0.8");
        assert_eq!(format_stat_value(9.75, MetricType::Pages, StatId::Average), "9.8");
        assert_eq!(format_stat_value(1.15, MetricType::Minutes, StatId::Average), "1.1");
    }

    #[test]
    fn integers_round_to_nearest() {
        assert_eq!(format_stat_value(0.49999999999999994, MetricType::None, StatId::Average), "0");
        assert_eq!(format_stat_value(12.5, MetricType::Kilometers, StatId::Total), "13");
        assert_eq!(format_stat_value(10.49, MetricType::Minutes, StatId::Total), "10");
    }

    #[test]
    fn formats_yes_no_and_counts_as_integers() {
        assert_eq!(format_stat_value(4.0, MetricType::None, StatId::Total), "4");
        assert_eq!(format_stat_value(0.5, MetricType::None, StatId::Average), "1");
        assert_eq!(format_stat_value(3.0, MetricType::Minutes, StatId::Streak), "3");
        assert_eq!(format_stat_value(2.0, MetricType::Pages, StatId::NumberOfDays), "2");
    }

    #[test]
    fn display_follows_selection_order() {
        let mut habit = Habit {
            id: "h".to_string(),
            name: "Run".to_string(),
            metric: MetricType::Kilometers.into(),
            color: Default::default(),
            selected_stats: vec![StatId::Total, StatId::Streak],
            start_day: Default::default(),
            privacy: Default::default(),
            entries: Entries::new(),
        };
        habit.entries.insert("2024-06-10".to_string(), 12.5);
        let snapshot = compute_stats_at(ymd(2024, 6, 10), &habit.entries);

        let shown = display_stats(&habit, &snapshot);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].label, "Total");
        assert_eq!(shown[0].value, "13");
        assert_eq!(shown[1].label, "Streak");
        assert_eq!(shown[1].value, "1");
    }
}
