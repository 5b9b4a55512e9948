use crate::calendar::{format_display_date, parse_date};
use crate::models::{Entries, Habit, MetricType};

/// The only write path into a habit's entries: positive values are stored,
/// anything else removes the day.
pub fn set_entry(entries: &mut Entries, date: &str, value: f64) {
    if value > 0.0 && value.is_finite() {
        entries.insert(date.to_string(), value);
    } else {
        entries.remove(date);
    }
}

/// Recorded value for a day, if positive.
pub fn entry_value(entries: &Entries, date: &str) -> Option<f64> {
    entries.get(date).copied().filter(|value| *value > 0.0)
}

pub fn has_entry(entries: &Entries, date: &str) -> bool {
    entry_value(entries, date).is_some()
}

/// Hover text for one heatmap cell, e.g. `Mon, Jun 10: 3.5 minutes`.
pub fn describe_entry(habit: &Habit, date: &str) -> String {
    let label = parse_date(date).map_or_else(|| date.to_string(), format_display_date);
    match entry_value(&habit.entries, date) {
        None => format!("{label}: No entry"),
        Some(_) if habit.metric.kind == MetricType::None => format!("{label}: Completed"),
        Some(value) => {
            let info = habit.metric.kind.info();
            let unit = if value == 1.0 { info.unit } else { info.plural };
            format!("{label}: {value} {unit}")
        }
    }
}
