use chrono::{Datelike, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The current calendar date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a calendar date as `YYYY-MM-DD`.
///
/// Works on the date components directly, so a local date near midnight
/// never shifts to the neighbouring UTC day.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Whole calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// True when the two `YYYY-MM-DD` dates are exactly one calendar day apart,
/// in either order.
pub fn is_consecutive_day(a: &str, b: &str) -> bool {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => days_between(a, b).abs() == 1,
        _ => false,
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map_or(0, |next| days_between(first, next) as u32)
}

/// Weekday of the first day of the month, 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map_or(0, |first| first.weekday().num_days_from_sunday())
}

pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Short human label used in tooltips, e.g. `Mon, Jun 10`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
