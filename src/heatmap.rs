use crate::calendar::{self, days_in_month, first_weekday_of_month, month_name};
use crate::entries::has_entry;
use crate::models::{Habit, HabitColor};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HeatmapCell {
    Padding,
    #[serde(rename_all = "camelCase")]
    Day {
        date: String,
        has_entry: bool,
        is_today: bool,
    },
}

impl HeatmapCell {
    pub fn is_day(&self) -> bool {
        matches!(self, HeatmapCell::Day { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub month: u32,
    pub name: &'static str,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapGrid {
    pub year: i32,
    pub color: HabitColor,
    pub months: Vec<MonthGrid>,
}

/// Year grid anchored on the local calendar date.
pub fn project_heatmap(habit: &Habit, year: Option<i32>) -> HeatmapGrid {
    let today = calendar::today();
    project_heatmap_at(habit, year.unwrap_or_else(|| today.year()), today)
}

/// Twelve month grids for `year`. Each month opens with one padding cell per
/// weekday before the 1st (Sunday first); days after `today` are padding too.
pub fn project_heatmap_at(habit: &Habit, year: i32, today: NaiveDate) -> HeatmapGrid {
    let months = (1..=12)
        .map(|month| MonthGrid {
            month,
            name: month_name(month),
            cells: month_cells(habit, year, month, today),
        })
        .collect();

    HeatmapGrid {
        year,
        color: habit.color,
        months,
    }
}

fn month_cells(habit: &Habit, year: i32, month: u32, today: NaiveDate) -> Vec<HeatmapCell> {
    let leading = first_weekday_of_month(year, month) as usize;
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.resize(leading, HeatmapCell::Padding);

    for day in 1..=days {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        if date > today {
            cells.push(HeatmapCell::Padding);
            continue;
        }
        let key = calendar::format_date(date);
        cells.push(HeatmapCell::Day {
            has_entry: has_entry(&habit.entries, &key),
            is_today: date == today,
            date: key,
        });
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::set_entry;
    use crate::models::{Entries, MetricType};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn habit() -> Habit {
        Habit {
            id: "h".to_string(),
            name: "Stretch".to_string(),
            metric: MetricType::None.into(),
            color: HabitColor::Forest,
            selected_stats: Vec::new(),
            start_day: Default::default(),
            privacy: Default::default(),
            entries: Entries::new(),
        }
    }

    fn dated(month: &MonthGrid) -> usize {
        month.cells.iter().filter(|cell| cell.is_day()).count()
    }

    #[test]
    fn twelve_months_with_leading_padding() {
        let grid = project_heatmap_at(&habit(), 2024, ymd(2024, 12, 31));
        assert_eq!(grid.year, 2024);
        assert_eq!(grid.color, HabitColor::Forest);
        assert_eq!(grid.months.len(), 12);

        // June 2024 starts on a Saturday.
        let june = &grid.months[5];
        assert_eq!(june.name, "Jun");
        assert_eq!(june.cells.len(), 6 + 30);
        assert!(june.cells[..6].iter().all(|cell| *cell == HeatmapCell::Padding));
        assert_eq!(dated(june), 30);

        let february = &grid.months[1];
        assert_eq!(dated(february), 29);
    }

    #[test]
    fn future_days_are_padding() {
        let grid = project_heatmap_at(&habit(), 2024, ymd(2024, 3, 15));
        for month in &grid.months[3..] {
            assert_eq!(dated(month), 0, "month {} has dated cells", month.month);
        }
        let march = &grid.months[2];
        assert_eq!(dated(march), 15);
        // Padding still fills out the month so the grid keeps its shape.
        assert_eq!(march.cells.len(), 5 + 31);
    }

    #[test]
    fn marks_entries_and_today() {
        let mut habit = habit();
        set_entry(&mut habit.entries, "2024-03-14", 1.0);
        set_entry(&mut habit.entries, "2024-03-15", 1.0);
        let grid = project_heatmap_at(&habit, 2024, ymd(2024, 3, 15));
        let march = &grid.months[2];
        let leading = 5;

        assert_eq!(
            march.cells[leading + 13],
            HeatmapCell::Day {
                date: "2024-03-14".to_string(),
                has_entry: true,
                is_today: false,
            }
        );
        assert_eq!(
            march.cells[leading + 14],
            HeatmapCell::Day {
                date: "2024-03-15".to_string(),
                has_entry: true,
                is_today: true,
            }
        );
        assert_eq!(
            march.cells[leading],
            HeatmapCell::Day {
                date: "2024-03-01".to_string(),
                has_entry: false,
                is_today: false,
            }
        );
    }

    #[test]
    fn past_year_is_fully_dated() {
        let grid = project_heatmap_at(&habit(), 2023, ymd(2024, 3, 15));
        let total: usize = grid.months.iter().map(dated).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn projection_leaves_habit_untouched() {
        let mut habit = habit();
        set_entry(&mut habit.entries, "2024-01-01", 2.0);
        let before = habit.clone();
        project_heatmap_at(&habit, 2024, ymd(2024, 6, 1));
        assert_eq!(habit, before);
    }

    #[test]
    fn cells_serialize_with_kind_tag() {
        let cell = HeatmapCell::Day {
            date: "2024-01-01".to_string(),
            has_entry: true,
            is_today: false,
        };
        let value = serde_json::to_value(&cell).unwrap();
        assert_eq!(value["kind"], "day");
        assert_eq!(value["hasEntry"], true);
        assert_eq!(
            serde_json::to_value(HeatmapCell::Padding).unwrap()["kind"],
            "padding"
        );
    }
}
