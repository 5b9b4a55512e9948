use crate::calendar::{self, parse_date};
use crate::entries::set_entry;
use crate::errors::HabitError;
use crate::heatmap::project_heatmap_at;
use crate::models::{AppData, Entries, Habit, HabitDraft, HabitView, StatId};
use crate::stats::{compute_stats_at, display_stats};
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

const SAMPLE_DAYS: i64 = 30;
const SAMPLE_HIT_RATE: f64 = 0.7;

impl AppData {
    pub fn find(&self, id: &str) -> Result<&Habit, HabitError> {
        self.habits
            .iter()
            .find(|habit| habit.id == id)
            .ok_or_else(|| HabitError::NotFound(id.to_string()))
    }

    pub fn find_mut(&mut self, id: &str) -> Result<&mut Habit, HabitError> {
        self.habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or_else(|| HabitError::NotFound(id.to_string()))
    }

    pub fn create_habit(&mut self, draft: HabitDraft) -> Result<&Habit, HabitError> {
        let mut habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            metric: Default::default(),
            color: Default::default(),
            selected_stats: Vec::new(),
            start_day: Default::default(),
            privacy: Default::default(),
            entries: Entries::new(),
        };
        apply_draft(&mut habit, draft)?;
        self.habits.push(habit);
        Ok(&self.habits[self.habits.len() - 1])
    }

    /// Replaces the editable fields in place. Id and entries are kept.
    pub fn update_habit(&mut self, id: &str, draft: HabitDraft) -> Result<&Habit, HabitError> {
        let habit = self.find_mut(id)?;
        apply_draft(habit, draft)?;
        Ok(habit)
    }

    pub fn delete_habit(&mut self, id: &str) -> Result<Habit, HabitError> {
        let pos = self
            .habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or_else(|| HabitError::NotFound(id.to_string()))?;
        Ok(self.habits.remove(pos))
    }

    pub fn set_entry(&mut self, id: &str, date: &str, value: f64) -> Result<&Habit, HabitError> {
        if parse_date(date).is_none() {
            return Err(HabitError::InvalidDate(date.to_string()));
        }
        let habit = self.find_mut(id)?;
        set_entry(&mut habit.entries, date, value);
        Ok(habit)
    }

    /// Replaces the whole collection with a JSON array of habits. Anything
    /// else leaves the collection untouched.
    pub fn import_json(&mut self, payload: &[u8]) -> Result<usize, HabitError> {
        let value: serde_json::Value = serde_json::from_slice(payload)?;
        if !value.is_array() {
            return Err(HabitError::NotAnArray);
        }
        let mut habits: Vec<Habit> = serde_json::from_value(value)?;
        for habit in &mut habits {
            normalize(habit)?;
        }
        let mut seen = HashSet::with_capacity(habits.len());
        if let Some(habit) = habits.iter().find(|habit| !seen.insert(habit.id.as_str())) {
            return Err(HabitError::DuplicateId(habit.id.clone()));
        }
        self.habits = habits;
        Ok(self.habits.len())
    }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn apply_draft(habit: &mut Habit, draft: HabitDraft) -> Result<(), HabitError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyName);
    }
    habit.name = name.to_string();
    habit.metric = draft.metric_type.into();
    habit.color = draft.color;
    habit.selected_stats = draft
        .selected_stats
        .unwrap_or_else(|| StatId::ALL.to_vec());
    habit.start_day = draft.start_day;
    habit.privacy = draft.privacy;
    Ok(())
}

/// Brings an imported record in line with what the write paths guarantee.
fn normalize(habit: &mut Habit) -> Result<(), HabitError> {
    let name = habit.name.trim();
    if name.is_empty() {
        return Err(HabitError::EmptyName);
    }
    habit.name = name.to_string();
    habit.metric = habit.metric.kind.into();
    habit.entries.retain(|_, value| *value > 0.0 && value.is_finite());
    Ok(())
}

pub fn habit_view(habit: &Habit, year: Option<i32>, today: NaiveDate) -> HabitView {
    let stats = compute_stats_at(today, &habit.entries);
    HabitView {
        metric_label: habit.metric.kind.label(),
        display_stats: display_stats(habit, &stats),
        heatmap: project_heatmap_at(habit, year.unwrap_or_else(|| today.year()), today),
        stats,
        habit: habit.clone(),
    }
}

/// Random entries over the last 30 days, for previewing a draft habit.
pub fn sample_entries<R: Rng>(rng: &mut R, today: NaiveDate) -> Entries {
    let mut entries = Entries::new();
    for offset in 0..SAMPLE_DAYS {
        if rng.gen_bool(SAMPLE_HIT_RATE) {
            let date = today - Duration::days(offset);
            let value: u32 = rng.gen_range(1..=10);
            set_entry(&mut entries, &calendar::format_date(date), f64::from(value));
        }
    }
    entries
}

pub fn preview_habit<R: Rng>(draft: HabitDraft, rng: &mut R, today: NaiveDate) -> Habit {
    let name = match draft.name.trim() {
        "" => "Sample Habit",
        name => name,
    };
    Habit {
        id: "preview".to_string(),
        name: name.to_string(),
        metric: draft.metric_type.into(),
        color: draft.color,
        selected_stats: draft.selected_stats.unwrap_or_else(|| StatId::ALL.to_vec()),
        start_day: draft.start_day,
        privacy: draft.privacy,
        entries: sample_entries(rng, today),
    }
}
