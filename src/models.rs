use crate::heatmap::HeatmapGrid;
use crate::stats::{StatDisplay, StatSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse per-day values keyed by `YYYY-MM-DD`. Only positive values are stored.
pub type Entries = BTreeMap<String, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    #[default]
    None,
    Minutes,
    Hours,
    Kilometers,
    Steps,
    Pages,
    Glasses,
    Reps,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricInfo {
    #[serde(rename = "value")]
    pub kind: MetricType,
    pub label: &'static str,
    pub unit: &'static str,
    pub plural: &'static str,
}

pub static METRIC_TYPES: [MetricInfo; 8] = [
    MetricInfo { kind: MetricType::None, label: "None (Yes/No)", unit: "", plural: "" },
    MetricInfo { kind: MetricType::Minutes, label: "Minutes", unit: "minute", plural: "minutes" },
    MetricInfo { kind: MetricType::Hours, label: "Hours", unit: "hour", plural: "hours" },
    MetricInfo { kind: MetricType::Kilometers, label: "Kilometers", unit: "km", plural: "km" },
    MetricInfo { kind: MetricType::Steps, label: "Steps", unit: "step", plural: "steps" },
    MetricInfo { kind: MetricType::Pages, label: "Pages", unit: "page", plural: "pages" },
    MetricInfo { kind: MetricType::Glasses, label: "Glasses", unit: "glass", plural: "glasses" },
    MetricInfo { kind: MetricType::Reps, label: "Repetitions", unit: "rep", plural: "reps" },
];

impl MetricType {
    pub fn info(self) -> &'static MetricInfo {
        // Table rows are declared in variant order.
        &METRIC_TYPES[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn unit(self) -> &'static str {
        self.info().unit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "type")]
    pub kind: MetricType,
    #[serde(default)]
    pub unit: String,
}

impl From<MetricType> for Metric {
    fn from(kind: MetricType) -> Self {
        Self {
            kind,
            unit: kind.unit().to_string(),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        MetricType::None.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HabitColor {
    #[default]
    Lemonade,
    Ocean,
    Forest,
    Sunset,
    Lavender,
    Mint,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorInfo {
    #[serde(rename = "class")]
    pub color: HabitColor,
    pub name: &'static str,
    #[serde(rename = "value")]
    pub hex: &'static str,
}

pub static COLORS: [ColorInfo; 6] = [
    ColorInfo { color: HabitColor::Lemonade, name: "Lemonade", hex: "#FFD700" },
    ColorInfo { color: HabitColor::Ocean, name: "Ocean", hex: "#0077BE" },
    ColorInfo { color: HabitColor::Forest, name: "Forest", hex: "#228B22" },
    ColorInfo { color: HabitColor::Sunset, name: "Sunset", hex: "#FF6347" },
    ColorInfo { color: HabitColor::Lavender, name: "Lavender", hex: "#9370DB" },
    ColorInfo { color: HabitColor::Mint, name: "Mint", hex: "#98FB98" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatId {
    Streak,
    LongestStreak,
    Average,
    StandardDeviation,
    Total,
    NumberOfDays,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatInfo {
    pub id: StatId,
    pub label: &'static str,
    pub description: &'static str,
}

pub static STATISTICS: [StatInfo; 6] = [
    StatInfo {
        id: StatId::Streak,
        label: "Streak",
        description: "Number of consecutive entries. Resets to 0 if a day is missed.",
    },
    StatInfo {
        id: StatId::LongestStreak,
        label: "Longest streak",
        description: "Longest streak ever recorded.",
    },
    StatInfo {
        id: StatId::Average,
        label: "Average",
        description: "Statistical average of your entries.",
    },
    StatInfo {
        id: StatId::StandardDeviation,
        label: "Standard deviation",
        description: "Statistical measure of dispersion, how much your entries vary.",
    },
    StatInfo {
        id: StatId::Total,
        label: "Total",
        description: "Sum of all your entries.",
    },
    StatInfo {
        id: StatId::NumberOfDays,
        label: "Number of days",
        description: "Number of entries recorded.",
    },
];

impl StatId {
    pub const ALL: [StatId; 6] = [
        StatId::Streak,
        StatId::LongestStreak,
        StatId::Average,
        StatId::StandardDeviation,
        StatId::Total,
        StatId::NumberOfDays,
    ];

    pub fn info(self) -> &'static StatInfo {
        &STATISTICS[self as usize]
    }

    /// Counting statistics are always shown as whole numbers.
    pub fn is_count(self) -> bool {
        matches!(
            self,
            StatId::Streak | StatId::LongestStreak | StatId::NumberOfDays
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub metric: Metric,
    #[serde(default)]
    pub color: HabitColor,
    #[serde(default)]
    pub selected_stats: Vec<StatId>,
    #[serde(default)]
    pub start_day: WeekStart,
    #[serde(default)]
    pub privacy: Privacy,
    #[serde(default)]
    pub entries: Entries,
}

/// Editable habit fields, as submitted by the create and edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDraft {
    pub name: String,
    #[serde(default)]
    pub metric_type: MetricType,
    #[serde(default)]
    pub color: HabitColor,
    #[serde(default)]
    pub selected_stats: Option<Vec<StatId>>,
    #[serde(default)]
    pub start_day: WeekStart,
    #[serde(default)]
    pub privacy: Privacy,
}

/// The owned habit collection. Persists as a bare JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AppData {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct HeatmapQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub date: String,
    pub value: Option<f64>,
    pub tooltip: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub imported: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub metric_types: &'static [MetricInfo],
    pub colors: &'static [ColorInfo],
    pub statistics: &'static [StatInfo],
}

/// A habit with everything the page needs to render its card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    #[serde(flatten)]
    pub habit: Habit,
    pub metric_label: &'static str,
    pub stats: StatSnapshot,
    pub display_stats: Vec<StatDisplay>,
    pub heatmap: HeatmapGrid,
}
