pub mod app;
pub mod calendar;
pub mod config;
pub mod entries;
pub mod errors;
pub mod habits;
pub mod handlers;
pub mod heatmap;
pub mod logging;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use entries::set_entry;
pub use heatmap::{project_heatmap, HeatmapGrid};
pub use models::{AppData, Habit};
pub use state::AppState;
pub use stats::{compute_stats, format_stat_value, StatSnapshot};
pub use storage::load_data;
