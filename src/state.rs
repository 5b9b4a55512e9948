use crate::errors::{AppError, HabitError};
use crate::models::AppData;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handle to the habit collection. Handlers hold the lock across the
/// whole read-modify-persist sequence, so stats and heatmaps are never
/// computed over a habit that is being edited.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Applies `change` to a copy of the collection and swaps it in only
    /// once the copy is on disk. A rejected change or a failed write leaves
    /// the live collection as it was.
    pub async fn commit<T>(
        &self,
        change: impl FnOnce(&mut AppData) -> Result<T, HabitError>,
    ) -> Result<T, AppError> {
        let mut data = self.data.lock().await;
        let mut next = data.clone();
        let output = change(&mut next)?;
        persist_data(&self.data_path, &next).await?;
        *data = next;
        Ok(output)
    }
}
