use crate::errors::AppError;
use crate::models::AppData;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<AppData>(&bytes) {
            Ok(data) => {
                info!("loaded {} habits from {}", data.habits.len(), path.display());
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HabitDraft;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("habit_tracker_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.habits.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{\"not\": \"an array\"}").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.habits.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_data_loads_back() {
        let path = temp_path("roundtrip");
        let mut data = AppData::default();
        let draft = HabitDraft {
            name: "Floss".to_string(),
            ..Default::default()
        };
        let id = data.create_habit(draft).unwrap().id.clone();
        data.set_entry(&id, "2024-06-10", 1.0).unwrap();

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        assert_eq!(loaded.habits, data.habits);
        let _ = fs::remove_file(&path).await;
    }
}
