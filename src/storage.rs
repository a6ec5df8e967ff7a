use crate::errors::AppError;
use crate::models::Habit;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("HABIT_DATA_PATH") {
        return PathBuf::from(path);
    }
    PathBuf::from("data/habits.json")
}

pub fn resolve_seed_path() -> PathBuf {
    if let Ok(path) = env::var("HABIT_SEED_PATH") {
        return PathBuf::from(path);
    }
    PathBuf::from("data/habits.seed.json")
}

/// Loads the habit collection. An absent or empty data file triggers a
/// one-time import from the seed file, which is written back to the data
/// path so later runs never consult the seed again. Every failure mode
/// degrades to an empty collection; nothing here errors out to the caller.
pub async fn load_habits(data_path: &Path, seed_path: &Path) -> Vec<Habit> {
    if let Some(habits) = read_collection(data_path).await {
        if !habits.is_empty() {
            return habits;
        }
    }

    match read_collection(seed_path).await {
        Some(habits) if !habits.is_empty() => {
            info!("importing seed snapshot from {}", seed_path.display());
            if let Err(err) = persist_habits(data_path, &habits).await {
                error!("failed to persist imported seed: {}", err.message);
            }
            habits
        }
        _ => Vec::new(),
    }
}

async fn read_collection(path: &Path) -> Option<Vec<Habit>> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(habits) => Some(habits),
            Err(err) => {
                warn!("failed to parse {}: {err}", path.display());
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            warn!("failed to read {}: {err}", path.display());
            None
        }
    }
}

pub async fn persist_habits(path: &Path, habits: &[Habit]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(habits).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habit_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    fn sample() -> Vec<Habit> {
        vec![Habit {
            id: 1,
            name: "Read".into(),
            target: 20,
            icon: "book".into(),
            days: vec![Day {
                comment: "chapter one".into(),
            }],
        }]
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let data = temp_path("roundtrip");
        let missing_seed = temp_path("roundtrip_seed");
        let habits = sample();

        persist_habits(&data, &habits).await.unwrap();
        let loaded = load_habits(&data, &missing_seed).await;

        assert_eq!(loaded, habits);
        let _ = fs::remove_file(&data).await;
    }

    #[tokio::test]
    async fn seed_is_imported_once_when_data_is_missing() {
        let data = temp_path("seed_data");
        let seed = temp_path("seed_src");
        persist_habits(&seed, &sample()).await.unwrap();

        let loaded = load_habits(&data, &seed).await;
        assert_eq!(loaded, sample());

        // The import wrote the data file, so the seed is no longer consulted.
        let _ = fs::remove_file(&seed).await;
        let again = load_habits(&data, &seed).await;
        assert_eq!(again, sample());

        let _ = fs::remove_file(&data).await;
    }

    #[tokio::test]
    async fn missing_everything_yields_empty_collection() {
        let loaded = load_habits(&temp_path("none_data"), &temp_path("none_seed")).await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn empty_data_file_falls_back_to_seed() {
        let data = temp_path("empty_data");
        let seed = temp_path("empty_seed");
        fs::write(&data, b"[]").await.unwrap();
        persist_habits(&seed, &sample()).await.unwrap();

        let loaded = load_habits(&data, &seed).await;
        assert_eq!(loaded, sample());

        let _ = fs::remove_file(&data).await;
        let _ = fs::remove_file(&seed).await;
    }
}
