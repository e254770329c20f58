use crate::errors::AppError;
use crate::models::ActivityState;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

/// Snapshots are opt-in; without a path the state lives as long as the process.
pub fn resolve_data_path() -> Option<PathBuf> {
    env::var("CALORIE_DATA_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

pub async fn load_data(path: &Path) -> ActivityState {
    let mut state = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<ActivityState>(&bytes) {
            Ok(state) => state,
            Err(err) => {
                error!("failed to parse data file: {err}");
                ActivityState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ActivityState::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            ActivityState::default()
        }
    };

    let loaded = state.len();
    state.normalize();
    if state.len() != loaded {
        warn!(dropped = loaded - state.len(), "dropped activities with duplicate ids");
    }
    state
}

pub async fn persist_data(path: &Path, state: &ActivityState) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(state).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
