use crate::errors::AppError;
use crate::models::ActivityState;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: Option<PathBuf>,
    pub data: Arc<Mutex<ActivityState>>,
}

impl AppState {
    pub fn new(data_path: Option<PathBuf>, data: ActivityState) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Writes the snapshot if one is configured. Call with the lock held.
    pub async fn persist(&self, data: &ActivityState) -> Result<(), AppError> {
        match &self.data_path {
            Some(path) => persist_data(path, data).await,
            None => Ok(()),
        }
    }
}
