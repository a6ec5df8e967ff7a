use crate::models::Habit;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub habits: Arc<Mutex<Vec<Habit>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, habits: Vec<Habit>) -> Self {
        Self {
            data_path,
            habits: Arc::new(Mutex::new(habits)),
        }
    }
}
