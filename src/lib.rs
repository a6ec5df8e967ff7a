pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;
pub mod validator;
pub mod view;

pub use app::router;
pub use state::AppState;
pub use storage::{load_habits, resolve_data_path, resolve_seed_path};
