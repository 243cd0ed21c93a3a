pub mod app;
pub mod categorize;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
