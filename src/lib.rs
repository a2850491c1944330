pub mod app;
pub mod auth;
pub mod calendar;
pub mod config;
pub mod content;
pub mod errors;
pub mod github;
pub mod handlers;
pub mod models;
pub mod posts;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
