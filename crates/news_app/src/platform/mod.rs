mod app;
mod config;
mod effects;
mod terminal;
mod ui;

pub use app::run_app;
