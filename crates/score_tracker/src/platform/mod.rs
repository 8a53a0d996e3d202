mod app;
mod cli;
mod logging;
mod settings;

pub use app::run_app;
