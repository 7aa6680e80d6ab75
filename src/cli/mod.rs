//! CLI layer
//!
//! Argument parsing, command dispatch, and terminal output.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use app::{load_merged_config, run_journal, run_serve, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
