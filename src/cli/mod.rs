pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, print_usage, Args};
pub use runner::{run, RunSummary, Runner, RunnerOptions, Stage};
