use crate::constants::{verbosity, DEFAULT_GENERATOR};
use crate::process::PackageManager;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for cra-setup.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the project to generate.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Never prompt; unanswered questions count as "no".
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Project generator to run with the project name.
    #[arg(short, long, default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    /// Package manager used to add the selected libraries.
    #[arg(short, long, value_enum, default_value_t = PackageManager::Npm)]
    pub package_manager: PackageManager,

    /// Print the commands and files instead of running and writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

pub fn get_args() -> Args {
    Args::parse()
}

/// Prints the usage text, shown when no project name was given.
pub fn print_usage() {
    let mut command = Args::command().help_template(HELP_TEMPLATE);
    if let Err(print_err) = command.print_help() {
        eprintln!("Failed to display help information: {print_err}");
    } else {
        println!();
    }
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
