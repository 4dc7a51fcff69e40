//! Constants used throughout cra-setup

/// Generator invoked with the project name when `--generator` is not given
pub const DEFAULT_GENERATOR: &str = "create-react-app";

/// Directory inside the generated project that receives the template files
pub const SOURCE_DIR: &str = "src";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
