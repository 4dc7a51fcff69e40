/// Handles argument parsing and the run pipeline.
pub mod cli;

/// Configuration answers and the optional features they select.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Per-run project name and directories.
pub mod context;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// External command execution.
pub mod process;

/// User input and interaction handling.
pub mod prompt;

/// Template rendering.
pub mod renderer;

/// The fixed template set and the parallel writer.
pub mod template;
