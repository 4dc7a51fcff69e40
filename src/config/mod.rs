//! Configuration answers for a cra-setup run
//!
//! This module contains the configuration system components:
//! - `types`: the optional features and the strict yes/no answer type
//! - `answers`: the answer record and the package list derived from it

pub mod answers;
pub mod types;


// Re-export commonly used types for convenience
pub use answers::Answers;
pub use types::{Answer, Feature};
