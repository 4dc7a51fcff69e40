//! Pure interfaces for prompting without external dependencies
//!
//! The configuration stage only needs yes/no questions, so a single
//! confirmation interface is all a prompt backend has to provide.

use crate::error::Result;

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    /// Preselected answer. `None` forces the user to type one.
    pub default: Option<bool>,
}

impl ConfirmationConfig {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), default: None }
    }
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}
