//! Dialoguer-based implementation of the prompt interface

use super::interface::{ConfirmationConfig, ConfirmationPrompter};
use crate::error::Result;
use dialoguer::Confirm;

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let mut confirm = Confirm::new().with_prompt(&config.prompt);

        if let Some(default) = config.default {
            confirm = confirm.default(default);
        }

        Ok(confirm.interact()?)
    }
}
