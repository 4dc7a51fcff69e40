//! Prompt provider that answers from a fixed table
//!
//! Useful for automation, testing, or CI/CD environments.

use super::interface::{ConfirmationConfig, ConfirmationPrompter};
use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct PresetPrompter {
    responses: HashMap<String, bool>,
    fallback: bool,
    asked: RefCell<Vec<String>>,
}

impl PresetPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined response for a specific prompt
    pub fn with_response(mut self, prompt: &str, response: bool) -> Self {
        self.responses.insert(prompt.to_string(), response);
        self
    }

    /// Response used for prompts with no entry and no default
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Prompts seen so far, in the order they were asked.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl ConfirmationPrompter for PresetPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        self.asked.borrow_mut().push(config.prompt.clone());

        let response = self
            .responses
            .get(&config.prompt)
            .copied()
            .or(config.default)
            .unwrap_or(self.fallback);

        log::debug!("Auto-answering '{}' with: {}", config.prompt, response);
        Ok(response)
    }
}
