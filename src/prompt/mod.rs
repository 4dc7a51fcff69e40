//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interface independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `preset`: Non-interactive implementation answering from a table

use crate::{
    config::{Answer, Answers, Feature},
    error::Result,
};

pub mod dialoguer;
pub mod interface;
pub mod preset;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;
pub use preset::PresetPrompter;

/// Asks every feature question in declaration order.
///
/// Features already present in `preset` are not asked again. With
/// `non_interactive` set, features missing from `preset` are answered `No`.
pub fn collect_answers<P: ConfirmationPrompter + ?Sized>(
    provider: &P,
    preset: Option<Answers>,
    non_interactive: bool,
) -> Result<Answers> {
    let mut answers = preset.unwrap_or_default();

    for feature in Feature::ALL {
        if let Some(answer) = answers.get(feature) {
            log::debug!("Using preset answer for '{feature}': {answer:?}");
            continue;
        }

        let answer = if non_interactive {
            log::debug!("No answer for '{feature}' in non-interactive mode, assuming no");
            Answer::No
        } else {
            let config = ConfirmationConfig::new(feature.prompt());
            Answer::from(provider.prompt_confirmation(&config)?)
        };
        answers.set(feature, answer);
    }

    Ok(answers)
}
