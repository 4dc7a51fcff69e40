//! Basic types and enums for configuration

use crate::error::{Error, Result};
use std::fmt::Display;
use std::str::FromStr;

/// Optional library group the user can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// State management
    Redux,
    /// Redux middleware
    Thunk,
    /// Static typing
    TypeScript,
    /// Client-side routing
    ReactRouter,
}

impl Feature {
    /// Every feature in the order it is asked and installed.
    pub const ALL: [Feature; 4] =
        [Feature::Redux, Feature::Thunk, Feature::TypeScript, Feature::ReactRouter];

    /// Key used in preset answers and in the template context.
    pub fn key(self) -> &'static str {
        match self {
            Feature::Redux => "useRedux",
            Feature::Thunk => "useThunk",
            Feature::TypeScript => "useTypescript",
            Feature::ReactRouter => "useReactRouter",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Feature::Redux => "Do you want to configure redux?",
            Feature::Thunk => "Do you want to configure redux-thunk?",
            Feature::TypeScript => "Do you want to configure TypeScript?",
            Feature::ReactRouter => "Do you want to configure React Router?",
        }
    }

    /// npm packages added when the feature is enabled.
    pub fn packages(self) -> &'static [&'static str] {
        match self {
            Feature::Redux => &["redux", "react-redux"],
            Feature::Thunk => &["redux-thunk"],
            Feature::TypeScript => &["typescript"],
            Feature::ReactRouter => &["react-router", "react-router-dom"],
        }
    }

    pub fn from_key(key: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|feature| feature.key() == key)
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A yes/no answer. Only explicit affirmatives count as `Yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl FromStr for Answer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(Answer::Yes),
            "n" | "no" => Ok(Answer::No),
            other => Err(Error::ValidationError(format!(
                "expected 'y' or 'n', got '{other}'"
            ))),
        }
    }
}

impl TryFrom<&serde_json::Value> for Answer {
    type Error = Error;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Bool(b) => Ok(Answer::from(*b)),
            serde_json::Value::String(s) => s.parse(),
            other => Err(Error::ValidationError(format!(
                "expected 'y', 'n' or a boolean, got {other}"
            ))),
        }
    }
}
