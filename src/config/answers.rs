//! The record of configuration answers threaded through the run

use super::types::{Answer, Feature};
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};

/// Answers keyed by feature. A feature with no entry has not been answered yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    inner: IndexMap<Feature, Answer>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, feature: Feature) -> Option<Answer> {
        self.inner.get(&feature).copied()
    }

    pub fn set(&mut self, feature: Feature, answer: Answer) {
        self.inner.insert(feature, answer);
    }

    pub fn with(mut self, feature: Feature, answer: Answer) -> Self {
        self.set(feature, answer);
        self
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.get(feature).is_some_and(Answer::is_yes)
    }

    /// Iterates the answered features in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, Answer)> + '_ {
        Feature::ALL.into_iter().filter_map(|feature| self.get(feature).map(|a| (feature, a)))
    }

    /// Parses preset answers such as `{"useRedux": "y", "useThunk": false}`.
    ///
    /// Unknown keys and values other than y/yes/n/no/booleans are rejected.
    /// Keys that are absent stay unanswered.
    pub fn from_json(buf: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(buf)?;
        let serde_json::Value::Object(map) = value else {
            return Err(Error::ValidationError("answers must be a JSON object".into()));
        };

        let mut answers = Answers::new();
        for (key, value) in &map {
            let feature = Feature::from_key(key).ok_or_else(|| {
                Error::ValidationError(format!("unknown answer key '{key}'"))
            })?;
            let answer = Answer::try_from(value).map_err(|e| match e {
                Error::ValidationError(msg) => {
                    Error::ValidationError(format!("{key}: {msg}"))
                }
                other => other,
            })?;
            answers.set(feature, answer);
        }
        Ok(answers)
    }

    /// Packages to install: every enabled group in declaration order, deduplicated.
    pub fn packages(&self) -> Vec<String> {
        let packages: IndexSet<&str> = Feature::ALL
            .into_iter()
            .filter(|feature| self.is_enabled(*feature))
            .flat_map(|feature| feature.packages().iter().copied())
            .collect();
        packages.into_iter().map(str::to_string).collect()
    }

    /// Answers as a JSON object of feature key to boolean.
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        Feature::ALL
            .into_iter()
            .map(|feature| {
                (feature.key().to_string(), serde_json::Value::Bool(self.is_enabled(feature)))
            })
            .collect()
    }
}
