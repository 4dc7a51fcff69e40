//! Invocation context threaded through every stage.

use crate::constants::SOURCE_DIR;
use std::path::{Path, PathBuf};

/// Project name and the directory the generator creates for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectContext {
    project_name: String,
    target_dir: PathBuf,
}

impl ProjectContext {
    /// Resolves `<base_dir>/<project_name>`.
    pub fn new<P: AsRef<Path>>(project_name: &str, base_dir: P) -> Self {
        Self {
            project_name: project_name.to_string(),
            target_dir: base_dir.as_ref().join(project_name),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Directory receiving the template files.
    pub fn source_dir(&self) -> PathBuf {
        self.target_dir.join(SOURCE_DIR)
    }
}
