//! Projects - ordered collections of targets keyed by path.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::target::Target;

/// A project within a workspace.
///
/// The path is the project's unique key in the workspace; every
/// cross-project dependency reference resolves against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Absolute path of the project directory
    pub path: PathBuf,

    /// Project name
    pub name: String,

    /// Targets, in declaration order
    pub targets: Vec<Target>,

    /// Native-toolchain version this project was last checked against
    pub last_upgrade_check: Option<String>,
}

impl Project {
    /// Create an empty project.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Project {
            path: path.into(),
            name: name.into(),
            targets: Vec::new(),
            last_upgrade_check: None,
        }
    }

    /// Attach targets.
    pub fn with_targets(mut self, targets: Vec<Target>) -> Self {
        self.targets = targets;
        self
    }

    /// Look up a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }
}
