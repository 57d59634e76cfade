//! Target dependency references.
//!
//! A dependency is a pure lookup key from one target to another, either
//! within the same project or across projects by project path.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A reference from a target to one of its dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetDependency {
    /// A target in the same project, referenced by name.
    Target {
        /// Name of the depended-upon target
        name: String,
    },

    /// A target in another project of the workspace.
    Project {
        /// Name of the depended-upon target
        target: String,

        /// Path of the project that owns the target
        path: PathBuf,
    },
}

impl TargetDependency {
    /// Reference a target in the same project.
    pub fn target(name: impl Into<String>) -> Self {
        TargetDependency::Target { name: name.into() }
    }

    /// Reference a target in another project.
    pub fn project(target: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        TargetDependency::Project {
            target: target.into(),
            path: path.into(),
        }
    }

    /// Name of the referenced target.
    pub fn target_name(&self) -> &str {
        match self {
            TargetDependency::Target { name } => name,
            TargetDependency::Project { target, .. } => target,
        }
    }

    /// Path of the owning project, for cross-project references.
    pub fn project_path(&self) -> Option<&Path> {
        match self {
            TargetDependency::Target { .. } => None,
            TargetDependency::Project { path, .. } => Some(path),
        }
    }
}

impl fmt::Display for TargetDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDependency::Target { name } => write!(f, "{}", name),
            TargetDependency::Project { target, path } => {
                write!(f, "{}:{}", path.display(), target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_name_lookup() {
        let same = TargetDependency::target("Core");
        assert_eq!(same.target_name(), "Core");
        assert_eq!(same.project_path(), None);

        let cross = TargetDependency::project("Networking", "/ws/Networking");
        assert_eq!(cross.target_name(), "Networking");
        assert_eq!(cross.project_path(), Some(Path::new("/ws/Networking")));
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetDependency::target("Core").to_string(), "Core");
        assert_eq!(
            TargetDependency::project("Net", "/ws/Net").to_string(),
            "/ws/Net:Net"
        );
    }

    #[test]
    fn test_serialization_is_tagged() {
        let dep = TargetDependency::project("Net", "/ws/Net");
        let json = serde_json::to_string(&dep).unwrap();
        assert!(json.contains("\"kind\":\"project\""));

        let deserialized: TargetDependency = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, dep);
    }
}
