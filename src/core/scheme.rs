//! Workspace schemes.
//!
//! Only the shape needed by the mapping stages lives here: schemes are
//! generated and narrowed by stages, then serialized by an external
//! collaborator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A reference to a target from a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetReference {
    /// Path of the project that owns the target
    pub project_path: PathBuf,

    /// Target name
    pub name: String,
}

impl TargetReference {
    pub fn new(project_path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        TargetReference {
            project_path: project_path.into(),
            name: name.into(),
        }
    }
}

/// A buildable scheme over workspace targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    /// Scheme name
    pub name: String,

    /// Whether the scheme is shared between users of the workspace
    pub shared: bool,

    /// Targets the scheme builds, in workspace order
    pub build_targets: Vec<TargetReference>,
}

impl Scheme {
    pub fn new(name: impl Into<String>, build_targets: Vec<TargetReference>) -> Self {
        Scheme {
            name: name.into(),
            shared: true,
            build_targets,
        }
    }
}
