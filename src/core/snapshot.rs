//! Workspace snapshots - the unit of work of the mapping pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::project::Project;
use crate::core::workspace::Workspace;

/// A workspace together with its fully-loaded projects.
///
/// Snapshots are values: every mapping stage consumes one and returns a
/// brand-new one, never mutating a snapshot already handed to a later
/// stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    /// The workspace description
    pub workspace: Workspace,

    /// The member projects, in workspace declaration order
    pub projects: Vec<Project>,
}

impl WorkspaceSnapshot {
    pub fn new(workspace: Workspace, projects: Vec<Project>) -> Self {
        WorkspaceSnapshot {
            workspace,
            projects,
        }
    }

    /// Look up a project by path.
    pub fn project(&self, path: &Path) -> Option<&Project> {
        self.projects.iter().find(|p| p.path == path)
    }
}
