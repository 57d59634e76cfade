//! Workspace - the top-level grouping of projects.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::scheme::Scheme;

/// A workspace grouping the projects that are generated together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Directory the workspace is generated into
    pub path: PathBuf,

    /// Workspace name
    pub name: String,

    /// Paths of the member projects, in declaration order.
    /// Invariant: unique by path.
    pub projects: Vec<PathBuf>,

    /// Workspace-level schemes
    pub schemes: Vec<Scheme>,

    /// Stable identifier assigned during mapping
    pub generation_id: Option<String>,

    /// Location of the native workspace container, assigned during mapping
    pub container_path: Option<PathBuf>,

    /// Native-toolchain version the workspace was last checked against
    pub last_upgrade_check: Option<String>,
}

impl Workspace {
    /// Create an empty workspace.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Workspace {
            path: path.into(),
            name: name.into(),
            projects: Vec::new(),
            schemes: Vec::new(),
            generation_id: None,
            container_path: None,
            last_upgrade_check: None,
        }
    }

    /// Attach member project paths, dropping duplicates.
    pub fn with_projects(mut self, projects: Vec<PathBuf>) -> Self {
        for path in projects {
            self.add_project(path);
        }
        self
    }

    /// Add a member project reference, keeping paths unique.
    pub fn add_project(&mut self, path: PathBuf) {
        if self.projects.contains(&path) {
            tracing::warn!("ignoring duplicate project reference: {}", path.display());
            return;
        }
        self.projects.push(path);
    }

    /// Replace any scheme with the same name, otherwise append.
    pub fn upsert_scheme(&mut self, scheme: Scheme) {
        match self.schemes.iter_mut().find(|s| s.name == scheme.name) {
            Some(existing) => *existing = scheme,
            None => self.schemes.push(scheme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheme::TargetReference;

    #[test]
    fn test_duplicate_project_references_are_dropped() {
        let workspace = Workspace::new("/ws", "App").with_projects(vec![
            PathBuf::from("/ws/A"),
            PathBuf::from("/ws/B"),
            PathBuf::from("/ws/A"),
        ]);

        assert_eq!(
            workspace.projects,
            vec![PathBuf::from("/ws/A"), PathBuf::from("/ws/B")]
        );
    }

    #[test]
    fn test_upsert_scheme_replaces_by_name() {
        let mut workspace = Workspace::new("/ws", "App");
        workspace.upsert_scheme(Scheme::new("App-Workspace", Vec::new()));
        workspace.upsert_scheme(Scheme::new(
            "App-Workspace",
            vec![TargetReference::new("/ws/A", "App")],
        ));

        assert_eq!(workspace.schemes.len(), 1);
        assert_eq!(workspace.schemes[0].build_targets.len(), 1);
    }
}
