//! Automation path redirection.
//!
//! Automated build/test flows generate into a dedicated directory instead
//! of the user's workspace, so this stage rewrites the workspace's
//! generation directory before any stage derives locations from it.

use std::path::PathBuf;

use crate::core::WorkspaceSnapshot;
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingError, WorkspaceMapping};

pub struct AutomationPathMapper {
    workspace_directory: PathBuf,
}

impl AutomationPathMapper {
    pub fn new(workspace_directory: PathBuf) -> Self {
        AutomationPathMapper {
            workspace_directory,
        }
    }
}

impl WorkspaceMapping for AutomationPathMapper {
    fn name(&self) -> &'static str {
        "automation-path"
    }

    fn map(
        &self,
        mut snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        tracing::debug!(
            from = %snapshot.workspace.path.display(),
            to = %self.workspace_directory.display(),
            "redirecting workspace generation directory"
        );
        snapshot.workspace.path = self.workspace_directory.clone();
        Ok((snapshot, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Workspace;

    #[test]
    fn test_generation_directory_is_redirected() {
        let stage = AutomationPathMapper::new(PathBuf::from("/cache/automation"));
        let snapshot = WorkspaceSnapshot::new(Workspace::new("/ws", "App"), Vec::new());

        let (mapped, effects) = stage.map(snapshot).unwrap();
        assert_eq!(mapped.workspace.path, PathBuf::from("/cache/automation"));
        assert!(effects.is_empty());
    }
}
