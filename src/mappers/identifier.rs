//! Workspace identifier assignment.
//!
//! Derives the native container location from the workspace's generation
//! directory and stamps a stable identifier computed from the workspace
//! shape. Runs before scheme generation so later stages can refer to the
//! container.

use crate::core::WorkspaceSnapshot;
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingError, WorkspaceMapping};
use crate::util::hash::Fingerprint;

/// Extension of the native workspace container.
const CONTAINER_EXTENSION: &str = "xcworkspace";

#[derive(Debug, Default)]
pub struct WorkspaceIdentifierMapper;

impl WorkspaceIdentifierMapper {
    pub fn new() -> Self {
        WorkspaceIdentifierMapper
    }
}

impl WorkspaceMapping for WorkspaceIdentifierMapper {
    fn name(&self) -> &'static str {
        "workspace-identifier"
    }

    fn map(
        &self,
        mut snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        let workspace = &mut snapshot.workspace;

        let mut fingerprint = Fingerprint::new();
        fingerprint.push(&workspace.name);
        for project in &workspace.projects {
            fingerprint.push_path(project);
        }

        workspace.generation_id = Some(fingerprint.finish_short());
        workspace.container_path = Some(
            workspace
                .path
                .join(format!("{}.{}", workspace.name, CONTAINER_EXTENSION)),
        );

        Ok((snapshot, Vec::new()))
    }
}
