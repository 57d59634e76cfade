//! Last-checked-version stamping.

use crate::core::WorkspaceSnapshot;
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingError, WorkspaceMapping};

/// Stamps the configured last-checked toolchain version on the workspace
/// and every project, so the IDE stops prompting for an upgrade check.
pub struct LastUpgradeVersionMapper {
    version: String,
}

impl LastUpgradeVersionMapper {
    pub fn new(version: impl Into<String>) -> Self {
        LastUpgradeVersionMapper {
            version: version.into(),
        }
    }
}

impl WorkspaceMapping for LastUpgradeVersionMapper {
    fn name(&self) -> &'static str {
        "last-upgrade-version"
    }

    fn map(
        &self,
        mut snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        snapshot.workspace.last_upgrade_check = Some(self.version.clone());
        for project in &mut snapshot.projects {
            project.last_upgrade_check = Some(self.version.clone());
        }
        Ok((snapshot, Vec::new()))
    }
}
