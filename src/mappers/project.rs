//! Per-project mapping.
//!
//! Project mappers rewrite a single project at a time; the workspace
//! wrapper lifts them into a pipeline stage by applying them to every
//! project in the snapshot independently and reassembling the result in
//! the original project order.

use std::sync::Arc;

use crate::core::{Project, WorkspaceSnapshot};
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingError, WorkspaceMapping};

/// A single per-project mapping pass.
pub trait ProjectMapping: Send + Sync {
    /// Stable mapper name, used for logging.
    fn name(&self) -> &'static str;

    /// Rewrite one project, returning the new project and any side
    /// effects. A failure aborts the whole workspace stage.
    fn map(&self, project: Project) -> Result<(Project, Vec<SideEffectDescriptor>), MappingError>;
}

/// Runs a list of project mappers in order over the same project.
pub struct SequentialProjectMapper {
    mappers: Vec<Arc<dyn ProjectMapping>>,
}

impl SequentialProjectMapper {
    pub fn new(mappers: Vec<Arc<dyn ProjectMapping>>) -> Self {
        SequentialProjectMapper { mappers }
    }
}

impl ProjectMapping for SequentialProjectMapper {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn map(&self, project: Project) -> Result<(Project, Vec<SideEffectDescriptor>), MappingError> {
        let mut current = project;
        let mut side_effects = Vec::new();

        for mapper in &self.mappers {
            tracing::debug!(
                mapper = mapper.name(),
                project = %current.path.display(),
                "running project mapper"
            );
            let (next, effects) = mapper.map(current)?;
            side_effects.extend(effects);
            current = next;
        }

        Ok((current, side_effects))
    }
}

/// Lifts a project mapper into a workspace mapping stage.
///
/// Projects are mapped independently in workspace order; side effects are
/// concatenated in that same order.
pub struct ProjectWorkspaceMapper {
    mapper: Arc<dyn ProjectMapping>,
}

impl ProjectWorkspaceMapper {
    pub fn new(mapper: Arc<dyn ProjectMapping>) -> Self {
        ProjectWorkspaceMapper { mapper }
    }
}

impl WorkspaceMapping for ProjectWorkspaceMapper {
    fn name(&self) -> &'static str {
        "project-mapping"
    }

    fn map(
        &self,
        snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        let WorkspaceSnapshot {
            workspace,
            projects,
        } = snapshot;

        let mut mapped_projects = Vec::with_capacity(projects.len());
        let mut side_effects = Vec::new();

        for project in projects {
            let (mapped, effects) = self.mapper.map(project)?;
            side_effects.extend(effects);
            mapped_projects.push(mapped);
        }

        Ok((
            WorkspaceSnapshot::new(workspace, mapped_projects),
            side_effects,
        ))
    }
}

/// Schedules the project's derived-sources directory for deletion before
/// regeneration, so stale generated files never leak into a fresh build.
pub struct CleanDerivedDirectoryProjectMapper;

/// Directory that holds generated sources inside a project.
const DERIVED_DIRECTORY: &str = "Derived";

impl ProjectMapping for CleanDerivedDirectoryProjectMapper {
    fn name(&self) -> &'static str {
        "clean-derived-directory"
    }

    fn map(&self, project: Project) -> Result<(Project, Vec<SideEffectDescriptor>), MappingError> {
        let derived = project.path.join(DERIVED_DIRECTORY);
        Ok((project, vec![SideEffectDescriptor::file_deletion(derived)]))
    }
}
