//! High-level workspace mapping entry point.
//!
//! Ties the factory, pipeline, and configuration together: callers pick
//! an operating mode, hand in a fully-resolved snapshot, and receive the
//! transformed snapshot plus the ordered side-effect ledger for the
//! external serializer/executor.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::WorkspaceSnapshot;
use crate::mappers::project::{
    CleanDerivedDirectoryProjectMapper, ProjectMapping, SequentialProjectMapper,
};
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingPipeline, PipelineError};
use crate::mappers::WorkspaceMapperFactory;
use crate::util::config::GenerationConfig;

/// Operating mode of a mapping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationMode {
    /// Plain generation
    Default,

    /// Cache-oriented generation, narrowed to the given target names
    Cache { included_targets: BTreeSet<String> },

    /// Automation-oriented generation into a dedicated directory
    Automation { workspace_directory: PathBuf },
}

/// The project mappers applied during plain generation.
pub fn default_project_mapper() -> Arc<dyn ProjectMapping> {
    Arc::new(SequentialProjectMapper::new(vec![Arc::new(
        CleanDerivedDirectoryProjectMapper,
    )]))
}

/// Map a workspace snapshot according to the operating mode.
///
/// On failure, the returned error carries the failing stage's identity
/// and the side effects accumulated from stages that completed before it.
pub fn map_workspace(
    snapshot: WorkspaceSnapshot,
    config: &GenerationConfig,
    mode: &GenerationMode,
    project_mapper: Arc<dyn ProjectMapping>,
) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), PipelineError> {
    let factory = WorkspaceMapperFactory::new(project_mapper);

    let stages = match mode {
        GenerationMode::Default => factory.default(config),
        GenerationMode::Cache { included_targets } => {
            factory.cache(config, included_targets.clone())
        }
        GenerationMode::Automation {
            workspace_directory,
        } => factory.automation(config, workspace_directory.clone()),
    };

    let pipeline = MappingPipeline::new(stages);
    tracing::info!(
        workspace = %snapshot.workspace.name,
        mode = ?mode,
        stages = ?pipeline.stage_names(),
        "mapping workspace"
    );

    pipeline.run(snapshot)
}

/// Serialize the side-effect ledger into a JSON manifest for the
/// external executor.
pub fn side_effects_manifest(side_effects: &[SideEffectDescriptor]) -> Result<String> {
    serde_json::to_string_pretty(side_effects).context("failed to serialize side-effect manifest")
}
