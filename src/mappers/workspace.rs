//! Workspace mapping pipeline.
//!
//! A pipeline is an ordered list of stages, each consuming a whole
//! workspace snapshot and producing a new one plus deferred side effects.
//! Stages run strictly sequentially: later stages may depend on
//! structural changes made by earlier ones, so no stage starts before its
//! predecessor completes.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::WorkspaceSnapshot;
use crate::graph::GraphError;
use crate::mappers::side_effect::SideEffectDescriptor;

/// Error raised inside a mapping stage.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum MappingError {
    /// Dependency resolution or traversal failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    /// A per-project mapping pass failed.
    #[error("mapping project `{}` failed: {message}", project.display())]
    #[diagnostic(code(slipway::mappers::project_mapping))]
    Project { project: PathBuf, message: String },
}

/// A single workspace mapping stage.
pub trait WorkspaceMapping: Send + Sync {
    /// Stable stage name, used for failure reporting and logging.
    fn name(&self) -> &'static str;

    /// Transform a snapshot, returning the new snapshot and any side
    /// effects this stage produced.
    fn map(
        &self,
        snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError>;
}

/// Failure of a pipeline run.
///
/// Side effects accumulated from stages that completed before the failing
/// one are preserved so the caller can decide whether to apply them; the
/// failing stage's own effects are discarded.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("mapping stage `{stage}` failed")]
#[diagnostic(code(slipway::mappers::stage_failure))]
pub struct PipelineError {
    /// Name of the failing stage
    pub stage: &'static str,

    /// The underlying stage error
    #[source]
    #[diagnostic_source]
    pub source: MappingError,

    /// Side effects from stages that completed before the failure
    pub completed_side_effects: Vec<SideEffectDescriptor>,
}

/// An ordered sequence of workspace mapping stages.
pub struct MappingPipeline {
    stages: Vec<Box<dyn WorkspaceMapping>>,
}

impl MappingPipeline {
    pub fn new(stages: Vec<Box<dyn WorkspaceMapping>>) -> Self {
        MappingPipeline { stages }
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in order, threading the snapshot through and
    /// concatenating side effects in stage order. Short-circuits on the
    /// first failing stage.
    pub fn run(
        &self,
        snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), PipelineError> {
        let mut current = snapshot;
        let mut side_effects = Vec::new();

        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), "running mapping stage");
            match stage.map(current) {
                Ok((next, stage_effects)) => {
                    side_effects.extend(stage_effects);
                    current = next;
                }
                Err(source) => {
                    tracing::warn!(stage = stage.name(), error = %source, "mapping stage failed");
                    return Err(PipelineError {
                        stage: stage.name(),
                        source,
                        completed_side_effects: side_effects,
                    });
                }
            }
        }

        Ok((current, side_effects))
    }
}
