//! Slipway - a workspace mapping core for project generation
//!
//! This crate transforms an in-memory description of a software workspace
//! (projects, targets, and their dependency edges) into a semantically
//! equivalent, environment-adjusted description ready for serialization
//! into native project files. The transformation is a pipeline of mapping
//! stages selected per operating mode, the densest of which propagates
//! module-map declarations through each target's dependency closure and
//! rewrites compiler and linker flags accordingly.
//!
//! Parsing of project descriptors, serialization to the native format,
//! and execution of the produced side effects are external collaborators;
//! this crate performs no file I/O of its own.

pub mod core;
pub mod graph;
pub mod mappers;
pub mod ops;
pub mod util;

/// Test utilities for Slipway unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides snapshot and settings fixtures for common
/// mapping scenarios.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    Project, Scheme, SettingValue, Settings, Target, TargetDependency, TargetReference, Workspace,
    WorkspaceSnapshot,
};

pub use crate::graph::{GraphError, ProjectPathIndex, TargetGraph};
pub use crate::mappers::{
    MappingError, MappingPipeline, PipelineError, SideEffectDescriptor, WorkspaceMapperFactory,
    WorkspaceMapping,
};
pub use crate::ops::{default_project_mapper, map_workspace, GenerationMode};
pub use crate::util::config::GenerationConfig;
