//! Workspace mapping stages.
//!
//! This module implements the mapping pipeline: an ordered list of stages
//! that each consume a workspace snapshot and produce a new one plus
//! deferred side effects, and the factory that assembles stage lists per
//! operating mode.

pub mod automation;
pub mod factory;
pub mod ide_template;
pub mod identifier;
pub mod last_upgrade;
pub mod module_map;
pub mod project;
pub mod schemes;
pub mod side_effect;
pub mod workspace;

pub use automation::AutomationPathMapper;
pub use factory::WorkspaceMapperFactory;
pub use ide_template::IdeTemplateMacrosMapper;
pub use identifier::WorkspaceIdentifierMapper;
pub use last_upgrade::LastUpgradeVersionMapper;
pub use module_map::ModuleMapMapper;
pub use project::{
    CleanDerivedDirectoryProjectMapper, ProjectMapping, ProjectWorkspaceMapper,
    SequentialProjectMapper,
};
pub use schemes::{AutogeneratedSchemeMapper, CacheableSchemesMapper};
pub use side_effect::{CommandDescriptor, FileDescriptor, FileState, SideEffectDescriptor};
pub use workspace::{MappingError, MappingPipeline, PipelineError, WorkspaceMapping};
