//! Core data structures for Slipway.
//!
//! This module contains the foundational types used throughout the crate:
//! - Workspaces, projects, targets and their dependency edges
//! - Build settings and the values they hold
//! - Snapshots, the value type the mapping pipeline threads through

pub mod dependency;
pub mod project;
pub mod scheme;
pub mod settings;
pub mod snapshot;
pub mod target;
pub mod workspace;

pub use dependency::TargetDependency;
pub use project::Project;
pub use scheme::{Scheme, TargetReference};
pub use settings::{
    append_list_entries, DefaultSettings, SettingValue, Settings, SettingsDictionary,
    INHERITED_PLACEHOLDER,
};
pub use snapshot::WorkspaceSnapshot;
pub use target::Target;
pub use workspace::Workspace;
