//! High-level operations.

pub mod generate;

pub use generate::{default_project_mapper, map_workspace, side_effects_manifest, GenerationMode};
