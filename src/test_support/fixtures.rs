//! Test fixtures for common mapping scenarios.

use std::path::PathBuf;

use crate::core::{
    Project, SettingValue, Settings, SettingsDictionary, Target, TargetDependency, Workspace,
    WorkspaceSnapshot,
};

/// A snapshot whose workspace references exactly the given projects.
pub fn snapshot(projects: Vec<Project>) -> WorkspaceSnapshot {
    let workspace = Workspace::new("/ws", "Workspace")
        .with_projects(projects.iter().map(|p| p.path.clone()).collect());
    WorkspaceSnapshot::new(workspace, projects)
}

/// A settings dictionary from literal pairs.
pub fn base(pairs: &[(&str, SettingValue)]) -> SettingsDictionary {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// Settings declaring a module map at `path`.
pub fn module_map_settings(path: &str) -> Settings {
    Settings::with_base(base(&[("MODULEMAP_FILE", SettingValue::from(path))]))
}

/// A target declaring a module map and optional dependencies.
pub fn module_map_target(name: &str, path: &str, dependencies: Vec<TargetDependency>) -> Target {
    Target::new(name)
        .with_settings(module_map_settings(path))
        .with_dependencies(dependencies)
}

/// A one-target project at `/ws/<name>`.
pub fn single_target_project(name: &str, target: Target) -> Project {
    Project::new(PathBuf::from("/ws").join(name), name).with_targets(vec![target])
}
