//! Transitive module-map propagation.
//!
//! For every target, walks the target's dependency closure and rewrites
//! its settings so compiler and linker can consume every module map
//! declared along the way: a header search path and a
//! `-fmodule-map-file` flag per declaration, the same flag mirrored
//! behind a `-Xcc` passthrough for the Swift compiler, and `-ObjC` once.
//! Targets whose closure declares no module map are returned untouched.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::core::{
    append_list_entries, Project, SettingValue, Settings, Target, WorkspaceSnapshot,
};
use crate::graph::{ProjectPathIndex, TargetGraph};
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingError, WorkspaceMapping};

/// Declares a module map on the target that owns it. Read here and left
/// in place.
const MODULE_MAP_FILE: &str = "MODULEMAP_FILE";

const OTHER_CFLAGS: &str = "OTHER_CFLAGS";
const OTHER_SWIFT_FLAGS: &str = "OTHER_SWIFT_FLAGS";
const HEADER_SEARCH_PATHS: &str = "HEADER_SEARCH_PATHS";
const OTHER_LDFLAGS: &str = "OTHER_LDFLAGS";

/// Expands to the consuming project's root at build time, which keeps the
/// synthesized flags stable no matter where the project sits on disk.
const SOURCE_ROOT: &str = "$(SRCROOT)";

/// Prefix that forwards a C-family flag through the Swift compiler.
const SWIFT_PASSTHROUGH: &str = "-Xcc";

/// Linker flag enabling Objective-C runtime linkage.
const OBJC_LINKER_FLAG: &str = "-ObjC";

/// Workspace stage that injects module-map flags computed from each
/// target's dependency closure.
#[derive(Debug, Default)]
pub struct ModuleMapMapper;

impl ModuleMapMapper {
    pub fn new() -> Self {
        ModuleMapMapper
    }
}

impl WorkspaceMapping for ModuleMapMapper {
    fn name(&self) -> &'static str {
        "module-map-propagation"
    }

    fn map(
        &self,
        snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        let index = ProjectPathIndex::new(&snapshot.projects);
        let graph = TargetGraph::build(&snapshot, &index)?;

        // Stable (project-order, target-order) work partitioning. The
        // parallel collect re-merges results positionally, so the output
        // never depends on completion order.
        let units: Vec<(usize, usize)> = snapshot
            .projects
            .iter()
            .enumerate()
            .flat_map(|(project, p)| (0..p.targets.len()).map(move |target| (project, target)))
            .collect();

        let results: Vec<Result<Vec<PathBuf>, MappingError>> = units
            .par_iter()
            .map(|&(project, target)| dependency_module_maps(&snapshot, &graph, project, target))
            .collect();

        let mut module_maps = Vec::with_capacity(results.len());
        for result in results {
            module_maps.push(result?);
        }

        let injected = module_maps.iter().filter(|maps| !maps.is_empty()).count();
        tracing::debug!(
            targets = graph.target_count(),
            injected,
            "propagated module maps"
        );

        let WorkspaceSnapshot {
            workspace,
            projects,
        } = snapshot;

        let mut unit_maps = module_maps.into_iter();
        let mapped_projects = projects
            .into_iter()
            .map(|project| {
                let Project {
                    path,
                    name,
                    targets,
                    last_upgrade_check,
                } = project;
                let mapped_targets = targets
                    .into_iter()
                    .map(|target| {
                        let maps = unit_maps.next().unwrap_or_default();
                        if maps.is_empty() {
                            return target;
                        }
                        let Target {
                            name,
                            settings,
                            dependencies,
                        } = target;
                        Target {
                            name,
                            settings: Some(inject_flags(&path, settings, &maps)),
                            dependencies,
                        }
                    })
                    .collect();
                Project {
                    path,
                    name,
                    targets: mapped_targets,
                    last_upgrade_check,
                }
            })
            .collect();

        Ok((WorkspaceSnapshot::new(workspace, mapped_projects), Vec::new()))
    }
}

/// Module maps declared by the dependency closure of one target, in
/// deterministic discovery order.
fn dependency_module_maps(
    snapshot: &WorkspaceSnapshot,
    graph: &TargetGraph,
    project_position: usize,
    target_position: usize,
) -> Result<Vec<PathBuf>, MappingError> {
    let project = &snapshot.projects[project_position];
    let target = &project.targets[target_position];
    let Some(start) = graph.node(&project.path, &target.name) else {
        return Ok(Vec::new());
    };

    let mut module_maps = Vec::new();
    for node_index in graph.dependency_closure(start)? {
        let node = graph.target_node(node_index);
        let declared = snapshot
            .project(&node.project_path)
            .and_then(|p| p.target(&node.target_name))
            .and_then(|t| t.settings.as_ref())
            .and_then(|s| s.base.get(MODULE_MAP_FILE));

        if let Some(SettingValue::String(module_map)) = declared {
            module_maps.push(PathBuf::from(module_map));
        }
    }

    Ok(module_maps)
}

/// Rewrite a target's settings with the flags for `module_maps`.
///
/// An absent settings object behaves as an implicit empty one with the
/// recommended default policy. Declarations are deduplicated by their
/// resolved relative path, keeping first-discovery order.
fn inject_flags(project_path: &Path, settings: Option<Settings>, module_maps: &[PathBuf]) -> Settings {
    let mut settings = settings.unwrap_or_default();

    let mut cflag_groups = Vec::new();
    let mut swift_groups = Vec::new();
    let mut header_groups = Vec::new();
    let mut seen = HashSet::new();

    for module_map in module_maps {
        let flag_path = source_root_relative(project_path, module_map);
        if !seen.insert(flag_path.clone()) {
            continue;
        }

        let flag = format!("-fmodule-map-file={flag_path}");
        cflag_groups.push(vec![flag.clone()]);
        swift_groups.push(vec![SWIFT_PASSTHROUGH.to_string(), flag]);

        if let Some(directory) = module_map.parent() {
            header_groups.push(vec![source_root_relative(project_path, directory)]);
        }
    }

    append_list_entries(&mut settings.base, OTHER_CFLAGS, &cflag_groups);
    append_list_entries(&mut settings.base, OTHER_SWIFT_FLAGS, &swift_groups);
    append_list_entries(&mut settings.base, HEADER_SEARCH_PATHS, &header_groups);
    append_list_entries(
        &mut settings.base,
        OTHER_LDFLAGS,
        &[vec![OBJC_LINKER_FLAG.to_string()]],
    );

    settings
}

/// Express `path` relative to the consuming project's root, anchored at
/// the source-root variable.
fn source_root_relative(project_path: &Path, path: &Path) -> String {
    match pathdiff::diff_paths(path, project_path) {
        Some(relative) => format!("{}/{}", SOURCE_ROOT, relative.display()),
        // Paths with disjoint prefixes cannot be relativized; keep the
        // declaration's absolute path.
        None => path.display().to_string(),
    }
}
