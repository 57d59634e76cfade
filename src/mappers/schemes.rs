//! Scheme generation stages.
//!
//! Scheme semantics live downstream; these stages only decide which
//! schemes exist and which targets they cover, honoring the ordering
//! contract that identifier assignment runs first.

use std::collections::BTreeSet;

use crate::core::{Scheme, TargetReference, WorkspaceSnapshot};
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingError, WorkspaceMapping};

/// Generates the all-targets workspace scheme.
///
/// Auto-generation can be disabled by configuration for interactive use,
/// but automated build/test flows need schemes to exist, so the force
/// flag is threaded per call and wins over the configuration.
pub struct AutogeneratedSchemeMapper {
    enabled: bool,
    forced: bool,
}

impl AutogeneratedSchemeMapper {
    pub fn new(enabled: bool, forced: bool) -> Self {
        AutogeneratedSchemeMapper { enabled, forced }
    }
}

impl WorkspaceMapping for AutogeneratedSchemeMapper {
    fn name(&self) -> &'static str {
        "autogenerated-schemes"
    }

    fn map(
        &self,
        mut snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        if !self.enabled && !self.forced {
            tracing::debug!("scheme auto-generation disabled");
            return Ok((snapshot, Vec::new()));
        }

        let build_targets = all_target_references(&snapshot);
        let scheme = Scheme::new(
            format!("{}-Workspace", snapshot.workspace.name),
            build_targets,
        );
        snapshot.workspace.upsert_scheme(scheme);

        Ok((snapshot, Vec::new()))
    }
}

/// Narrows scheme generation to a caller-supplied set of target names,
/// used to build only what caching needs.
pub struct CacheableSchemesMapper {
    included_targets: BTreeSet<String>,
}

impl CacheableSchemesMapper {
    pub fn new(included_targets: BTreeSet<String>) -> Self {
        CacheableSchemesMapper { included_targets }
    }
}

impl WorkspaceMapping for CacheableSchemesMapper {
    fn name(&self) -> &'static str {
        "cacheable-schemes"
    }

    fn map(
        &self,
        mut snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        let build_targets: Vec<TargetReference> = all_target_references(&snapshot)
            .into_iter()
            .filter(|reference| self.included_targets.contains(&reference.name))
            .collect();

        let scheme = Scheme::new(format!("{}-Cache", snapshot.workspace.name), build_targets);
        snapshot.workspace.upsert_scheme(scheme);

        Ok((snapshot, Vec::new()))
    }
}

/// Every target of the snapshot, in project order then declaration order.
fn all_target_references(snapshot: &WorkspaceSnapshot) -> Vec<TargetReference> {
    snapshot
        .projects
        .iter()
        .flat_map(|project| {
            project
                .targets
                .iter()
                .map(|target| TargetReference::new(project.path.clone(), target.name.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::core::{Project, Target, Workspace};

    fn snapshot() -> WorkspaceSnapshot {
        WorkspaceSnapshot::new(
            Workspace::new("/ws", "App")
                .with_projects(vec![PathBuf::from("/ws/A"), PathBuf::from("/ws/B")]),
            vec![
                Project::new("/ws/A", "A").with_targets(vec![Target::new("App")]),
                Project::new("/ws/B", "B")
                    .with_targets(vec![Target::new("Core"), Target::new("CoreTests")]),
            ],
        )
    }

    #[test]
    fn test_generates_workspace_scheme_over_all_targets() {
        let stage = AutogeneratedSchemeMapper::new(true, false);

        let (mapped, _) = stage.map(snapshot()).unwrap();
        let scheme = &mapped.workspace.schemes[0];
        assert_eq!(scheme.name, "App-Workspace");
        let names: Vec<_> = scheme
            .build_targets
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["App", "Core", "CoreTests"]);
    }

    #[test]
    fn test_disabled_and_not_forced_is_a_no_op() {
        let stage = AutogeneratedSchemeMapper::new(false, false);

        let (mapped, _) = stage.map(snapshot()).unwrap();
        assert!(mapped.workspace.schemes.is_empty());
    }

    #[test]
    fn test_force_overrides_disabled_configuration() {
        let stage = AutogeneratedSchemeMapper::new(false, true);

        let (mapped, _) = stage.map(snapshot()).unwrap();
        assert_eq!(mapped.workspace.schemes.len(), 1);
    }

    #[test]
    fn test_cacheable_scheme_is_narrowed_to_included_targets() {
        let stage =
            CacheableSchemesMapper::new(BTreeSet::from(["Core".to_string(), "App".to_string()]));

        let (mapped, _) = stage.map(snapshot()).unwrap();
        let scheme = &mapped.workspace.schemes[0];
        assert_eq!(scheme.name, "App-Cache");
        let names: Vec<_> = scheme
            .build_targets
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["App", "Core"]);
    }

    #[test]
    fn test_regeneration_replaces_existing_scheme() {
        let stage = AutogeneratedSchemeMapper::new(true, false);

        let (once, _) = stage.map(snapshot()).unwrap();
        let (twice, _) = stage.map(once.clone()).unwrap();
        assert_eq!(twice, once);
    }
}
