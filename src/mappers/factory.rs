//! Stage-list construction per operating mode.
//!
//! The factory owns the stage ordering contract: identifier assignment
//! precedes scheme generation, and module-map propagation precedes any
//! stage that fingerprints final settings. Composition is explicit list
//! construction, one list builder per operating mode.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::mappers::automation::AutomationPathMapper;
use crate::mappers::ide_template::IdeTemplateMacrosMapper;
use crate::mappers::identifier::WorkspaceIdentifierMapper;
use crate::mappers::last_upgrade::LastUpgradeVersionMapper;
use crate::mappers::module_map::ModuleMapMapper;
use crate::mappers::project::{ProjectMapping, ProjectWorkspaceMapper};
use crate::mappers::schemes::{AutogeneratedSchemeMapper, CacheableSchemesMapper};
use crate::mappers::workspace::WorkspaceMapping;
use crate::util::config::GenerationConfig;

/// Builds ordered stage lists for the mapping pipeline.
pub struct WorkspaceMapperFactory {
    project_mapper: Arc<dyn ProjectMapping>,
}

impl WorkspaceMapperFactory {
    pub fn new(project_mapper: Arc<dyn ProjectMapping>) -> Self {
        WorkspaceMapperFactory { project_mapper }
    }

    /// The base stage list for plain generation.
    pub fn default(&self, config: &GenerationConfig) -> Vec<Box<dyn WorkspaceMapping>> {
        self.default_with(config, false)
    }

    /// The default list plus a stage narrowing scheme generation to the
    /// targets caching needs.
    pub fn cache(
        &self,
        config: &GenerationConfig,
        included_targets: BTreeSet<String>,
    ) -> Vec<Box<dyn WorkspaceMapping>> {
        let mut mappers = self.default_with(config, false);
        mappers.push(Box::new(CacheableSchemesMapper::new(included_targets)));
        mappers
    }

    /// The stage list for automation commands (build, test).
    ///
    /// Generation is redirected into `workspace_directory`, and scheme
    /// auto-generation is forced on regardless of configuration: automated
    /// flows need schemes to exist even when the user disabled them for
    /// interactive use.
    pub fn automation(
        &self,
        config: &GenerationConfig,
        workspace_directory: PathBuf,
    ) -> Vec<Box<dyn WorkspaceMapping>> {
        let mut mappers: Vec<Box<dyn WorkspaceMapping>> =
            vec![Box::new(AutomationPathMapper::new(workspace_directory))];
        mappers.extend(self.default_with(config, true));
        mappers
    }

    fn default_with(
        &self,
        config: &GenerationConfig,
        force_workspace_schemes: bool,
    ) -> Vec<Box<dyn WorkspaceMapping>> {
        let options = &config.generation;

        let mut mappers: Vec<Box<dyn WorkspaceMapping>> = vec![
            Box::new(ProjectWorkspaceMapper::new(self.project_mapper.clone())),
            Box::new(WorkspaceIdentifierMapper::new()),
            Box::new(IdeTemplateMacrosMapper::new(
                options.ide_template_macros.clone(),
            )),
            Box::new(AutogeneratedSchemeMapper::new(
                options.auto_generate_schemes,
                force_workspace_schemes,
            )),
            Box::new(ModuleMapMapper::new()),
        ];

        if let Some(version) = &options.last_upgrade_check {
            mappers.push(Box::new(LastUpgradeVersionMapper::new(version.clone())));
        }

        mappers
    }
}
