//! IDE template macro injection.
//!
//! When the configuration declares template macros (currently a file
//! header), this stage schedules a macros property-list write into the
//! workspace container and every project container. The snapshot itself
//! is unchanged; the work is all side effects.

use std::path::{Path, PathBuf};

use crate::core::WorkspaceSnapshot;
use crate::mappers::side_effect::SideEffectDescriptor;
use crate::mappers::workspace::{MappingError, WorkspaceMapping};
use crate::util::config::IdeTemplateMacros;

const MACROS_FILE: &str = "IDETemplateMacros.plist";
const SHARED_DATA_DIRECTORY: &str = "xcshareddata";

/// Extension of a project's native container.
const PROJECT_CONTAINER_EXTENSION: &str = "xcodeproj";

pub struct IdeTemplateMacrosMapper {
    macros: Option<IdeTemplateMacros>,
}

impl IdeTemplateMacrosMapper {
    pub fn new(macros: Option<IdeTemplateMacros>) -> Self {
        IdeTemplateMacrosMapper { macros }
    }

    fn macros_path(container: &Path) -> PathBuf {
        container.join(SHARED_DATA_DIRECTORY).join(MACROS_FILE)
    }
}

impl WorkspaceMapping for IdeTemplateMacrosMapper {
    fn name(&self) -> &'static str {
        "ide-template-macros"
    }

    fn map(
        &self,
        snapshot: WorkspaceSnapshot,
    ) -> Result<(WorkspaceSnapshot, Vec<SideEffectDescriptor>), MappingError> {
        let Some(file_header) = self
            .macros
            .as_ref()
            .and_then(|macros| macros.file_header.as_deref())
        else {
            return Ok((snapshot, Vec::new()));
        };

        let contents = template_macros_plist(file_header);
        let mut side_effects = Vec::new();

        if let Some(container) = &snapshot.workspace.container_path {
            side_effects.push(SideEffectDescriptor::file_write(
                Self::macros_path(container),
                contents.clone(),
            ));
        }

        for project in &snapshot.projects {
            let container = project
                .path
                .join(format!("{}.{}", project.name, PROJECT_CONTAINER_EXTENSION));
            side_effects.push(SideEffectDescriptor::file_write(
                Self::macros_path(&container),
                contents.clone(),
            ));
        }

        Ok((snapshot, side_effects))
    }
}

fn template_macros_plist(file_header: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>FILEHEADER</key>
	<string>{}</string>
</dict>
</plist>
"#,
        escape_xml(file_header)
    )
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
