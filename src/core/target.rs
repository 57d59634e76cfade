//! Buildable targets.

use serde::{Deserialize, Serialize};

use crate::core::dependency::TargetDependency;
use crate::core::settings::Settings;

/// A buildable unit within a project.
///
/// An absent settings object means "inherit defaults, no overrides"; it is
/// distinct from an empty one, and mapping stages must preserve that
/// distinction for targets they leave untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Target name, unique within its project
    pub name: String,

    /// Build settings, if any were declared
    pub settings: Option<Settings>,

    /// Declared dependencies, in declaration order
    pub dependencies: Vec<TargetDependency>,
}

impl Target {
    /// Create a target with no settings and no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Target {
            name: name.into(),
            settings: None,
            dependencies: Vec::new(),
        }
    }

    /// Attach declared settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Attach declared dependencies.
    pub fn with_dependencies(mut self, dependencies: Vec<TargetDependency>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::SettingValue;

    #[test]
    fn test_target_builder() {
        let target = Target::new("App")
            .with_settings(Settings::with_base(
                [("SWIFT_VERSION".to_string(), SettingValue::from("5.0"))].into(),
            ))
            .with_dependencies(vec![TargetDependency::target("Core")]);

        assert_eq!(target.name, "App");
        assert_eq!(target.dependencies.len(), 1);
        assert!(target.settings.is_some());
    }

    #[test]
    fn test_absent_settings_is_not_empty_settings() {
        let bare = Target::new("App");
        let empty = Target::new("App").with_settings(Settings::default());

        assert_ne!(bare, empty);
    }
}
