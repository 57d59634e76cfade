//! Graph error types and diagnostics.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::TargetDependency;
use crate::util::diagnostic::Diagnostic;

/// Error while building or traversing the target dependency graph.
///
/// Both variants are data-integrity failures of the input snapshot; there
/// is nothing transient to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum GraphError {
    #[error(
        "in target `{target}` of project `{}`: unresolved dependency `{dependency}`",
        project.display()
    )]
    #[diagnostic(
        code(slipway::graph::unresolved_dependency),
        help("check that the referenced project and target are part of the workspace")
    )]
    UnresolvedDependency {
        project: PathBuf,
        target: String,
        dependency: TargetDependency,
    },

    #[error("cyclic dependency: {}", chain.join(" -> "))]
    #[diagnostic(
        code(slipway::graph::cyclic_dependency),
        help("break the cycle by removing or restructuring target dependencies")
    )]
    CyclicDependency { chain: Vec<String> },
}

impl GraphError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GraphError::UnresolvedDependency {
                project,
                target,
                dependency,
            } => Diagnostic::error(format!(
                "unresolved dependency `{}` in target `{}`",
                dependency, target
            ))
            .in_project(project.clone())
            .note(format!(
                "`{}` is not a target of any project in the workspace",
                dependency
            ))
            .fix("check that the referenced project path is spelled correctly")
            .fix("add the missing project to the workspace before generating"),

            GraphError::CyclicDependency { chain } => {
                Diagnostic::error("cyclic dependency between targets")
                    .note(format!("cycle: {}", chain.join(" -> ")))
                    .fix("break the cycle by removing or restructuring dependencies")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_dependency_diagnostic() {
        let err = GraphError::UnresolvedDependency {
            project: PathBuf::from("/ws/A"),
            target: "App".to_string(),
            dependency: TargetDependency::project("Core", "/ws/Missing"),
        };

        let output = err.to_diagnostic().render(false);
        assert!(output.contains("unresolved dependency"));
        assert!(output.contains("App"));
        assert!(output.contains("/ws/Missing"));
    }

    #[test]
    fn test_cyclic_dependency_diagnostic() {
        let err = GraphError::CyclicDependency {
            chain: vec![
                "/ws/A:App".to_string(),
                "/ws/B:Core".to_string(),
                "/ws/A:App".to_string(),
            ],
        };

        let output = err.to_diagnostic().render(false);
        assert!(output.contains("cycle:"));
        assert!(output.contains("/ws/A:App -> /ws/B:Core -> /ws/A:App"));
    }
}
