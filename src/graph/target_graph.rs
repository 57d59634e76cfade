//! Target dependency graph.
//!
//! Nodes are (project path, target name) pairs, edges the declared
//! dependencies resolved against the workspace's project-path index. A
//! graph is built once from a snapshot and is read-only afterwards, so it
//! can be shared across parallel per-target traversals.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::{Project, WorkspaceSnapshot};
use crate::graph::errors::GraphError;

/// Identity of a target within a workspace snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetNode {
    /// Path of the owning project
    pub project_path: PathBuf,

    /// Target name
    pub target_name: String,
}

impl fmt::Display for TargetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.project_path.display(), self.target_name)
    }
}

/// Index from project path to its position in the snapshot's project list.
///
/// Built once per pipeline run and shared read-only; avoids repeated
/// linear scans over the project list during dependency resolution.
#[derive(Debug, Clone, Default)]
pub struct ProjectPathIndex {
    positions: HashMap<PathBuf, usize>,
}

impl ProjectPathIndex {
    pub fn new(projects: &[Project]) -> Self {
        let positions = projects
            .iter()
            .enumerate()
            .map(|(position, project)| (project.path.clone(), position))
            .collect();
        ProjectPathIndex { positions }
    }

    /// Position of the project with the given path, if present.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.positions.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.positions.contains_key(path)
    }
}

/// The resolved target dependency graph of a workspace snapshot.
#[derive(Debug, Clone)]
pub struct TargetGraph {
    graph: DiGraph<TargetNode, ()>,
    nodes: HashMap<(PathBuf, String), NodeIndex>,
}

impl TargetGraph {
    /// Build the graph for a snapshot, resolving every declared dependency.
    ///
    /// Cross-project references are resolved through the project-path
    /// index; a reference to a project or target absent from the snapshot
    /// is a hard error.
    pub fn build(
        snapshot: &WorkspaceSnapshot,
        index: &ProjectPathIndex,
    ) -> Result<Self, GraphError> {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();

        for project in &snapshot.projects {
            for target in &project.targets {
                let node = TargetNode {
                    project_path: project.path.clone(),
                    target_name: target.name.clone(),
                };
                let node_index = graph.add_node(node);
                nodes.insert((project.path.clone(), target.name.clone()), node_index);
            }
        }

        for project in &snapshot.projects {
            for target in &project.targets {
                let from = nodes[&(project.path.clone(), target.name.clone())];

                for dependency in &target.dependencies {
                    let owner = dependency.project_path().unwrap_or(&project.path);
                    let resolved = index.position(owner).and_then(|_| {
                        nodes.get(&(owner.to_path_buf(), dependency.target_name().to_string()))
                    });

                    let Some(&to) = resolved else {
                        return Err(GraphError::UnresolvedDependency {
                            project: project.path.clone(),
                            target: target.name.clone(),
                            dependency: dependency.clone(),
                        });
                    };

                    graph.add_edge(from, to, ());
                }
            }
        }

        Ok(TargetGraph { graph, nodes })
    }

    /// Look up the node for a (project path, target name) pair.
    pub fn node(&self, project_path: &Path, target_name: &str) -> Option<NodeIndex> {
        self.nodes
            .get(&(project_path.to_path_buf(), target_name.to_string()))
            .copied()
    }

    /// Identity of the target at a node.
    pub fn target_node(&self, index: NodeIndex) -> &TargetNode {
        &self.graph[index]
    }

    /// Number of targets in the graph.
    pub fn target_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Direct dependencies of a node, in declaration order.
    fn dependencies(&self, index: NodeIndex) -> Vec<NodeIndex> {
        // petgraph iterates outgoing edges most-recently-added first;
        // reverse to recover declaration order.
        let mut deps: Vec<NodeIndex> = self.graph.neighbors(index).collect();
        deps.reverse();
        deps
    }

    /// Transitive dependency closure of a target, excluding the target
    /// itself, in deterministic pre-order.
    ///
    /// Dependencies are visited in the order they are declared on each
    /// target, depth-first, each node at most once, so diamonds collapse
    /// to a single visit. Revisiting a node still on the current path is
    /// a cycle and fails rather than looping.
    pub fn dependency_closure(&self, start: NodeIndex) -> Result<Vec<NodeIndex>, GraphError> {
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        let mut order = Vec::new();
        self.visit(start, &mut visited, &mut path, &mut order)?;
        Ok(order)
    }

    fn visit(
        &self,
        index: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        path: &mut Vec<NodeIndex>,
        order: &mut Vec<NodeIndex>,
    ) -> Result<(), GraphError> {
        path.push(index);

        for dep in self.dependencies(index) {
            if path.contains(&dep) {
                let mut chain: Vec<String> =
                    path.iter().map(|node| self.graph[*node].to_string()).collect();
                chain.push(self.graph[dep].to_string());
                return Err(GraphError::CyclicDependency { chain });
            }
            if !visited.insert(dep) {
                continue;
            }
            order.push(dep);
            self.visit(dep, visited, path, order)?;
        }

        path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Target, TargetDependency, Workspace};

    fn snapshot(projects: Vec<Project>) -> WorkspaceSnapshot {
        let workspace = Workspace::new("/ws", "Test")
            .with_projects(projects.iter().map(|p| p.path.clone()).collect());
        WorkspaceSnapshot::new(workspace, projects)
    }

    fn closure_names(graph: &TargetGraph, project: &str, target: &str) -> Vec<String> {
        let start = graph.node(Path::new(project), target).unwrap();
        graph
            .dependency_closure(start)
            .unwrap()
            .into_iter()
            .map(|node| graph.target_node(node).target_name.clone())
            .collect()
    }

    #[test]
    fn test_build_resolves_cross_project_references() {
        let snapshot = snapshot(vec![
            Project::new("/ws/A", "A").with_targets(vec![Target::new("App")
                .with_dependencies(vec![TargetDependency::project("Core", "/ws/B")])]),
            Project::new("/ws/B", "B").with_targets(vec![Target::new("Core")]),
        ]);
        let index = ProjectPathIndex::new(&snapshot.projects);

        let graph = TargetGraph::build(&snapshot, &index).unwrap();
        assert_eq!(graph.target_count(), 2);
        assert_eq!(closure_names(&graph, "/ws/A", "App"), vec!["Core"]);
    }

    #[test]
    fn test_unresolved_project_reference_fails() {
        let snapshot = snapshot(vec![Project::new("/ws/A", "A").with_targets(vec![
            Target::new("App").with_dependencies(vec![TargetDependency::project(
                "Core",
                "/ws/Missing",
            )]),
        ])]);
        let index = ProjectPathIndex::new(&snapshot.projects);

        let err = TargetGraph::build(&snapshot, &index).unwrap_err();
        assert!(matches!(err, GraphError::UnresolvedDependency { .. }));
    }

    #[test]
    fn test_unresolved_target_reference_fails() {
        let snapshot = snapshot(vec![Project::new("/ws/A", "A").with_targets(vec![
            Target::new("App").with_dependencies(vec![TargetDependency::target("Missing")]),
        ])]);
        let index = ProjectPathIndex::new(&snapshot.projects);

        let err = TargetGraph::build(&snapshot, &index).unwrap_err();
        assert!(matches!(err, GraphError::UnresolvedDependency { .. }));
    }

    #[test]
    fn test_closure_is_declaration_order_preorder() {
        // App -> [First, Second], First -> [Nested]
        let snapshot = snapshot(vec![Project::new("/ws/A", "A").with_targets(vec![
            Target::new("App").with_dependencies(vec![
                TargetDependency::target("First"),
                TargetDependency::target("Second"),
            ]),
            Target::new("First").with_dependencies(vec![TargetDependency::target("Nested")]),
            Target::new("Second"),
            Target::new("Nested"),
        ])]);
        let index = ProjectPathIndex::new(&snapshot.projects);
        let graph = TargetGraph::build(&snapshot, &index).unwrap();

        assert_eq!(
            closure_names(&graph, "/ws/A", "App"),
            vec!["First", "Nested", "Second"]
        );
    }

    #[test]
    fn test_diamond_is_visited_once() {
        let snapshot = snapshot(vec![Project::new("/ws/A", "A").with_targets(vec![
            Target::new("App").with_dependencies(vec![
                TargetDependency::target("Left"),
                TargetDependency::target("Right"),
            ]),
            Target::new("Left").with_dependencies(vec![TargetDependency::target("Base")]),
            Target::new("Right").with_dependencies(vec![TargetDependency::target("Base")]),
            Target::new("Base"),
        ])]);
        let index = ProjectPathIndex::new(&snapshot.projects);
        let graph = TargetGraph::build(&snapshot, &index).unwrap();

        assert_eq!(
            closure_names(&graph, "/ws/A", "App"),
            vec!["Left", "Base", "Right"]
        );
    }

    #[test]
    fn test_cycle_is_detected() {
        let snapshot = snapshot(vec![Project::new("/ws/A", "A").with_targets(vec![
            Target::new("App").with_dependencies(vec![TargetDependency::target("Core")]),
            Target::new("Core").with_dependencies(vec![TargetDependency::target("App")]),
        ])]);
        let index = ProjectPathIndex::new(&snapshot.projects);
        let graph = TargetGraph::build(&snapshot, &index).unwrap();

        let start = graph.node(Path::new("/ws/A"), "App").unwrap();
        let err = graph.dependency_closure(start).unwrap_err();
        match err {
            GraphError::CyclicDependency { chain } => {
                assert_eq!(chain.first(), chain.last());
                assert!(chain.iter().any(|entry| entry.ends_with(":Core")));
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let snapshot = snapshot(vec![Project::new("/ws/A", "A").with_targets(vec![
            Target::new("App").with_dependencies(vec![TargetDependency::target("App")]),
        ])]);
        let index = ProjectPathIndex::new(&snapshot.projects);
        let graph = TargetGraph::build(&snapshot, &index).unwrap();

        let start = graph.node(Path::new("/ws/A"), "App").unwrap();
        assert!(matches!(
            graph.dependency_closure(start),
            Err(GraphError::CyclicDependency { .. })
        ));
    }
}
