use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap, BTreeSet};

/// One module as seen across every file that resolved to its id.
///
/// The id is empty when no module declaration was found in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub dependencies: BTreeSet<String>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dependencies: BTreeSet::new(),
        }
    }

    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.add_dependency(dependency);
        self
    }

    /// Returns false when the dependency was already present.
    pub fn add_dependency(&mut self, dependency: impl Into<String>) -> bool {
        self.dependencies.insert(dependency.into())
    }
}

/// Module id to node mapping. Keys and dependency sets only grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, Node>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a node into the graph, unioning its dependencies into any node
    /// already stored under the same id.
    pub fn merge(&mut self, node: Node) {
        match self.nodes.entry(node.id.clone()) {
            btree_map::Entry::Occupied(mut entry) => {
                entry.get_mut().dependencies.extend(node.dependencies);
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(node);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Every `(module, dependency)` pair, grouped by module.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.nodes
            .values()
            .flat_map(|node| {
                node.dependencies
                    .iter()
                    .map(move |dep| (node.id.as_str(), dep.as_str()))
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.dependencies.len()).sum()
    }
}

impl Extend<Node> for DependencyGraph {
    fn extend<T: IntoIterator<Item = Node>>(&mut self, iter: T) {
        for node in iter {
            self.merge(node);
        }
    }
}

impl FromIterator<Node> for DependencyGraph {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
