use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Edge weight of [`DependencyGraph`]: the position of the import in the
/// package's dependency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportEdge {
    pub order: usize,
}

pub type DependencyGraph = DiGraph<String, ImportEdge>;

/// Package → dependencies, in insertion order. Duplicate dependencies are
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: IndexMap<String, Vec<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `package` with no dependencies if it is not present yet.
    pub fn ensure_package(&mut self, package: &str) {
        if !self.entries.contains_key(package) {
            self.entries.insert(package.to_string(), Vec::new());
        }
    }

    pub fn add_dependency(&mut self, package: &str, dependency: String) {
        self.ensure_package(package);
        if let Some(deps) = self.entries.get_mut(package) {
            deps.push(dependency);
        }
    }

    pub fn get(&self, package: &str) -> Option<&[String]> {
        self.entries.get(package).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(package, deps)| (package.as_str(), deps.as_slice()))
    }

    /// Every (package, dependency) pair, in emission order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(package, deps)| deps.iter().map(move |dep| (package, dep.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn package_count(&self) -> usize {
        self.entries.len()
    }

    pub fn dependency_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// One node per distinct name, one edge per dependency occurrence.
    pub fn to_graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        let mut node_map: HashMap<&str, NodeIndex> = HashMap::new();

        for (package, deps) in self.iter() {
            let source = intern(&mut graph, &mut node_map, package);
            for (order, dep) in deps.iter().enumerate() {
                let target = intern(&mut graph, &mut node_map, dep);
                graph.add_edge(source, target, ImportEdge { order });
            }
        }

        graph
    }
}

fn intern<'a>(
    graph: &mut DependencyGraph,
    node_map: &mut HashMap<&'a str, NodeIndex>,
    name: &'a str,
) -> NodeIndex {
    *node_map
        .entry(name)
        .or_insert_with(|| graph.add_node(name.to_string()))
}

impl<P, D> FromIterator<(P, Vec<D>)> for DependencyMap
where
    P: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, Vec<D>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (package, deps) in iter {
            let package = package.into();
            map.ensure_package(&package);
            for dep in deps {
                map.add_dependency(&package, dep.into());
            }
        }
        map
    }
}
