//! Service dependency graph
//!
//! One node per declared service, one `depends_on` edge per reference to a
//! declared service. Nodes keep document order. Edges are kept grouped by
//! source node (in node order) and by insertion order within a source, so
//! iteration never depends on hashing.

use anyhow::{bail, Result};
use std::collections::HashMap;
use tracing::{debug, info, span, trace, Level};

use super::Grouping;
use crate::classify::classify;
use crate::compose::{ComposeDocument, ComposeService};
use crate::core::{Database, DependencyEdge, ServiceNode};

/// Directed graph of services and their startup dependencies
#[derive(Debug, Default, Clone)]
pub struct ServiceGraph {
    /// Nodes in insertion order
    nodes: Vec<ServiceNode>,
    /// Node name to position in `nodes`
    index: HashMap<String, usize>,
    /// Edges ordered by source position, then insertion
    edges: Vec<DependencyEdge>,
}

impl ServiceGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for a set of services
    ///
    /// Every service is classified and added as a node. References in
    /// `depends_on` to services that are not declared are dropped.
    pub fn build(services: &[ComposeService]) -> Self {
        let build_span = span!(Level::INFO, "build_graph", services = services.len());
        let _enter = build_span.enter();

        let mut graph = Self::new();

        for service in services {
            let role = classify(&service.name, &service.definition);
            trace!(service = %service.name, role = %role, "Classified service");
            graph.insert_node(ServiceNode::new(
                service.name.clone(),
                role,
                service.definition.clone(),
            ));
        }

        for service in services {
            for dependency in &service.definition.depends_on {
                if graph.has_node(dependency) {
                    graph.insert_edge(DependencyEdge::depends_on(
                        dependency.clone(),
                        service.name.clone(),
                    ));
                } else {
                    debug!(
                        service = %service.name,
                        dependency = %dependency,
                        "Dropping dependency on undeclared service"
                    );
                }
            }
        }

        info!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            "Service graph built"
        );
        graph
    }

    /// Build the graph for every service in a document
    pub fn from_document(document: &ComposeDocument) -> Self {
        Self::build(&document.services)
    }

    /// Check if a service exists
    pub fn has_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names of the services `name` depends on, in edge order
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.to == name)
            .map(|e| e.from.as_str())
            .collect()
    }

    /// Names of the services that depend on `name`, in edge order
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.from == name)
            .map(|e| e.to.as_str())
            .collect()
    }

    /// Group the nodes by role domain
    pub fn grouping(&self) -> Grouping {
        Grouping::from_nodes(&self.nodes)
    }

    // Replaces an existing node of the same name in place.
    fn insert_node(&mut self, node: ServiceNode) {
        match self.index.get(&node.name) {
            Some(&position) => self.nodes[position] = node,
            None => {
                self.index.insert(node.name.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    // A repeated dependency collapses onto the existing edge.
    fn insert_edge(&mut self, edge: DependencyEdge) {
        if self.edges.contains(&edge) {
            return;
        }
        let source = self.index[&edge.from];
        let position = self
            .edges
            .iter()
            .position(|e| self.index[&e.from] > source)
            .unwrap_or(self.edges.len());
        self.edges.insert(position, edge);
    }
}

/// `add_node` and `add_edge` assemble a graph by hand, with strict checks.
/// [`ServiceGraph::build`] is the path from a compose document.
impl Database for ServiceGraph {
    type Node = ServiceNode;
    type Edge = DependencyEdge;

    fn add_node(&mut self, node: ServiceNode) -> Result<()> {
        if self.has_node(&node.name) {
            bail!("Service '{}' already exists", node.name);
        }
        self.insert_node(node);
        Ok(())
    }

    fn add_edge(&mut self, edge: DependencyEdge) -> Result<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.has_node(endpoint) {
                bail!("Edge references unknown service '{}'", endpoint);
            }
        }
        self.insert_edge(edge);
        Ok(())
    }

    fn get_node(&self, id: &str) -> Option<&ServiceNode> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    fn nodes(&self) -> impl Iterator<Item = &ServiceNode> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.edges.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::ComposeLoader;

    fn graph(yaml: &str) -> ServiceGraph {
        ServiceGraph::from_document(&ComposeLoader::parse_str(yaml).unwrap())
    }

    #[test]
    fn test_zookeeper_kafka() {
        let graph = graph(
            r#"
services:
  zookeeper:
    image: zookeeper
  kafka:
    ports: ["9092:9092"]
    depends_on: [zookeeper]
"#,
        );
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edges().next().unwrap();
        assert_eq!((edge.from.as_str(), edge.to.as_str()), ("zookeeper", "kafka"));
        assert_eq!(graph.get_node("zookeeper").unwrap().role, "Infra/ZooKeeper");
        assert_eq!(graph.get_node("kafka").unwrap().role, "Messaging/Kafka");
    }

    #[test]
    fn test_dangling_dependency_dropped() {
        let graph = graph("services:\n  api:\n    depends_on: [ghost]\n");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges().all(|e| e.from != "ghost" && e.to != "ghost"));
    }

    #[test]
    fn test_edges_grouped_by_source_order() {
        let graph = graph(
            r#"
services:
  web:
    depends_on: [api]
  api:
    depends_on: [db, cache]
  worker:
    depends_on: [db]
  db: {}
  cache: {}
"#,
        );
        let edges: Vec<_> = graph
            .edges()
            .map(|e| format!("{}->{}", e.from, e.to))
            .collect();
        assert_eq!(edges, vec!["api->web", "db->api", "db->worker", "cache->api"]);
    }

    #[test]
    fn test_repeated_dependency_is_one_edge() {
        let graph = graph("services:\n  db: {}\n  api:\n    depends_on: [db, db]\n");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_cycle_is_kept() {
        let graph = graph("services:\n  a:\n    depends_on: [b]\n  b:\n    depends_on: [a]\n");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dependencies_of("a"), vec!["b"]);
        assert_eq!(graph.dependents_of("a"), vec!["b"]);
    }

    #[test]
    fn test_hand_built_graph_renders() {
        use crate::core::Renderer;
        use crate::plugins::MermaidRenderer;

        let mut graph = ServiceGraph::new();
        graph
            .add_node(ServiceNode::new("db", "DB/PostgreSQL", Default::default()))
            .unwrap();
        graph
            .add_node(ServiceNode::new("api", "Web/App", Default::default()))
            .unwrap();
        graph.add_edge(DependencyEdge::depends_on("db", "api")).unwrap();

        assert_eq!(graph.dependencies_of("api"), vec!["db"]);
        let mermaid = MermaidRenderer::new().render(&graph).unwrap();
        assert!(mermaid.lines().any(|l| l == "  db --> api"));
    }

    #[test]
    fn test_database_trait_rejects_unknown_endpoints() {
        let mut graph = ServiceGraph::new();
        graph
            .add_node(ServiceNode::new("db", "DB/PostgreSQL", Default::default()))
            .unwrap();
        assert!(graph
            .add_node(ServiceNode::new("db", "DB/MySQL", Default::default()))
            .is_err());
        assert!(graph.add_edge(DependencyEdge::depends_on("db", "api")).is_err());

        graph.clear();
        assert_eq!(graph.node_count(), 0);
        assert!(!graph.has_node("db"));
    }
}
