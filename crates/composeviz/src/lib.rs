//! composeviz - Turn docker-compose files into architecture diagrams
//!
//! Reads the `services` of a compose document, assigns each service a
//! `Domain/Technology` role, groups services by domain and renders the
//! dependency graph as Mermaid flowchart and PlantUML component source.
//!
//! # Quick Start
//!
//! ```rust
//! use composeviz::render;
//!
//! let yaml = "services:\n  zookeeper: {}\n  kafka:\n    depends_on: [zookeeper]\n";
//! let diagrams = render(yaml).unwrap();
//! assert!(diagrams.mermaid.contains("  zookeeper --> kafka"));
//! assert!(diagrams.plantuml.contains("zookeeper --> kafka"));
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use composeviz::prelude::*;
//!
//! let document = ComposeLoader::parse_str("services:\n  db:\n    image: postgres:16\n").unwrap();
//! let graph = ServiceGraph::from_document(&document);
//! assert_eq!(graph.get_node("db").unwrap().role, "DB/PostgreSQL");
//!
//! let mermaid = MermaidRenderer::new().render(&graph).unwrap();
//! assert!(mermaid.starts_with("graph LR"));
//! ```

pub mod classify;
pub mod compose;
pub mod core;
pub mod graph;
pub mod output;
pub mod plugins;

pub use crate::core::{
    ComposeVizError, Database, DependencyEdge, EdgeKind, OutputFormat, RenderConfig, Renderer,
    ServiceNode,
};
pub use classify::{classify, explain, Classification, Tier};
pub use plugins::Diagrams;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classify::{classify, explain, Classification, Tier};
    pub use crate::compose::{ComposeDocument, ComposeLoader, ComposeService, ServiceDefinition};
    pub use crate::core::{Database, OutputFormat, RenderConfig, Renderer, ServiceNode};
    pub use crate::graph::{Grouping, ServiceGraph};
    pub use crate::output::OutputWriter;
    pub use crate::plugins::{Diagrams, MermaidRenderer, Orchestrator, PlantUmlRenderer};
}

/// Render compose YAML into both diagram notations
///
/// # Example
/// ```rust
/// let diagrams = composeviz::render("services:\n  cache:\n    image: redis:7\n").unwrap();
/// assert!(diagrams.mermaid.contains("subgraph Cache"));
/// ```
pub fn render(input: &str) -> anyhow::Result<Diagrams> {
    plugins::Orchestrator::new().process_str(input)
}

/// Render compose YAML with a custom render config
pub fn render_with_config(input: &str, config: RenderConfig) -> anyhow::Result<Diagrams> {
    plugins::Orchestrator::with_config(config).process_str(input)
}

/// Parse compose YAML into a service graph without rendering
///
/// # Example
/// ```rust
/// use composeviz::Database;
///
/// let graph = composeviz::parse("services:\n  a: {}\n  b:\n    depends_on: [a]\n").unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub fn parse(input: &str) -> anyhow::Result<graph::ServiceGraph> {
    let document = compose::ComposeLoader::parse_str(input)?;
    Ok(graph::ServiceGraph::from_document(&document))
}
