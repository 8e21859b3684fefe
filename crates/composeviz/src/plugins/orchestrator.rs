//! Pipeline orchestrator
//!
//! Runs the whole transformation: Loader → Graph builder → Renderers.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, span, Level};

use super::{MermaidRenderer, PlantUmlRenderer};
use crate::compose::{ComposeDocument, ComposeLoader};
use crate::core::{Database, OutputFormat, RenderConfig, Renderer};
use crate::graph::ServiceGraph;

/// Both rendered diagrams for one compose document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagrams {
    pub mermaid: String,
    pub plantuml: String,
}

impl Diagrams {
    /// Diagram source for a notation
    pub fn get(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Mermaid => &self.mermaid,
            OutputFormat::PlantUml => &self.plantuml,
        }
    }

    /// Diagrams paired with their notation, Mermaid first
    pub fn iter(&self) -> impl Iterator<Item = (OutputFormat, &str)> {
        OutputFormat::all()
            .iter()
            .map(move |&format| (format, self.get(format)))
    }
}

/// Coordinates loading, graph construction and rendering
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    mermaid: MermaidRenderer,
    plantuml: PlantUmlRenderer,
}

impl Orchestrator {
    /// Create an orchestrator with default render settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orchestrator with a specific render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            mermaid: MermaidRenderer::new(),
            plantuml: PlantUmlRenderer::with_config(config),
        }
    }

    /// Load the compose file at `path` and render both diagrams
    pub fn process_file(&self, path: &Path) -> Result<(ServiceGraph, Diagrams)> {
        let document = ComposeLoader::load(path)?;
        self.process_document(&document)
    }

    /// Parse compose YAML text and render both diagrams
    pub fn process_str(&self, input: &str) -> Result<Diagrams> {
        let document = ComposeLoader::parse_str(input)?;
        let (_, diagrams) = self.process_document(&document)?;
        Ok(diagrams)
    }

    /// Build the graph for a loaded document and render both diagrams
    pub fn process_document(
        &self,
        document: &ComposeDocument,
    ) -> Result<(ServiceGraph, Diagrams)> {
        let process_span = span!(Level::INFO, "process_compose", services = document.len());
        let _enter = process_span.enter();

        let graph = ServiceGraph::from_document(document);
        let diagrams = self.render(&graph)?;

        info!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            "Rendered diagrams"
        );
        Ok((graph, diagrams))
    }

    /// Render both diagrams for an existing graph
    pub fn render(&self, graph: &ServiceGraph) -> Result<Diagrams> {
        let mermaid = self.mermaid.render(graph)?;
        debug!(renderer = self.mermaid.name(), bytes = mermaid.len(), "Rendered");
        let plantuml = self.plantuml.render(graph)?;
        debug!(renderer = self.plantuml.name(), bytes = plantuml.len(), "Rendered");

        Ok(Diagrams { mermaid, plantuml })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STACK: &str = r#"
services:
  zookeeper:
    image: zookeeper
  kafka:
    ports: ["9092:9092"]
    depends_on: [zookeeper]
"#;

    #[test]
    fn test_process_str() {
        let diagrams = Orchestrator::new().process_str(STACK).unwrap();
        assert!(diagrams.mermaid.starts_with("graph LR"));
        assert!(diagrams.plantuml.starts_with("@startuml"));
        assert!(diagrams.plantuml.ends_with("@enduml"));
    }

    #[test]
    fn test_deterministic_output() {
        let orchestrator = Orchestrator::new();
        let first = orchestrator.process_str(STACK).unwrap();
        let second = orchestrator.process_str(STACK).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_diagrams_iter_order() {
        let diagrams = Orchestrator::new().process_str(STACK).unwrap();
        let formats: Vec<_> = diagrams.iter().map(|(f, _)| f).collect();
        assert_eq!(formats, vec![OutputFormat::Mermaid, OutputFormat::PlantUml]);
        assert_eq!(diagrams.get(OutputFormat::Mermaid), diagrams.mermaid);
    }

    #[test]
    fn test_custom_title() {
        let orchestrator = Orchestrator::with_config(RenderConfig::new("Streaming"));
        let diagrams = orchestrator.process_str(STACK).unwrap();
        assert!(diagrams.plantuml.contains("\ntitle Streaming\n"));
    }

    #[test]
    fn test_parse_error_propagates() {
        assert!(Orchestrator::new().process_str("services: [").is_err());
    }
}
