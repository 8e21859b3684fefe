//! Core renderer trait for diagram output
//!
//! A renderer turns a graph database into diagram source text. Renderers are
//! pure: the same database always produces byte-identical output.

use anyhow::Result;

use super::{Database, OutputFormat};

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use composeviz::core::Renderer;
/// use composeviz::graph::ServiceGraph;
/// use composeviz::plugins::mermaid::MermaidRenderer;
///
/// let graph = ServiceGraph::new();
/// let renderer = MermaidRenderer::new();
/// assert_eq!(renderer.render(&graph).unwrap(), "graph LR");
/// ```
pub trait Renderer<D: Database> {
    /// Render the database into diagram source
    fn render(&self, database: &D) -> Result<String>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the notation this renderer emits
    fn format(&self) -> OutputFormat;
}
