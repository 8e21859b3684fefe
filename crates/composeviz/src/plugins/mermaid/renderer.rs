//! Mermaid flowchart renderer
//!
//! Emits a left-to-right `graph` with one `subgraph` per role group and one
//! arrow per dependency edge.

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{Database, OutputFormat, Renderer};
use crate::graph::ServiceGraph;

/// Renders a [`ServiceGraph`] as Mermaid flowchart source
#[derive(Debug, Clone, Default)]
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer<ServiceGraph> for MermaidRenderer {
    fn render(&self, graph: &ServiceGraph) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_mermaid", nodes = graph.node_count());
        let _enter = render_span.enter();

        let mut lines = vec!["graph LR".to_string()];

        for group in &graph.grouping() {
            lines.push(format!("  subgraph {}", group.label));
            for member in &group.members {
                if let Some(node) = graph.get_node(member) {
                    lines.push(format!("    {}[\"{}\"]", node.name, node.label()));
                }
            }
            lines.push("  end".to_string());
        }

        for edge in graph.edges() {
            lines.push(format!("  {} --> {}", edge.from, edge.to));
        }

        debug!(lines = lines.len(), "Rendered Mermaid diagram");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "mermaid"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Mermaid
    }
}
