//! PlantUML component renderer
//!
//! Emits one `package` per role group and one component per service.
//! Component aliases replace `-` with `_` since PlantUML identifiers cannot
//! contain dashes.

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{Database, OutputFormat, RenderConfig, Renderer};
use crate::graph::ServiceGraph;

/// Renders a [`ServiceGraph`] as PlantUML component source
#[derive(Debug, Clone, Default)]
pub struct PlantUmlRenderer {
    config: RenderConfig,
}

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }
}

/// PlantUML alias for a service name
pub fn component_alias(name: &str) -> String {
    name.replace('-', "_")
}

impl Renderer<ServiceGraph> for PlantUmlRenderer {
    fn render(&self, graph: &ServiceGraph) -> Result<String> {
        let render_span = span!(Level::DEBUG, "render_plantuml", nodes = graph.node_count());
        let _enter = render_span.enter();

        let mut lines = vec![
            "@startuml".to_string(),
            "skinparam componentStyle rectangle".to_string(),
            format!("title {}", self.config.title),
        ];

        for group in &graph.grouping() {
            lines.push(format!("package \"{}\" {{", group.label));
            for member in &group.members {
                if let Some(node) = graph.get_node(member) {
                    lines.push(format!(
                        "  [\"{}\"] as {}",
                        node.label(),
                        component_alias(&node.name)
                    ));
                }
            }
            lines.push("}".to_string());
        }

        for edge in graph.edges() {
            lines.push(format!(
                "{} --> {}",
                component_alias(&edge.from),
                component_alias(&edge.to)
            ));
        }

        lines.push("@enduml".to_string());

        debug!(lines = lines.len(), "Rendered PlantUML diagram");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::PlantUml
    }
}
