//! Core type definitions for the service graph and its renderers

use std::fmt;

use crate::compose::ServiceDefinition;

/// Default diagram title used by the component renderer
pub const DEFAULT_TITLE: &str = "Architecture derived from docker-compose";

/// Kind of relationship an edge records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum EdgeKind {
    /// Startup dependency declared with `depends_on`
    #[default]
    DependsOn,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::DependsOn => write!(f, "depends_on"),
        }
    }
}

/// A service in the graph with its classified role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNode {
    pub name: String,
    pub role: String,
    pub definition: ServiceDefinition,
}

impl ServiceNode {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        definition: ServiceDefinition,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            definition,
        }
    }

    /// Group label: the role's domain prefix
    pub fn group(&self) -> &str {
        crate::classify::role_group(&self.role)
    }

    /// Multi-line diagram label shared by all renderers
    ///
    /// Lines are separated by the two-character `\n` escape that both
    /// Mermaid and PlantUML turn into a line break inside quoted labels.
    pub fn label(&self) -> String {
        service_label(&self.name, &self.role, &self.definition.port_strings())
    }
}

/// Build a node label from its name, role and port specs
pub fn service_label(name: &str, role: &str, ports: &[String]) -> String {
    let base = format!("{}\\n({})", name, role);
    if ports.is_empty() {
        base
    } else {
        format!("{}\\n{}", base, ports.join("\\n"))
    }
}

/// Directed edge from a dependency to the service that depends on it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

impl DependencyEdge {
    pub fn depends_on(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::DependsOn,
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.kind)
    }
}

/// Output notations the pipeline can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Mermaid,
    PlantUml,
}

impl OutputFormat {
    /// File extension used when writing this notation
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mermaid => "mmd",
            OutputFormat::PlantUml => "puml",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Mermaid, OutputFormat::PlantUml]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Mermaid => write!(f, "Mermaid"),
            OutputFormat::PlantUml => write!(f, "PlantUML"),
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Title line for the component diagram
    pub title: String,
}

impl RenderConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
