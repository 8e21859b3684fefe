//! Compose document loader

use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, span, trace, Level};

use super::ServiceDefinition;
use crate::core::{ComposeVizError, Result};

/// Compose file names probed by [`ComposeLoader::find_compose_file`], in order
pub const DEFAULT_COMPOSE_FILES: &[&str] = &[
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// A named service from the `services` mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeService {
    pub name: String,
    pub definition: ServiceDefinition,
}

impl ComposeService {
    pub fn new(name: impl Into<String>, definition: ServiceDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }
}

/// The parts of a compose document the diagram pipeline consumes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDocument {
    /// Services in document order
    pub services: Vec<ComposeService>,
}

impl ComposeDocument {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Look up a service by name
    pub fn service(&self, name: &str) -> Option<&ComposeService> {
        self.services.iter().find(|s| s.name == name)
    }
}

/// Reads compose files into a [`ComposeDocument`]
pub struct ComposeLoader;

impl ComposeLoader {
    /// Find a compose file in `dir` using the conventional names
    pub fn find_compose_file(dir: &Path) -> Option<PathBuf> {
        DEFAULT_COMPOSE_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Load and parse the compose file at `path`
    ///
    /// A missing or unreadable file is a configuration error. Content that
    /// is not UTF-8 is a parse error, as is anything [`ComposeLoader::parse_str`]
    /// rejects.
    pub fn load(path: &Path) -> Result<ComposeDocument> {
        let load_span = span!(Level::INFO, "load_compose", path = %path.display());
        let _enter = load_span.enter();

        if !path.exists() {
            return Err(ComposeVizError::file_not_found(path));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            ComposeVizError::configuration(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;
        let content = String::from_utf8(bytes).map_err(|e| {
            ComposeVizError::parse(format!("'{}' is not valid UTF-8: {}", path.display(), e))
        })?;
        debug!(bytes = content.len(), "Read compose file");

        let document = Self::parse_str(&content)?;
        info!(services = document.len(), "Loaded compose document");
        Ok(document)
    }

    /// Parse compose YAML text
    ///
    /// Empty documents, non-mapping documents, and documents without a
    /// `services` mapping all yield an empty service list.
    pub fn parse_str(content: &str) -> Result<ComposeDocument> {
        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            debug!("Compose document is empty");
            return Ok(ComposeDocument::default());
        }

        let root: Value = serde_yaml::from_str(content)?;

        let Some(services) = root.get("services").and_then(Value::as_mapping) else {
            debug!("No services mapping found");
            return Ok(ComposeDocument::default());
        };

        let services = services
            .iter()
            .filter_map(|(key, body)| {
                let Some(name) = key.as_str() else {
                    trace!(?key, "Skipping service with non-string name");
                    return None;
                };
                trace!(service = name, "Reading service definition");
                Some(ComposeService::new(name, ServiceDefinition::from_value(body)))
            })
            .collect();

        Ok(ComposeDocument { services })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_keeps_document_order() {
        let doc = ComposeLoader::parse_str(
            r#"
services:
  zookeeper:
    image: zookeeper:3.9
  kafka:
    image: bitnami/kafka
  api:
    build: .
"#,
        )
        .unwrap();
        let names: Vec<_> = doc.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zookeeper", "kafka", "api"]);
        assert!(doc.service("api").unwrap().definition.image.is_none());
    }

    #[test]
    fn test_empty_and_shapeless_documents() {
        assert!(ComposeLoader::parse_str("").unwrap().is_empty());
        assert!(ComposeLoader::parse_str("version: '3'").unwrap().is_empty());
        assert!(ComposeLoader::parse_str("- just\n- a list").unwrap().is_empty());
        assert!(ComposeLoader::parse_str("services: 12").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = ComposeLoader::parse_str("services: [unclosed").unwrap_err();
        assert!(matches!(err, ComposeVizError::Parse { .. }));
    }

    #[test]
    fn test_non_string_service_keys_skipped() {
        let doc = ComposeLoader::parse_str("services:\n  1: {}\n  web: {}\n").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.services[0].name, "web");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = ComposeLoader::load(&dir.path().join("docker-compose.yml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docker-compose.yml");
        fs::write(&path, "services:\n  redis:\n    image: redis:7\n").unwrap();

        let doc = ComposeLoader::load(&path).unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_find_compose_file_prefers_modern_name() {
        let dir = tempdir().unwrap();
        assert!(ComposeLoader::find_compose_file(dir.path()).is_none());

        fs::write(dir.path().join("docker-compose.yml"), "").unwrap();
        fs::write(dir.path().join("compose.yaml"), "").unwrap();
        let found = ComposeLoader::find_compose_file(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "compose.yaml");
    }
}
