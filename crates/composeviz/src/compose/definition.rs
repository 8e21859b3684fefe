//! Weakly-typed service definitions
//!
//! Compose files in the wild are loosely shaped, so service bodies are read
//! from a raw `serde_yaml::Value` instead of being deserialized into strict
//! structs. Any field with an unexpected shape reads as empty.

use serde_yaml::{Mapping, Value};
use std::fmt;

/// One entry of a service's `ports` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSpec {
    /// Short syntax exactly as written: `"9092"`, `"8080:80"`,
    /// `"127.0.0.1:5432:5432/tcp"` or a bare integer
    Short(String),
    /// Long syntax mapping
    Long {
        target: Option<String>,
        published: Option<String>,
        protocol: Option<String>,
    },
}

impl PortSpec {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Mapping(map) => Some(PortSpec::Long {
                target: get_scalar(map, "target"),
                published: get_scalar(map, "published"),
                protocol: get_scalar(map, "protocol"),
            }),
            other => scalar_to_string(other).map(PortSpec::Short),
        }
    }

    /// Container-side port, if it parses as an integer
    ///
    /// Short syntax drops any `/proto` suffix and keeps the last
    /// colon-separated segment, so `"0.0.0.0:9092:9092/tcp"` yields 9092.
    pub fn container_port(&self) -> Option<u16> {
        match self {
            PortSpec::Short(spec) => parse_container_port(spec),
            PortSpec::Long { target, .. } => target.as_deref().and_then(parse_container_port),
        }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSpec::Short(spec) => write!(f, "{}", spec),
            PortSpec::Long {
                target,
                published,
                protocol,
            } => {
                if let Some(published) = published {
                    write!(f, "{}:", published)?;
                }
                write!(f, "{}", target.as_deref().unwrap_or("?"))?;
                if let Some(protocol) = protocol {
                    write!(f, "/{}", protocol)?;
                }
                Ok(())
            }
        }
    }
}

/// Parse the container port out of a short-syntax port string
pub fn parse_container_port(spec: &str) -> Option<u16> {
    let without_proto = spec.split('/').next().unwrap_or_default();
    let container = without_proto.rsplit(':').next().unwrap_or_default();
    container.trim().parse().ok()
}

/// A single service body from the `services` mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDefinition {
    /// Image reference, e.g. `bitnami/kafka:3.6`
    pub image: Option<String>,
    /// Port entries in document order
    pub ports: Vec<PortSpec>,
    /// Label key/value pairs in document order
    pub labels: Vec<(String, String)>,
    /// Environment entries; `None` when the variable has no value
    pub environment: Vec<(String, Option<String>)>,
    /// Names listed under `depends_on`, in document order
    pub depends_on: Vec<String>,
}

impl ServiceDefinition {
    /// Build a definition from a raw YAML value
    ///
    /// Never fails: non-mapping bodies produce an empty definition and each
    /// field is read independently.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_mapping() else {
            return Self::default();
        };

        Self {
            image: get_scalar(map, "image"),
            ports: read_ports(map.get("ports")),
            labels: read_labels(map.get("labels")),
            environment: read_environment(map.get("environment")),
            depends_on: read_depends_on(map.get("depends_on")),
        }
    }

    /// Port specs rendered as the user wrote them
    pub fn port_strings(&self) -> Vec<String> {
        self.ports.iter().map(|p| p.to_string()).collect()
    }

    /// Container ports that parse, in list order
    pub fn container_ports(&self) -> Vec<u16> {
        self.ports.iter().filter_map(PortSpec::container_port).collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn get_scalar(map: &Mapping, key: &str) -> Option<String> {
    map.get(key).and_then(scalar_to_string)
}

fn read_ports(value: Option<&Value>) -> Vec<PortSpec> {
    value
        .and_then(Value::as_sequence)
        .map(|seq| seq.iter().filter_map(PortSpec::from_value).collect())
        .unwrap_or_default()
}

fn read_labels(value: Option<&Value>) -> Vec<(String, String)> {
    match value {
        Some(Value::Mapping(map)) => map
            .iter()
            .filter_map(|(k, v)| {
                let key = scalar_to_string(k)?;
                Some((key, scalar_to_string(v).unwrap_or_default()))
            })
            .collect(),
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(Value::as_str)
            .map(|item| match item.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (item.to_string(), String::new()),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn read_environment(value: Option<&Value>) -> Vec<(String, Option<String>)> {
    match value {
        Some(Value::Mapping(map)) => map
            .iter()
            .filter_map(|(k, v)| Some((scalar_to_string(k)?, scalar_to_string(v))))
            .collect(),
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(Value::as_str)
            .map(|item| match item.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.to_string())),
                None => (item.to_string(), None),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn read_depends_on(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::Mapping(map)) => map
            .keys()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
