//! Role classification for compose services
//!
//! A service is assigned a `Domain/Technology` role by the first of four
//! tiers that matches:
//!
//! 1. **Token**: a token from the name, image, labels or environment is a
//!    known technology (`kafka` → `Messaging/Kafka`)
//! 2. **Port**: a container port is a well-known one (5432 → `DB/PostgreSQL`)
//! 3. **Keyword**: the name looks like an application or a frontend
//! 4. **Fallback**: `Other/<name>`
//!
//! Classification never fails. Fields with odd shapes were already reduced
//! to empty values when the definition was read.
//!
//! ```rust
//! use composeviz::classify::classify;
//! use composeviz::compose::ServiceDefinition;
//!
//! assert_eq!(classify("kafka-broker", &ServiceDefinition::default()), "Messaging/Kafka");
//! assert_eq!(classify("myapp-api", &ServiceDefinition::default()), "Web/App");
//! assert_eq!(classify("sidecar", &ServiceDefinition::default()), "Other/sidecar");
//! ```

mod hints;
mod tokens;

pub use hints::*;
pub use tokens::*;

use serde::Serialize;
use std::fmt;
use tracing::trace;

use crate::compose::ServiceDefinition;

/// Which classification tier produced a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Token,
    Port,
    Keyword,
    Fallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Token => write!(f, "token"),
            Tier::Port => write!(f, "port"),
            Tier::Keyword => write!(f, "keyword"),
            Tier::Fallback => write!(f, "fallback"),
        }
    }
}

/// A role together with the evidence that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub role: String,
    pub tier: Tier,
    /// The token, port or keyword that matched; `None` for the fallback
    pub matched: Option<String>,
}

impl Classification {
    fn new(role: impl Into<String>, tier: Tier, matched: Option<String>) -> Self {
        Self {
            role: role.into(),
            tier,
            matched,
        }
    }

    /// The domain part of the role, used as the diagram group
    pub fn group(&self) -> &str {
        role_group(&self.role)
    }
}

/// Classify a service into a `Domain/Technology` role
pub fn classify(name: &str, definition: &ServiceDefinition) -> String {
    explain(name, definition).role
}

/// Classify a service and report which tier matched
pub fn explain(name: &str, definition: &ServiceDefinition) -> Classification {
    let tokens = extract_tokens(name, definition);
    trace!(service = name, token_count = tokens.len(), "Extracted tokens");

    for token in tokens.iter() {
        if let Some(role) = token_role(token) {
            return Classification::new(role, Tier::Token, Some(token.to_string()));
        }
    }

    for port in definition.container_ports() {
        if let Some(role) = port_role(port) {
            return Classification::new(role, Tier::Port, Some(port.to_string()));
        }
    }

    let lowered = name.to_lowercase();
    if let Some(keyword) = APP_KEYWORDS.iter().find(|k| lowered.contains(*k)) {
        return Classification::new("Web/App", Tier::Keyword, Some(keyword.to_string()));
    }
    if let Some(keyword) = FRONTEND_KEYWORDS.iter().find(|k| lowered.contains(*k)) {
        return Classification::new("Web/Frontend", Tier::Keyword, Some(keyword.to_string()));
    }

    Classification::new(format!("Other/{}", name), Tier::Fallback, None)
}

/// Group label of a role: everything before the first `/`, or the whole role
pub fn role_group(role: &str) -> &str {
    role.split_once('/').map_or(role, |(group, _)| group)
}
