//! Diagram renderers and the pipeline that drives them
//!
//! Each output notation lives in its own plugin module and implements
//! [`crate::core::Renderer`] for [`crate::graph::ServiceGraph`].

pub mod mermaid;
pub mod orchestrator;
pub mod plantuml;

pub use mermaid::*;
pub use orchestrator::*;
pub use plantuml::*;
