//! Mermaid flowchart output

mod renderer;

pub use renderer::*;
