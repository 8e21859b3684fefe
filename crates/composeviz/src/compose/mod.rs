//! Compose document model and loader

mod definition;
mod loader;

pub use definition::*;
pub use loader::*;
