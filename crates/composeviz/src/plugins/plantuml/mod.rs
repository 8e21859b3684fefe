//! PlantUML component output

mod renderer;

pub use renderer::*;
